//! Factory Method: an interface for creating an object, leaving the choice of
//! concrete type to the implementor.

pub mod real_world;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
