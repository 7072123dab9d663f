//! Builder: separates the construction of a complex object from its
//! representation, so one construction process can yield different
//! representations.

pub mod real_world;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
