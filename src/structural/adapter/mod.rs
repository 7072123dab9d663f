//! Adapter: converts the interface of a type into the one its clients expect,
//! so types with incompatible interfaces can work together.

pub mod real_world;
pub mod real_world_01;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
