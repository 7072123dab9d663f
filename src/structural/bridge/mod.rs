//! Bridge: decouples an abstraction from its implementation so the two can
//! vary independently.

pub mod real_world_01;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
