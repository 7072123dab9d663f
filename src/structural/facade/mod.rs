//! Facade: one simple interface in front of a set of subsystems.

pub mod real_world;
pub mod structural;
