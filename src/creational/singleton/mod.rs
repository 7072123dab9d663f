//! Singleton: one instance per process behind a global access point.
//!
//! Each scenario uses a different lazy-initialisation primitive: `OnceLock`,
//! a lock-guarded check-and-create, `lazy_static!` and `once_cell::sync::Lazy`.

pub mod real_world;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
