//! Proxy: a surrogate that controls access to another object.

pub mod real_world;
pub mod structural;
