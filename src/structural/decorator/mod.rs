//! Decorator: attaches responsibilities to an object dynamically by wrapping
//! it in another object with the same interface.

pub mod real_world;
pub mod structural;
