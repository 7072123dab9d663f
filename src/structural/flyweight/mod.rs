//! Flyweight: shares fine-grained objects so large numbers of them stay cheap.
//! Shared state lives in the flyweight; per-use state is passed in.

pub mod real_world;
pub mod structural;
