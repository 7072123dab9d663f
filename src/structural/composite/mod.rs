//! Composite: objects composed into trees so that single objects and groups
//! are handled the same way.

pub mod real_world;
pub mod structural;
