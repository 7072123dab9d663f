//! Prototype: new objects are produced by copying a prototypical instance.
//!
//! Cloning copies every value field explicitly. References the prototype
//! merely points at, such as a page's author, stay shared.

pub mod real_world;
pub mod real_world_01;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
