//! Abstract Factory: an interface for creating families of related or
//! dependent objects without specifying their concrete types.
//!
//! Swapping the factory handed to a client swaps the whole family; the client
//! itself never names a concrete product.

pub mod real_world;
pub mod real_world_02;
pub mod real_world_03;
pub mod real_world_04;
pub mod structural;
