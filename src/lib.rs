// Design Patterns Catalog
// Creational and structural patterns, each with a structural skeleton and
// one or more real-world scenarios.

//! # Design Patterns Catalog
//!
//! ## Creational Patterns
//! - Abstract Factory (trait-object families)
//! - Builder (director recipes, fluent SQL builder, typed query operations)
//! - Factory Method (trait default methods over a creation hook)
//! - Prototype (explicit clone operations)
//! - Singleton (OnceLock, Mutex, lazy_static, once_cell)
//!
//! ## Structural Patterns
//! - Adapter
//! - Bridge
//! - Composite
//! - Decorator
//! - Facade
//! - Flyweight
//! - Proxy
//!
//! Every scenario exposes `run(out: &mut dyn Write) -> Result<()>` and is
//! registered in [`catalog`]. Run them with:
//! ```bash
//! cargo run --bin design-patterns -- list
//! cargo run --bin design-patterns -- run builder/real-world-03
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! ```

pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod runner;
pub mod structural;

pub use error::{PatternError, Result};
