// Prototype - shape cache.
// The cache keeps one prototype per key and every lookup returns a fresh clone.

use std::any::Any;
use std::collections::HashMap;
use std::io::Write;

use crate::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Base prototype. Equality compares values and requires the same concrete shape.
pub trait Shape: Any {
    fn clone_shape(&self) -> Box<dyn Shape>;
    fn as_any(&self) -> &dyn Any;
    fn same_as(&self, other: &dyn Shape) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub origin: Origin,
    pub radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, color: Color, radius: i32) -> Self {
        Self {
            origin: Origin { x, y, color },
            radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub origin: Origin,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, color: Color, width: i32, height: i32) -> Self {
        Self {
            origin: Origin { x, y, color },
            width,
            height,
        }
    }
}

macro_rules! impl_shape {
    ($($shape:ty),*) => {$(
        impl Shape for $shape {
            fn clone_shape(&self) -> Box<dyn Shape> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn same_as(&self, other: &dyn Shape) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$shape>()
                    .is_some_and(|other| self == other)
            }
        }
    )*};
}

impl_shape!(Circle, Rectangle);

pub struct ShapeCache {
    cache: HashMap<String, Box<dyn Shape>>,
}

impl Default for ShapeCache {
    fn default() -> Self {
        let mut cache = Self {
            cache: HashMap::new(),
        };
        cache.put("Big green circle", Box::new(Circle::new(5, 7, Color::Green, 45)));
        cache.put(
            "Medium blue rectangle",
            Box::new(Rectangle::new(6, 9, Color::Blue, 8, 9)),
        );
        cache
    }
}

impl ShapeCache {
    pub fn put(&mut self, key: &str, shape: Box<dyn Shape>) {
        self.cache.insert(key.to_string(), shape);
    }

    pub fn get(&self, key: &str) -> Result<Box<dyn Shape>> {
        self.cache
            .get(key)
            .map(|shape| shape.clone_shape())
            .ok_or_else(|| PatternError::unknown_key("shape", key))
    }
}

fn compare(
    out: &mut dyn Write,
    label: &str,
    first: &dyn Shape,
    second: &dyn Shape,
    expect_equal: bool,
) -> Result<()> {
    if std::ptr::addr_eq(first, second) {
        writeln!(out, "{label} are the same object. (Wrong)")?;
        return Ok(());
    }

    let verdict = match (first.same_as(second), expect_equal) {
        (true, true) => "And they are identical. (Correct)",
        (true, false) => "And they are identical. (Wrong)",
        (false, false) => "But they are not identical. (Correct)",
        (false, true) => "But they are not identical. (Wrong)",
    };
    writeln!(out, "{label} are two different objects, {verdict}")?;
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let app = ShapeCache::default();

    let s1 = app.get("Big green circle")?;
    let s2 = app.get("Medium blue rectangle")?;
    let s3 = app.get("Medium blue rectangle")?;

    compare(
        out,
        "Shape 1 (Big green circle) and Shape 2 (Medium blue rectangle)",
        s1.as_ref(),
        s2.as_ref(),
        false,
    )?;
    compare(
        out,
        "Shape 2 (Medium blue rectangle) and Shape 3 (Medium blue rectangle)",
        s2.as_ref(),
        s3.as_ref(),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Shape 1 (Big green circle) and Shape 2 (Medium blue rectangle) are two different objects, But they are not identical. (Correct)\n\
             Shape 2 (Medium blue rectangle) and Shape 3 (Medium blue rectangle) are two different objects, And they are identical. (Correct)\n"
        );
    }

    #[test]
    fn test_clones_are_fresh_objects() {
        let cache = ShapeCache::default();
        let a = cache.get("Big green circle").unwrap();
        let b = cache.get("Big green circle").unwrap();

        assert!(a.same_as(b.as_ref()));
        assert!(!std::ptr::addr_eq(a.as_ref(), b.as_ref()));
    }

    #[test]
    fn test_different_kinds_never_equal() {
        let circle = Circle::new(1, 1, Color::Red, 1);
        let rect = Rectangle::new(1, 1, Color::Red, 1, 1);
        assert!(!circle.same_as(&rect));
        assert!(!circle.same_as(&Circle::new(1, 1, Color::Red, 2)));
    }

    #[test]
    fn test_missing_shape() {
        assert!(ShapeCache::default().get("Tiny red triangle").is_err());
    }
}
