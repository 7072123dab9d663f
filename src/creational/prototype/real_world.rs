// Prototype - color manager.
// Named colors are registered once and handed out as clones.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::{PatternError, Result};

pub trait ColorPrototype: fmt::Display {
    fn clone_prototype(&self) -> Box<dyn ColorPrototype>;
    fn rgb(&self) -> (u8, u8, u8);
}

#[derive(Debug, PartialEq, Eq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color RGB: {:>3},{:>3},{:>3}",
            self.red, self.green, self.blue
        )
    }
}

impl ColorPrototype for Color {
    fn clone_prototype(&self) -> Box<dyn ColorPrototype> {
        Box::new(Color {
            red: self.red,
            green: self.green,
            blue: self.blue,
        })
    }

    fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

#[derive(Default)]
pub struct ColorManager {
    colors: HashMap<String, Box<dyn ColorPrototype>>,
}

impl ColorManager {
    pub fn set(&mut self, key: &str, color: impl ColorPrototype + 'static) {
        self.colors.insert(key.to_string(), Box::new(color));
    }

    pub fn get(&self, key: &str) -> Result<&dyn ColorPrototype> {
        self.colors
            .get(key)
            .map(Box::as_ref)
            .ok_or_else(|| PatternError::unknown_key("color", key))
    }
}

fn palette() -> [(&'static str, u8, u8, u8); 6] {
    [
        ("red", 255, 0, 0),
        ("green", 0, 255, 0),
        ("blue", 0, 0, 255),
        ("angry", 255, 54, 0),
        ("peace", 128, 211, 128),
        ("flame", 211, 34, 20),
    ]
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut manager = ColorManager::default();
    for (name, red, green, blue) in palette() {
        manager.set(name, Color::new(red, green, blue));
    }

    for name in ["angry", "peace", "flame"] {
        let color = manager.get(name)?.clone_prototype();
        writeln!(out, "Cloning - {color}")?;
    }

    writeln!(out)?;
    Ok(())
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
            "Cloning - Color RGB: 255, 54,  0\n\
             Cloning - Color RGB: 128,211,128\n\
             Cloning - Color RGB: 211, 34, 20\n\n"
        );
    }

    #[test]
    fn test_unknown_color() {
        let manager = ColorManager::default();
        assert!(matches!(
            manager.get("mauve"),
            Err(PatternError::UnknownKey { kind: "color", .. })
        ));
    }

    #[test]
    fn test_clone_matches_prototype() {
        let mut manager = ColorManager::default();
        manager.set("peace", Color::new(128, 211, 128));

        let prototype = manager.get("peace").unwrap();
        let clone = prototype.clone_prototype();
        assert_eq!(clone.rgb(), prototype.rgb());
        assert!(!std::ptr::addr_eq(prototype, clone.as_ref()));
    }
}
