// Prototype - color manager, value-typed variant.
// Colors are stored by value and `Clone` is the prototype operation.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
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

#[derive(Debug, Default)]
pub struct ColorManager {
    colors: HashMap<String, Color>,
}

impl ColorManager {
    pub fn insert(&mut self, key: &str, red: u8, green: u8, blue: u8) {
        self.colors
            .insert(key.to_string(), Color { red, green, blue });
    }

    pub fn clone_of(&self, key: &str) -> Result<Color> {
        self.colors
            .get(key)
            .cloned()
            .ok_or_else(|| PatternError::unknown_key("color", key))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Color> {
        self.colors
            .get_mut(key)
            .ok_or_else(|| PatternError::unknown_key("color", key))
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut manager = ColorManager::default();

    manager.insert("red", 255, 0, 0);
    manager.insert("green", 0, 255, 0);
    manager.insert("blue", 0, 0, 255);

    manager.insert("angry", 255, 54, 0);
    manager.insert("peace", 128, 211, 128);
    manager.insert("flame", 211, 34, 20);

    let angry = manager.clone_of("angry")?;
    writeln!(out, "Cloning - {angry}")?;

    let peace = manager.clone_of("peace")?;
    writeln!(out, "Cloning - {peace}")?;

    let flame = manager.clone_of("flame")?;
    writeln!(out, "Cloning - {flame}")?;
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
             Cloning - Color RGB: 211, 34, 20\n"
        );
    }

    #[test]
    fn test_mutating_original_leaves_clone() {
        let mut manager = ColorManager::default();
        manager.insert("flame", 211, 34, 20);

        let clone = manager.clone_of("flame").unwrap();
        manager.get_mut("flame").unwrap().green = 200;

        assert_eq!(clone.green, 34);
        assert_eq!(manager.clone_of("flame").unwrap().green, 200);
    }

    #[test]
    fn test_unknown_color() {
        let mut manager = ColorManager::default();
        assert!(manager.clone_of("teal").is_err());
        assert!(manager.get_mut("teal").is_err());
    }
}
