// Flyweight - document characters.
// Glyph metrics are created once per symbol; the point size is supplied at
// display time.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use tracing::trace;

use crate::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub symbol: char,
    pub width: u32,
    pub height: u32,
    pub ascent: u32,
    pub descent: u32,
}

impl Character {
    fn for_symbol(symbol: char) -> Option<Self> {
        let (width, ascent) = match symbol {
            'A' => (120, 70),
            'B' => (140, 72),
            'Z' => (100, 68),
            _ => return None,
        };
        Some(Self {
            symbol,
            width,
            height: 100,
            ascent,
            descent: 0,
        })
    }

    pub fn display(&self, point_size: u32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} (pointsize {point_size})", self.symbol)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CharacterFactory {
    characters: HashMap<char, Rc<Character>>,
}

impl CharacterFactory {
    pub fn get_character(&mut self, key: char) -> Result<Rc<Character>> {
        if let Some(character) = self.characters.get(&key) {
            return Ok(Rc::clone(character));
        }

        let character = Character::for_symbol(key)
            .map(Rc::new)
            .ok_or_else(|| PatternError::unknown_key("glyph", key.to_string()))?;
        trace!(symbol = %key, "new flyweight");
        self.characters.insert(key, Rc::clone(&character));
        Ok(character)
    }

    /// Distinct flyweights created so far.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

pub fn render(document: &str, factory: &mut CharacterFactory, out: &mut dyn Write) -> Result<()> {
    let mut point_size = 10;
    for c in document.chars() {
        point_size += 1;
        factory.get_character(c)?.display(point_size, out)?;
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut factory = CharacterFactory::default();
    render("AAZZBBZB", &mut factory, out)
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
            "A (pointsize 11)\nA (pointsize 12)\nZ (pointsize 13)\nZ (pointsize 14)\n\
             B (pointsize 15)\nB (pointsize 16)\nZ (pointsize 17)\nB (pointsize 18)\n"
        );
    }

    #[test]
    fn test_characters_are_shared() {
        let mut factory = CharacterFactory::default();
        render("AAZZBBZB", &mut factory, &mut Vec::new()).unwrap();
        assert_eq!(factory.len(), 3);

        let a1 = factory.get_character('A').unwrap();
        let a2 = factory.get_character('A').unwrap();
        assert!(Rc::ptr_eq(&a1, &a2));
        assert_eq!((a1.width, a1.height, a1.ascent, a1.descent), (120, 100, 70, 0));
    }

    #[test]
    fn test_unknown_glyph() {
        let mut factory = CharacterFactory::default();
        assert!(matches!(
            factory.get_character('Q'),
            Err(PatternError::UnknownKey { kind: "glyph", .. })
        ));
        assert!(factory.is_empty());
    }
}
