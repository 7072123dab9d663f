// Composite - drawing made of primitive and composite elements.

use std::io::Write;

use crate::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingElement {
    Primitive(String),
    Composite {
        name: String,
        elements: Vec<DrawingElement>,
    },
}

impl DrawingElement {
    pub fn primitive(name: &str) -> Self {
        Self::Primitive(name.to_string())
    }

    pub fn composite(name: &str) -> Self {
        Self::Composite {
            name: name.to_string(),
            elements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(name) | Self::Composite { name, .. } => name,
        }
    }

    pub fn add(&mut self, element: DrawingElement) -> Result<()> {
        match self {
            Self::Primitive(name) => Err(PatternError::LeafHasNoChildren(name.clone())),
            Self::Composite { elements, .. } => {
                elements.push(element);
                Ok(())
            }
        }
    }

    /// Removes the first direct child with the given name.
    pub fn remove(&mut self, target: &str) -> Result<DrawingElement> {
        match self {
            Self::Primitive(name) => Err(PatternError::LeafHasNoChildren(name.clone())),
            Self::Composite { elements, .. } => {
                let index = elements
                    .iter()
                    .position(|element| element.name() == target)
                    .ok_or_else(|| PatternError::unknown_key("drawing element", target))?;
                Ok(elements.remove(index))
            }
        }
    }

    pub fn display(&self, indent: usize, out: &mut dyn Write) -> Result<()> {
        let dashes = "-".repeat(indent);
        match self {
            Self::Primitive(name) => writeln!(out, "{dashes} {name}")?,
            Self::Composite { name, elements } => {
                writeln!(out, "{dashes}+ {name}")?;
                for element in elements {
                    element.display(indent + 2, out)?;
                }
            }
        }
        Ok(())
    }

    /// Primitives anywhere below this element.
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Primitive(_) => 1,
            Self::Composite { elements, .. } => {
                elements.iter().map(DrawingElement::primitive_count).sum()
            }
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut root = DrawingElement::composite("Picture");
    root.add(DrawingElement::primitive("Red Line"))?;
    root.add(DrawingElement::primitive("Blue Circle"))?;
    root.add(DrawingElement::primitive("Green Box"))?;

    let mut comp = DrawingElement::composite("Two Circles");
    comp.add(DrawingElement::primitive("Black Circle"))?;
    comp.add(DrawingElement::primitive("White Circle"))?;
    root.add(comp)?;

    let pe = DrawingElement::primitive("Yellow Line");
    root.add(pe)?;
    root.remove("Yellow Line")?;

    root.display(1, out)
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
            "-+ Picture\n\
             --- Red Line\n\
             --- Blue Circle\n\
             --- Green Box\n\
             ---+ Two Circles\n\
             ----- Black Circle\n\
             ----- White Circle\n"
        );
    }

    #[test]
    fn test_remove_unknown_and_leaf() {
        let mut root = DrawingElement::composite("Picture");
        assert!(matches!(
            root.remove("Purple Dot"),
            Err(PatternError::UnknownKey { .. })
        ));

        let mut line = DrawingElement::primitive("Red Line");
        assert!(matches!(
            line.add(DrawingElement::primitive("x")),
            Err(PatternError::LeafHasNoChildren(_))
        ));
    }

    #[test]
    fn test_primitive_count() {
        let mut root = DrawingElement::composite("Picture");
        let mut pair = DrawingElement::composite("Pair");
        pair.add(DrawingElement::primitive("a")).unwrap();
        pair.add(DrawingElement::primitive("b")).unwrap();
        root.add(pair).unwrap();
        root.add(DrawingElement::primitive("c")).unwrap();
        assert_eq!(root.primitive_count(), 3);
    }
}
