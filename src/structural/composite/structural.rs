// Composite - structural skeleton.

use std::io::Write;

use crate::{PatternError, Result};

pub trait Component {
    fn name(&self) -> &str;
    fn add(&mut self, component: Box<dyn Component>) -> Result<()>;
    fn remove(&mut self, name: &str) -> Result<Box<dyn Component>>;
    fn display(&self, depth: usize, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Box<Self> {
        Box::new(Self { name: name.into() })
    }
}

impl Component for Leaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&mut self, _component: Box<dyn Component>) -> Result<()> {
        Err(PatternError::LeafHasNoChildren(self.name.clone()))
    }

    fn remove(&mut self, _name: &str) -> Result<Box<dyn Component>> {
        Err(PatternError::LeafHasNoChildren(self.name.clone()))
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}{}", "-".repeat(depth), self.name)?;
        Ok(())
    }
}

pub struct Composite {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            name: name.into(),
            children: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&mut self, component: Box<dyn Component>) -> Result<()> {
        self.children.push(component);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Box<dyn Component>> {
        let index = self
            .children
            .iter()
            .position(|child| child.name() == name)
            .ok_or_else(|| PatternError::unknown_key("component", name))?;
        Ok(self.children.remove(index))
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}{}", "-".repeat(depth), self.name)?;
        for child in &self.children {
            child.display(depth + 2, out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut root = Composite::new("root");
    root.add(Leaf::new("Leaf A"))?;
    root.add(Leaf::new("Leaf B"))?;

    let mut comp = Composite::new("Composite X");
    comp.add(Leaf::new("Leaf XA"))?;
    comp.add(Leaf::new("Leaf XB"))?;

    root.add(comp)?;
    root.add(Leaf::new("Leaf C"))?;

    root.add(Leaf::new("Leaf D"))?;
    root.remove("Leaf D")?;

    root.display(1, out)
}
