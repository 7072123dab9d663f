// Bridge - structural skeleton.

use std::io::Write;

use crate::Result;

pub trait Implementor {
    fn operation(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct ConcreteImplementorA;

impl Implementor for ConcreteImplementorA {
    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteImplementorA Operation")?;
        Ok(())
    }
}

pub struct ConcreteImplementorB;

impl Implementor for ConcreteImplementorB {
    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteImplementorB Operation")?;
        Ok(())
    }
}

pub struct Abstraction {
    implementor: Box<dyn Implementor>,
}

impl Abstraction {
    pub fn new(implementor: Box<dyn Implementor>) -> Self {
        Self { implementor }
    }

    pub fn set_implementor(&mut self, implementor: Box<dyn Implementor>) {
        self.implementor = implementor;
    }

    pub fn operation(&self, out: &mut dyn Write) -> Result<()> {
        self.implementor.operation(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut abstraction = Abstraction::new(Box::new(ConcreteImplementorA));
    abstraction.operation(out)?;

    abstraction.set_implementor(Box::new(ConcreteImplementorB));
    abstraction.operation(out)
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
            "ConcreteImplementorA Operation\nConcreteImplementorB Operation\n"
        );
    }
}
