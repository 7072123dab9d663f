// Abstract Factory - structural skeleton.
// Two concrete factories, each producing one A and one B of its own family.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    One,
    Two,
}

// ============================================================================
// Abstract products
// ============================================================================

pub trait AbstractProductA {
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;
}

pub trait AbstractProductB {
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;

    fn interact(&self, a: &dyn AbstractProductA, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} interacts with {}", self.name(), a.name())?;
        Ok(())
    }
}

// ============================================================================
// Products
// ============================================================================

pub struct ProductA1;
pub struct ProductA2;
pub struct ProductB1;
pub struct ProductB2;

impl AbstractProductA for ProductA1 {
    fn name(&self) -> &'static str {
        "ProductA1"
    }
    fn family(&self) -> Family {
        Family::One
    }
}

impl AbstractProductA for ProductA2 {
    fn name(&self) -> &'static str {
        "ProductA2"
    }
    fn family(&self) -> Family {
        Family::Two
    }
}

impl AbstractProductB for ProductB1 {
    fn name(&self) -> &'static str {
        "ProductB1"
    }
    fn family(&self) -> Family {
        Family::One
    }
}

impl AbstractProductB for ProductB2 {
    fn name(&self) -> &'static str {
        "ProductB2"
    }
    fn family(&self) -> Family {
        Family::Two
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA1)
    }
    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB1)
    }
}

pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA2)
    }
    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB2)
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct Client {
    product_a: Box<dyn AbstractProductA>,
    product_b: Box<dyn AbstractProductB>,
}

impl Client {
    pub fn new(factory: &dyn AbstractFactory) -> Self {
        Self {
            product_a: factory.create_product_a(),
            product_b: factory.create_product_b(),
        }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        self.product_b.interact(self.product_a.as_ref(), out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    Client::new(&ConcreteFactory1).run(out)?;
    Client::new(&ConcreteFactory2).run(out)?;

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
            "ProductB1 interacts with ProductA1\nProductB2 interacts with ProductA2\n\n"
        );
    }

    #[test]
    fn test_factories_never_mix_families() {
        let factories: Vec<(Box<dyn AbstractFactory>, Family)> = vec![
            (Box::new(ConcreteFactory1), Family::One),
            (Box::new(ConcreteFactory2), Family::Two),
        ];

        for (factory, family) in factories {
            assert_eq!(factory.create_product_a().family(), family);
            assert_eq!(factory.create_product_b().family(), family);
        }
    }
}
