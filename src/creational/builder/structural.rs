// Builder - structural skeleton.

use std::io::Write;

use crate::Result;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn show(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Product Parts:")?;
        for part in &self.parts {
            writeln!(out, "  {part}")?;
        }
        Ok(())
    }
}

pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);
    fn result(&mut self) -> Product;
}

#[derive(Default)]
pub struct ConcreteBuilder1 {
    product: Product,
}

impl Builder for ConcreteBuilder1 {
    fn build_part_a(&mut self) {
        self.product.add("PartA");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartB");
    }

    fn result(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

#[derive(Default)]
pub struct ConcreteBuilder2 {
    product: Product,
}

impl Builder for ConcreteBuilder2 {
    fn build_part_a(&mut self) {
        self.product.add("PartX");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartY");
    }

    fn result(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

pub struct Director;

impl Director {
    pub fn construct(builder: &mut dyn Builder) {
        builder.build_part_a();
        builder.build_part_b();
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut b1 = ConcreteBuilder1::default();
    Director::construct(&mut b1);
    b1.result().show(out)?;

    writeln!(out)?;

    let mut b2 = ConcreteBuilder2::default();
    Director::construct(&mut b2);
    b2.result().show(out)?;
    Ok(())
}
