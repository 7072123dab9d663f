// Factory Method - structural skeleton.

use std::io::Write;

use crate::Result;

pub trait Product {
    fn name(&self) -> &'static str;
}

pub struct ConcreteProductA;
pub struct ConcreteProductB;

impl Product for ConcreteProductA {
    fn name(&self) -> &'static str {
        "ConcreteProductA"
    }
}

impl Product for ConcreteProductB {
    fn name(&self) -> &'static str {
        "ConcreteProductB"
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;
}

pub struct ConcreteCreatorA;
pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let creators: Vec<Box<dyn Creator>> =
        vec![Box::new(ConcreteCreatorA), Box::new(ConcreteCreatorB)];

    for creator in &creators {
        let product = creator.factory_method();
        writeln!(out, "Created {}", product.name())?;
    }

    writeln!(out)?;
    Ok(())
}
