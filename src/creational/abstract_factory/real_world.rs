// Abstract Factory - animal world.
// Each continent factory yields a herbivore and a carnivore that share a habitat.

use std::fmt;
use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continent {
    Africa,
    America,
}

pub trait Herbivore: fmt::Display {
    fn continent(&self) -> Continent;
}

pub trait Carnivore: fmt::Display {
    fn continent(&self) -> Continent;

    fn eat(&self, herbivore: &dyn Herbivore, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} eats {}", self, herbivore)?;
        Ok(())
    }
}

macro_rules! animal {
    ($name:ident, $kind:ident, $continent:ident) => {
        pub struct $name;

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl $kind for $name {
            fn continent(&self) -> Continent {
                Continent::$continent
            }
        }
    };
}

animal!(Wildebeest, Herbivore, Africa);
animal!(Lion, Carnivore, Africa);
animal!(Bison, Herbivore, America);
animal!(Wolf, Carnivore, America);

pub trait ContinentFactory {
    fn create_herbivore(&self) -> Box<dyn Herbivore>;
    fn create_carnivore(&self) -> Box<dyn Carnivore>;
}

pub struct AfricaFactory;

impl ContinentFactory for AfricaFactory {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Wildebeest)
    }
    fn create_carnivore(&self) -> Box<dyn Carnivore> {
        Box::new(Lion)
    }
}

pub struct AmericaFactory;

impl ContinentFactory for AmericaFactory {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Bison)
    }
    fn create_carnivore(&self) -> Box<dyn Carnivore> {
        Box::new(Wolf)
    }
}

/// Client: only ever sees the abstract herbivore and carnivore.
pub struct AnimalWorld {
    herbivore: Box<dyn Herbivore>,
    carnivore: Box<dyn Carnivore>,
}

impl AnimalWorld {
    pub fn new(factory: &dyn ContinentFactory) -> Self {
        Self {
            herbivore: factory.create_herbivore(),
            carnivore: factory.create_carnivore(),
        }
    }

    pub fn run_food_chain(&self, out: &mut dyn Write) -> Result<()> {
        self.carnivore.eat(self.herbivore.as_ref(), out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    AnimalWorld::new(&AfricaFactory).run_food_chain(out)?;
    AnimalWorld::new(&AmericaFactory).run_food_chain(out)?;

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_chain() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Lion eats Wildebeest\nWolf eats Bison\n\n"
        );
    }

    #[test]
    fn test_same_continent() {
        let africa = AfricaFactory;
        assert_eq!(africa.create_herbivore().continent(), Continent::Africa);
        assert_eq!(africa.create_carnivore().continent(), Continent::Africa);

        let america = AmericaFactory;
        assert_eq!(america.create_herbivore().continent(), Continent::America);
        assert_eq!(america.create_carnivore().continent(), Continent::America);
    }
}
