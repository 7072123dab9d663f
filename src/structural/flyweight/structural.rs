// Flyweight - structural skeleton.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::{PatternError, Result};

pub trait Flyweight {
    fn operation(&self, extrinsic_state: i32, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug)]
pub struct ConcreteFlyweight;

impl Flyweight for ConcreteFlyweight {
    fn operation(&self, extrinsic_state: i32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteFlyweight: {extrinsic_state}")?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct UnsharedConcreteFlyweight;

impl Flyweight for UnsharedConcreteFlyweight {
    fn operation(&self, extrinsic_state: i32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "UnsharedConcreteFlyweight: {extrinsic_state}")?;
        Ok(())
    }
}

pub struct FlyweightFactory {
    flyweights: HashMap<&'static str, Rc<dyn Flyweight>>,
}

impl Default for FlyweightFactory {
    fn default() -> Self {
        let flyweights = ["X", "Y", "Z"]
            .into_iter()
            .map(|key| (key, Rc::new(ConcreteFlyweight) as Rc<dyn Flyweight>))
            .collect();
        Self { flyweights }
    }
}

impl FlyweightFactory {
    pub fn get_flyweight(&self, key: &str) -> Result<Rc<dyn Flyweight>> {
        self.flyweights
            .get(key)
            .cloned()
            .ok_or_else(|| PatternError::unknown_key("flyweight", key))
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut extrinsic_state = 22;
    let factory = FlyweightFactory::default();

    for key in ["X", "Y", "Z"] {
        extrinsic_state -= 1;
        factory.get_flyweight(key)?.operation(extrinsic_state, out)?;
    }

    extrinsic_state -= 1;
    UnsharedConcreteFlyweight.operation(extrinsic_state, out)
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
            "ConcreteFlyweight: 21\nConcreteFlyweight: 20\nConcreteFlyweight: 19\nUnsharedConcreteFlyweight: 18\n"
        );
    }

    #[test]
    fn test_same_key_same_instance() {
        let factory = FlyweightFactory::default();
        let a = factory.get_flyweight("X").unwrap();
        let b = factory.get_flyweight("X").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(factory.get_flyweight("W").is_err());
    }
}
