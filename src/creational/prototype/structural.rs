// Prototype - structural skeleton.

use std::fmt;
use std::io::Write;

use crate::Result;

pub trait Prototype: fmt::Display {
    fn id(&self) -> &str;
    fn clone_box(&self) -> Box<dyn Prototype>;
}

macro_rules! concrete_prototype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            id: String,
        }

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self { id: id.into() }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.id)
            }
        }

        impl Prototype for $name {
            fn id(&self) -> &str {
                &self.id
            }

            fn clone_box(&self) -> Box<dyn Prototype> {
                Box::new(self.clone())
            }
        }
    };
}

concrete_prototype!(ConcretePrototype1);
concrete_prototype!(ConcretePrototype2);

pub fn run(out: &mut dyn Write) -> Result<()> {
    let p1: Box<dyn Prototype> = Box::new(ConcretePrototype1::new("1"));
    let c1 = p1.clone_box();
    writeln!(out, "Cloned: {c1}")?;

    let p2: Box<dyn Prototype> = Box::new(ConcretePrototype2::new("2"));
    let c2 = p2.clone_box();
    writeln!(out, "Cloned: {c2}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cloned: 1\nCloned: 2\n");
    }

    #[test]
    fn test_clone_is_distinct_but_equal() {
        let original: Box<dyn Prototype> = Box::new(ConcretePrototype1::new("42"));
        let copy = original.clone_box();

        assert_eq!(copy.id(), original.id());
        assert!(!std::ptr::addr_eq(original.as_ref(), copy.as_ref()));
    }
}
