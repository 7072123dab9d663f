// Facade - structural skeleton.

use std::io::Write;

use crate::Result;

macro_rules! subsystem {
    ($name:ident, $method:ident, $label:literal) => {
        #[derive(Debug, Default)]
        pub struct $name;

        impl $name {
            pub fn $method(&self, out: &mut dyn Write) -> Result<()> {
                writeln!(out, $label)?;
                Ok(())
            }
        }
    };
}

subsystem!(SubSystemOne, method_one, "SubSystemOne Method");
subsystem!(SubSystemTwo, method_two, "SubSystemTwo Method");
subsystem!(SubSystemThree, method_three, "SubSystemThree Method");
subsystem!(SubSystemFour, method_four, "SubSystemFour Method");

#[derive(Debug, Default)]
pub struct Facade {
    one: SubSystemOne,
    two: SubSystemTwo,
    three: SubSystemThree,
    four: SubSystemFour,
}

impl Facade {
    pub fn method_a(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "MethodA() ---- ")?;
        self.one.method_one(out)?;
        self.two.method_two(out)?;
        self.four.method_four(out)
    }

    pub fn method_b(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "MethodB() ---- ")?;
        self.two.method_two(out)?;
        self.three.method_three(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let facade = Facade::default();
    facade.method_a(out)?;
    facade.method_b(out)
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
            "\nMethodA() ---- \nSubSystemOne Method\nSubSystemTwo Method\nSubSystemFour Method\n\
             \nMethodB() ---- \nSubSystemTwo Method\nSubSystemThree Method\n"
        );
    }
}
