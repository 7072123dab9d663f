// Adapter - structural skeleton.

use std::io::Write;

use crate::Result;

pub trait Target {
    fn request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Called Target Request()")?;
        Ok(())
    }
}

pub struct PlainTarget;

impl Target for PlainTarget {}

pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Called Adaptee SpecificRequest()")?;
        Ok(())
    }
}

pub struct Adapter {
    adaptee: Adaptee,
}

impl Default for Adapter {
    fn default() -> Self {
        Self { adaptee: Adaptee }
    }
}

impl Target for Adapter {
    fn request(&self, out: &mut dyn Write) -> Result<()> {
        self.adaptee.specific_request(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let targets: [Box<dyn Target>; 2] = [Box::new(PlainTarget), Box::new(Adapter::default())];
    for target in &targets {
        target.request(out)?;
    }

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
            "Called Target Request()\nCalled Adaptee SpecificRequest()\n\n"
        );
    }
}
