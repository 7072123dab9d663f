// Adapter - chemical compounds, eager variant.
// The adapter reads the databank once on construction and then behaves like
// any other `Compound`.

use std::fmt;
use std::io::Write;

use super::real_world::{ChemicalDatabank, CriticalPoint};
use crate::Result;

pub trait Compound: fmt::Display {}

pub struct UnknownCompound;

impl fmt::Display for UnknownCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10}: Unknown", "Compound")
    }
}

impl Compound for UnknownCompound {}

#[derive(Debug, Clone, PartialEq)]
pub struct RichCompound {
    pub chemical: String,
    pub formula: &'static str,
    pub weight: f64,
    pub melting_point: f32,
    pub boiling_point: f32,
}

impl RichCompound {
    pub fn new(chemical: &str) -> Self {
        let bank = ChemicalDatabank;
        Self {
            chemical: chemical.to_string(),
            formula: bank.molecular_structure(chemical),
            weight: bank.molecular_weight(chemical),
            melting_point: bank.critical_point(chemical, CriticalPoint::Melting),
            boiling_point: bank.critical_point(chemical, CriticalPoint::Boiling),
        }
    }
}

impl fmt::Display for RichCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10}: {}", "Compound", self.chemical)?;
        writeln!(f, "{:>10}: {}", "Formula", self.formula)?;
        writeln!(f, "{:>10}: {}", "Weight", self.weight)?;
        writeln!(f, "{:>10}: {}", "Melting Pt", self.melting_point)?;
        writeln!(f, "{:>10}: {}", "Boiling Pt", self.boiling_point)
    }
}

impl Compound for RichCompound {}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let compound = UnknownCompound;
    write!(out, "{compound}")?;

    writeln!(out)?;

    let water = RichCompound::new("Water");
    write!(out, "{water}")?;

    writeln!(out)?;

    let benzene = RichCompound::new("Benzene");
    write!(out, "{benzene}")?;

    writeln!(out)?;

    let ethanol = RichCompound::new("Ethanol");
    write!(out, "{ethanol}")?;
    Ok(())
}
