// Adapter - chemical compounds.
// `RichCompound` adapts the legacy databank API to the `Compound` interface.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalPoint {
    Melting,
    Boiling,
}

/// The adaptee: a lookup API keyed by loosely-cased compound names.
#[derive(Debug, Default)]
pub struct ChemicalDatabank;

impl ChemicalDatabank {
    pub fn critical_point(&self, compound: &str, point: CriticalPoint) -> f32 {
        match (compound.to_lowercase().as_str(), point) {
            ("water", CriticalPoint::Melting) => 0.0,
            ("benzene", CriticalPoint::Melting) => 5.5,
            ("ethanol", CriticalPoint::Melting) => 114.1,
            ("water", CriticalPoint::Boiling) => 100.0,
            ("benzene", CriticalPoint::Boiling) => 80.1,
            ("ethanol", CriticalPoint::Boiling) => 78.3,
            _ => 0.0,
        }
    }

    pub fn molecular_structure(&self, compound: &str) -> &'static str {
        match compound.to_lowercase().as_str() {
            "water" => "H20",
            "benzene" => "C6H6",
            "ethanol" => "C2H5OH",
            _ => "",
        }
    }

    pub fn molecular_weight(&self, compound: &str) -> f64 {
        match compound.to_lowercase().as_str() {
            "water" => 18.015,
            "benzene" => 78.1134,
            "ethanol" => 46.0688,
            _ => 0.0,
        }
    }
}

pub trait Compound {
    fn display(&mut self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct UnknownCompound;

impl Compound for UnknownCompound {
    fn display(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{:>10}: Unknown \n", "Compound")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RichCompound {
    chemical: String,
    pub boiling_point: Option<f32>,
    pub melting_point: Option<f32>,
    pub molecular_weight: Option<f64>,
    pub molecular_formula: Option<String>,
}

impl RichCompound {
    pub fn new(chemical: impl Into<String>) -> Self {
        Self {
            chemical: chemical.into(),
            ..Self::default()
        }
    }

    fn load(&mut self) {
        let bank = ChemicalDatabank;
        self.boiling_point = Some(bank.critical_point(&self.chemical, CriticalPoint::Boiling));
        self.melting_point = Some(bank.critical_point(&self.chemical, CriticalPoint::Melting));
        self.molecular_weight = Some(bank.molecular_weight(&self.chemical));
        self.molecular_formula = Some(bank.molecular_structure(&self.chemical).to_string());
    }
}

fn shown<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Compound for RichCompound {
    fn display(&mut self, out: &mut dyn Write) -> Result<()> {
        self.load();

        writeln!(out, "{:>10}: {}", "Compound", self.chemical)?;
        writeln!(out, "{:>10}: {}", "Formula", shown(&self.molecular_formula))?;
        writeln!(out, "{:>10}: {}", "Weight", shown(&self.molecular_weight))?;
        writeln!(out, "{:>10}: {}", "Melting Pt", shown(&self.melting_point))?;
        writeln!(out, "{:>10}: {}", "Boiling Pt", shown(&self.boiling_point))?;
        writeln!(out)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut compounds: Vec<Box<dyn Compound>> = vec![
        Box::new(UnknownCompound),
        Box::new(RichCompound::new("Water")),
        Box::new(RichCompound::new("Benzene")),
        Box::new(RichCompound::new("Ethanol")),
    ];

    for compound in &mut compounds {
        compound.display(out)?;
    }
    Ok(())
}
