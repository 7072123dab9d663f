// Adapter - square pegs in round holes.

use std::io::Write;

use crate::Result;

pub trait RoundPeg {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits(&self, peg: &dyn RoundPeg) -> bool {
        self.radius() >= peg.radius()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimpleRoundPeg {
    radius: f64,
}

impl SimpleRoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RoundPeg for SimpleRoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Incompatible with holes: it only knows its width.
#[derive(Debug, Clone, Copy)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn square(&self) -> f64 {
        self.width.powi(2)
    }
}

/// Pretends to be a round peg whose radius circumscribes the square.
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }
}

impl RoundPeg for SquarePegAdapter {
    fn radius(&self) -> f64 {
        ((self.peg.width() / 2.0).powi(2) * 2.0).sqrt()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let round_hole = RoundHole::new(5.0);
    let round_peg = SimpleRoundPeg::new(5.0);

    if round_hole.fits(&round_peg) {
        writeln!(out, "Round peg r5 fits round hole r5.")?;
    }

    let small_square_peg = SquarePegAdapter::new(SquarePeg::new(2.0));
    let large_square_peg = SquarePegAdapter::new(SquarePeg::new(9.0));

    if round_hole.fits(&small_square_peg) {
        writeln!(out, "Square peg w2 fits round hole r5.")?;
    }

    if !round_hole.fits(&large_square_peg) {
        writeln!(out, "Square peg w9 does not fit into round hole r5.")?;
    }
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
            "Round peg r5 fits round hole r5.\n\
             Square peg w2 fits round hole r5.\n\
             Square peg w9 does not fit into round hole r5.\n"
        );
    }

    #[test]
    fn test_adapter_radius() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(2.0));
        assert!((adapter.radius() - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(SquarePeg::new(3.0).square(), 9.0);
    }

    #[test]
    fn test_threshold() {
        // w = 7 gives r ~ 4.95, w = 8 gives r ~ 5.66
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&SquarePegAdapter::new(SquarePeg::new(7.0))));
        assert!(!hole.fits(&SquarePegAdapter::new(SquarePeg::new(8.0))));
    }
}
