// Proxy - math service.
// The proxy exposes the same operations and forwards them to a lazily
// created `Math` instance.

use std::cell::OnceCell;
use std::io::Write;

use tracing::trace;

use crate::{PatternError, Result};

pub trait MathService {
    fn add(&self, x: f64, y: f64) -> f64;
    fn sub(&self, x: f64, y: f64) -> f64;
    fn mul(&self, x: f64, y: f64) -> f64;
    fn div(&self, x: f64, y: f64) -> Result<f64>;
}

#[derive(Debug, Default)]
pub struct Math;

impl MathService for Math {
    fn add(&self, x: f64, y: f64) -> f64 {
        x + y
    }

    fn sub(&self, x: f64, y: f64) -> f64 {
        x - y
    }

    fn mul(&self, x: f64, y: f64) -> f64 {
        x * y
    }

    fn div(&self, x: f64, y: f64) -> Result<f64> {
        if y == 0.0 {
            return Err(PatternError::DivisionByZero);
        }
        Ok(x / y)
    }
}

#[derive(Debug, Default)]
pub struct MathProxy {
    math: OnceCell<Math>,
}

impl MathProxy {
    fn math(&self) -> &Math {
        self.math.get_or_init(|| {
            trace!("creating Math behind proxy");
            Math
        })
    }
}

impl MathService for MathProxy {
    fn add(&self, x: f64, y: f64) -> f64 {
        self.math().add(x, y)
    }

    fn sub(&self, x: f64, y: f64) -> f64 {
        self.math().sub(x, y)
    }

    fn mul(&self, x: f64, y: f64) -> f64 {
        self.math().mul(x, y)
    }

    fn div(&self, x: f64, y: f64) -> Result<f64> {
        self.math().div(x, y)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let proxy = MathProxy::default();

    writeln!(out, "4 + 2 = {}", proxy.add(4.0, 2.0))?;
    writeln!(out, "4 - 2 = {}", proxy.sub(4.0, 2.0))?;
    writeln!(out, "4 * 2 = {}", proxy.mul(4.0, 2.0))?;
    writeln!(out, "4 / 2 = {}", proxy.div(4.0, 2.0)?)?;
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
            "4 + 2 = 6\n4 - 2 = 2\n4 * 2 = 8\n4 / 2 = 2\n"
        );
    }

    #[test]
    fn test_division_by_zero() {
        let proxy = MathProxy::default();
        assert!(matches!(proxy.div(1.0, 0.0), Err(PatternError::DivisionByZero)));
        assert_eq!(proxy.div(7.0, 2.0).unwrap(), 3.5);
    }
}
