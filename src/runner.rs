//! Runs catalog entries into a writer.

use std::io::Write;
use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info};

use crate::catalog::Example;
use crate::config::OutputSettings;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runner {
    pub headings: bool,
    pub color: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::from(&OutputSettings::default())
    }
}

impl From<&OutputSettings> for Runner {
    fn from(output: &OutputSettings) -> Self {
        Self {
            headings: output.headings,
            color: output.color,
        }
    }
}

impl Runner {
    pub fn plain() -> Self {
        Self {
            headings: false,
            color: false,
        }
    }

    fn heading(&self, example: &Example, out: &mut dyn Write) -> Result<()> {
        let line = format!("=== {} ===", example.heading());
        if self.color {
            writeln!(out, "{}", line.bold().cyan())?;
        } else {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn run_one(&self, example: &Example, out: &mut dyn Write) -> Result<()> {
        debug!(id = example.id, "running example");
        let started = Instant::now();

        if self.headings {
            self.heading(example, out)?;
        }
        (example.run)(&mut *out)?;
        if self.headings {
            writeln!(out)?;
        }

        debug!(
            id = example.id,
            elapsed_us = started.elapsed().as_micros() as u64,
            "example finished"
        );
        Ok(())
    }

    /// Runs each example in order and stops at the first failure.
    pub fn run_all<'a, I>(&self, examples: I, out: &mut dyn Write) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Example>,
    {
        let mut count = 0;
        for example in examples {
            self.run_one(example, out)?;
            count += 1;
        }
        out.flush()?;
        info!(count, "examples run");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_heading_and_separator() {
        let runner = Runner {
            headings: true,
            color: false,
        };
        let mut out = Vec::new();
        runner
            .run_one(catalog::find("singleton/structural").unwrap(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Singleton (Structural) ===\nObjects are the same instance\n\n"
        );
    }

    #[test]
    fn test_plain_output_matches_scenario() {
        let example = catalog::find("proxy/structural").unwrap();
        let mut out = Vec::new();
        Runner::plain().run_one(example, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), catalog::capture(example).unwrap());
    }

    #[test]
    fn test_run_all_counts() {
        let examples = catalog::by_pattern("facade").unwrap();
        let mut out = Vec::new();
        let count = Runner::plain()
            .run_all(examples.iter().copied(), &mut out)
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_runner_follows_output_settings() {
        let settings = OutputSettings {
            headings: false,
            color: true,
        };
        assert_eq!(
            Runner::from(&settings),
            Runner {
                headings: false,
                color: true
            }
        );
    }
}
