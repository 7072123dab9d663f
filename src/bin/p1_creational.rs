// Pattern 1: Creational Patterns
// Runs every creational scenario in catalog order.

use std::io::{self, Write};
use std::process::ExitCode;

use design_patterns::catalog::{self, Category};
use design_patterns::config::Settings;
use design_patterns::logging;
use design_patterns::runner::Runner;
use design_patterns::Result;

fn run() -> Result<()> {
    let settings = Settings::load(None)?;
    logging::init(settings.log.json, settings.log.level());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Pattern 1: Creational Patterns")?;
    writeln!(out, "===============================\n")?;

    let runner = Runner::from(&settings.output);
    runner.run_all(catalog::by_category(Category::Creational), &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
