// Pattern 2: Structural Patterns
// Runs every structural scenario in catalog order.

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

    writeln!(out, "Pattern 2: Structural Patterns")?;
    writeln!(out, "===============================\n")?;

    let runner = Runner::from(&settings.output);
    runner.run_all(catalog::by_category(Category::Structural), &mut out)?;
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
