//! `design-patterns`: list and run the catalog scenarios.
//!
//! ## Commands
//!
//! - `list`: show every scenario id (`--json` for machine output)
//! - `run`: run scenarios by id, e.g. `builder/real-world-03`
//! - `pattern`: run every variant of one pattern
//! - `all`: run the whole catalog

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use design_patterns::catalog::{self, Category, Example};
use design_patterns::config::Settings;
use design_patterns::logging;
use design_patterns::runner::Runner;
use design_patterns::Result;

#[derive(Parser)]
#[command(name = "design-patterns")]
#[command(
    version,
    about = "Creational and structural design patterns, runnable",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(clap::Args, Debug)]
struct GlobalOpts {
    /// Settings file (TOML)
    #[arg(long, global = true, env = "DESIGN_PATTERNS_CONFIG")]
    config: Option<PathBuf>,

    /// Do not print a heading before each scenario
    #[arg(long, global = true)]
    no_headings: bool,

    /// Disable colored headings
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output on stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    List {
        /// Only one category
        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run scenarios by id
    Run {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Run every variant of one pattern
    Pattern {
        /// Pattern name, e.g. `builder` or `abstract-factory`
        name: String,
    },

    /// Run the whole catalog
    All,
}

fn list(category: Option<Category>, json: bool, out: &mut dyn Write) -> Result<()> {
    let examples: Vec<&Example> = catalog::all()
        .iter()
        .filter(|example| category.map_or(true, |c| example.category == c))
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&examples)?)?;
        return Ok(());
    }

    for example in examples {
        writeln!(out, "{:<32} {}", example.id, example.summary)?;
    }
    Ok(())
}

fn execute(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.global.config.as_deref())?;

    logging::init(
        cli.global.json_logs || settings.log.json,
        logging::verbosity(settings.log.level(), cli.global.verbose),
    );
    debug!(?settings, "settings resolved");

    let mut runner = Runner::from(&settings.output);
    if cli.global.no_headings {
        runner.headings = false;
    }
    if cli.global.no_color {
        runner.color = false;
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { category, json } => list(category, json, &mut out),
        Commands::Run { ids } => {
            let examples = ids
                .iter()
                .map(|id| catalog::find(id))
                .collect::<Result<Vec<_>>>()?;
            runner.run_all(examples, &mut out).map(drop)
        }
        Commands::Pattern { name } => {
            let examples = catalog::by_pattern(&name)?;
            runner.run_all(examples, &mut out).map(drop)
        }
        Commands::All => runner.run_all(catalog::all(), &mut out).map(drop),
    }
}

fn main() -> ExitCode {
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
