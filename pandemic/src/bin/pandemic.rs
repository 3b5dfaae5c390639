//! Command line front end.
//!
//! - `pandemic run <scenario>`: run a scenario file or a built-in scenario
//!   (`sirs`, `containment`) and print its summary as JSON
//! - `pandemic example <name>`: print a built-in scenario as JSON, a starting
//!   point for custom scenario files

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pandemic::io::run_log::{write_run_log, RunLogHeader};
use pandemic::{Scenario, ScenarioRun};

#[derive(Parser)]
#[command(name = "pandemic")]
#[command(about = "Discrete-time SIRS and lockdown epidemic scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print its summary
    Run {
        /// Scenario JSON file, or the name of a built-in scenario
        scenario: String,

        /// Write the per-day trajectory to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Directory for the human-readable run log
        #[arg(long, env = "PANDEMIC_LOG_DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Print a built-in scenario as JSON
    Example {
        /// `sirs` or `containment`
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pandemic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario, csv, log_dir } => {
            let scenario = resolve_scenario(&scenario)?;
            info!(
                scenario = scenario.name(),
                model = scenario.model_kind(),
                days = scenario.duration_days(),
                "running scenario"
            );

            let run = scenario.run().context("invalid scenario parameters")?;

            if let Some(path) = csv {
                run.write_csv(&path)?;
                info!("trajectory written to {}", path.display());
            }
            if let Some(dir) = log_dir {
                let path = write_log(&dir, &scenario, &run)?;
                info!("run log written to {}", path.display());
            }

            let summary = serde_json::to_string_pretty(&run.summary())?;
            println!("{}", summary);
        }
        Commands::Example { name } => {
            let scenario = Scenario::builtin(&name)
                .with_context(|| format!("unknown built-in scenario '{}'", name))?;
            println!("{}", serde_json::to_string_pretty(&scenario)?);
        }
    }

    Ok(())
}

fn resolve_scenario(arg: &str) -> anyhow::Result<Scenario> {
    if !Path::new(arg).exists() {
        if let Some(builtin) = Scenario::builtin(arg) {
            return Ok(builtin);
        }
    }
    Scenario::load_json(arg)
}

fn write_log(dir: &Path, scenario: &Scenario, run: &ScenarioRun) -> anyhow::Result<PathBuf> {
    let label = if scenario.name().is_empty() { scenario.model_kind() } else { scenario.name() };
    let run_id = format!("{}-{}", label, now_millis());
    let header = RunLogHeader {
        run_id: &run_id,
        scenario: scenario.name(),
        model: scenario.model_kind(),
        total_population: scenario.total_population(),
    };
    match run {
        ScenarioRun::Sirs(t) => write_run_log(dir, &header, t),
        ScenarioRun::Containment(t) => write_run_log(dir, &header, t),
    }
}

fn now_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
