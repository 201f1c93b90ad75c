//! People demo entry point.
//!
//! Wires storage, service and runner by constructor and runs the startup
//! exercise once, printing the created record to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use people_core::db::{open_db, open_db_in_memory};
use people_core::{
    core_version, default_log_level, flush_logging, init_logging, PeopleService, Person, Runner,
    SqlitePersonRepository,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "people")]
#[command(version = core_version())]
#[command(about = "Creates a person, reads it back and prints it", long_about = None)]
struct Args {
    /// SQLite database file (in-memory when omitted)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    db: Option<PathBuf>,
    log_dir: PathBuf,
    log_level: String,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            db: args.db,
            log_dir: args.log_dir.unwrap_or_else(default_log_dir),
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("people").join("logs")
}

fn start_logging(config: &RunConfig) -> Result<(), String> {
    init_logging(&config.log_level, &config.log_dir.to_string_lossy())
}

fn run(config: &RunConfig, out: &mut impl Write) -> Result<Person> {
    let conn = match &config.db {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };

    let runner = Runner::new(PeopleService::new(SqlitePersonRepository::new(&conn)));
    let person = runner.exercise(out).context("startup exercise failed")?;
    Ok(person)
}

fn main() -> Result<()> {
    let config = RunConfig::from(Args::parse());
    if let Err(err) = start_logging(&config) {
        eprintln!("logging disabled: {err}");
    }

    let result = run(&config, &mut std::io::stdout().lock());
    match &result {
        Ok(person) => info!("event=app_ready module=cli status=ok id={}", person.id),
        Err(_) => error!("event=app_ready module=cli status=error"),
    }
    flush_logging();

    result.map(|_| ())
}
