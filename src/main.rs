use clap::Parser;
use eyre::Result;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tasklist::shell::{self, ShellOptions};
use tasklist::{Config, Filter, Session, TaskStore};
use tracing::info;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - Create, edit, complete, filter and delete tasks")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the config file (default: <config dir>/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial filter: all, incomplete or completed
    #[arg(short, long)]
    filter: Option<Filter>,

    /// Seed for motivational message selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log level written to stderr (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();

    let filter = cli.filter.unwrap_or(config.default_filter);
    let store = TaskStore::new()
        .with_motivator(config.motivator(cli.seed)?)
        .with_filter(filter);
    let mut session = Session::new(store).with_timestamp_format(config.timestamp_format.clone());

    let stdin = io::stdin();
    let options = ShellOptions {
        color: config.color && !cli.no_color,
        prompt: stdin.is_terminal(),
    };
    info!(%filter, "Starting shell");

    let mut stdout = io::stdout().lock();
    shell::run(&mut session, stdin.lock(), &mut stdout, options)?;

    Ok(())
}
