//! qubit_sim main — experiment, codec, inspect and config subcommands.
use clap::Parser; // trait import enables QubitSimCli::parse()
use colored::Colorize;
use tracing::Level;

use qubit_sim::cli::{Command, ConfigAction, QubitSimCli};
use qubit_sim::commands;
use qubit_sim::config::{resolve_config_path, SimConfig};

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: QubitSimCli) -> anyhow::Result<()> {
    let cfg_path = resolve_config_path(&args.config);
    let cfg = SimConfig::load(cfg_path.as_deref())?;
    let seed = args.seed;

    match args.cmd {
        Command::Superpose { trials, json } => commands::quantum::superpose(&cfg, seed, trials, json),
        Command::Entangle { trials, mode, json } => {
            commands::quantum::entangle(&cfg, seed, trials, mode, json)
        }
        Command::Encode { text, redundancy, noise } => {
            commands::encode::main(&cfg, seed, &text, redundancy, noise)
        }
        Command::Inspect { gates, measure } => commands::inspect::main(&cfg, seed, &gates, measure),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&cfg),
            ConfigAction::Path => commands::config::path(cfg_path.as_deref()),
            ConfigAction::Set { key, value } => commands::config::set(cfg_path.as_deref(), &key, &value),
        },
    }
}

fn main() {
    let args = QubitSimCli::parse();
    init_tracing(args.debug);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
