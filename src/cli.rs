use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum GateKind {
    #[value(alias = "hadamard")]
    H,
    #[value(alias = "not")]
    X,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ModeKind {
    /// Independent qubits, CNOT fires only on an exact |1> control
    #[default]
    Classical,
    /// Joint two-qubit state (requires the `register` feature)
    Register,
}

#[derive(Debug, Parser)]
#[command(
    name = "qubit_sim",
    about = "Single- and two-qubit state simulator",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QubitSimCli {
    /// Global: debug logging to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: path to config (TOML); default: ~/.qubit_sim/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: RNG seed (overrides config)
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare |0>, apply H, measure; repeat and tally outcomes
    ///
    /// Examples:
    ///   qubit_sim superpose --trials 100000
    ///   qubit_sim --seed 7 superpose --json
    Superpose {
        #[arg(long = "trials", value_name = "N")]
        trials: Option<usize>,
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// H on q1, CNOT(q1, q2), measure both; repeat and report agreement
    Entangle {
        #[arg(long = "trials", value_name = "N")]
        trials: Option<usize>,
        #[arg(long = "mode", value_enum, default_value_t = ModeKind::Classical)]
        mode: ModeKind,
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Send text through the qubit channel and decode it again
    Encode {
        #[arg(value_name = "TEXT")]
        text: String,
        #[arg(long = "redundancy", value_name = "N")]
        redundancy: Option<usize>,
        #[arg(long = "noise", value_name = "P")]
        noise: Option<f64>,
    },

    /// Apply gates to |0> and print the qubit snapshot as JSON
    Inspect {
        #[arg(value_enum, value_name = "GATES")]
        gates: Vec<GateKind>,
        /// Measure after the gates
        #[arg(long = "measure", action = ArgAction::SetTrue)]
        measure: bool,
    },

    /// Show or edit the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config as TOML
    Show,
    /// Print the config file location
    Path,
    /// Set one parameter and save
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
}
