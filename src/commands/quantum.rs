//! CLI entry for the repeated-trial experiments.
//!
//! - `superpose` : |0⟩ → H → measure, tallied
//! - `entangle`  : H(q1), CNOT(q1, q2), measure q1 then q2
//!
//! Examples:
//!   qubit_sim superpose --trials 100000
//!   qubit_sim --seed 7 entangle --mode register --trials 20

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::ModeKind;
use crate::config::SimConfig;
use crate::core::experiment::{entanglement_trials, superposition_trials, EntanglementMode};
use crate::core::types::Bit;

pub fn superpose(cfg: &SimConfig, seed: Option<u64>, trials: Option<usize>, json: bool) -> Result<()> {
    let cfg = cfg.with_overrides(trials, None, None)?;
    let trials = cfg.trials;
    let mut rng = cfg.rng(seed);
    let tally = superposition_trials(trials, &mut rng).context("superposition experiment failed")?;

    if json {
        println!("{}", serde_json::to_string(&tally)?);
        return Ok(());
    }
    println!("{} Results for n={trials}:", "⟨Ψ⟩".truecolor(0, 255, 180));
    println!("0: {} times ({:.2}%)", tally.zeros, tally.fraction(Bit::Zero) * 100.0);
    println!("1: {} times ({:.2}%)", tally.ones, tally.fraction(Bit::One) * 100.0);
    Ok(())
}

pub fn entangle(
    cfg: &SimConfig,
    seed: Option<u64>,
    trials: Option<usize>,
    mode: ModeKind,
    json: bool,
) -> Result<()> {
    let mode = match mode {
        ModeKind::Classical => EntanglementMode::ClassicalControl,
        #[cfg(feature = "register")]
        ModeKind::Register => EntanglementMode::Register,
        #[cfg(not(feature = "register"))]
        ModeKind::Register => {
            anyhow::bail!("mode 'register' requires building with `--features register`");
        }
    };
    let cfg = cfg.with_overrides(trials, None, None)?;
    let trials = cfg.trials;
    let mut rng = cfg.rng(seed);
    let report = entanglement_trials(trials, mode, &mut rng).context("entanglement experiment failed")?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    for (b1, b2) in report.pairs.iter().take(20) {
        println!("q1: {b1} -- q2: {b2}");
    }
    if report.pairs.len() > 20 {
        println!("… {} more", report.pairs.len() - 20);
    }
    println!(
        "{} agreement {}/{} (CNOT fired {} times)",
        "⟨Ψ⟩".truecolor(0, 255, 180),
        report.agreements,
        trials,
        report.cnot_fired
    );
    if matches!(mode, EntanglementMode::ClassicalControl) && report.cnot_fired == 0 {
        eprintln!(
            "{} classical-control CNOT never saw an exact |1> control; try --mode register",
            "warn:".yellow().bold()
        );
    }
    Ok(())
}
