use anyhow::{Context, Result};

use crate::cli::GateKind;
use crate::config::SimConfig;
use crate::core::gates::{hadamard, pauli_x};
use crate::core::qubit::Qubit;

pub fn main(cfg: &SimConfig, seed: Option<u64>, gates: &[GateKind], measure: bool) -> Result<()> {
    let mut q = Qubit::zero();
    for (i, gate) in gates.iter().enumerate() {
        let applied = match gate {
            GateKind::H => hadamard(&mut q),
            GateKind::X => pauli_x(&mut q),
        };
        applied.with_context(|| format!("gate #{} ({gate:?}) failed", i + 1))?;
    }
    if measure {
        let mut rng = cfg.rng(seed);
        q.measure(&mut rng);
    }
    println!("{}", serde_json::to_string(&q.state())?);
    Ok(())
}
