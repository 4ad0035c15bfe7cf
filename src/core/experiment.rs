//! Repeated-trial experiments over fresh qubits.
use rand::Rng;
use serde::Serialize;

use crate::core::error::QubitError;
use crate::core::gates::{cnot, hadamard};
use crate::core::qubit::Qubit;
use crate::core::types::Bit;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub zeros: usize,
    pub ones: usize,
}

impl Tally {
    pub fn record(&mut self, bit: Bit) {
        match bit {
            Bit::Zero => self.zeros += 1,
            Bit::One => self.ones += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }

    /// Share of trials that produced `bit`; 0.0 for an empty tally.
    pub fn fraction(&self, bit: Bit) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let hits = match bit {
            Bit::Zero => self.zeros,
            Bit::One => self.ones,
        };
        hits as f64 / total as f64
    }
}

/// |0⟩ → H → measure, `trials` times.
pub fn superposition_trials<R: Rng + ?Sized>(trials: usize, rng: &mut R) -> Result<Tally, QubitError> {
    let mut tally = Tally::default();
    for _ in 0..trials {
        let mut q = Qubit::zero();
        hadamard(&mut q)?;
        tally.record(q.measure(rng));
    }
    Ok(tally)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntanglementMode {
    /// Two independent qubits with the exact-|1⟩ CNOT check.
    #[default]
    ClassicalControl,
    /// Joint four-amplitude state with a true CNOT unitary.
    #[cfg(feature = "register")]
    Register,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub pairs: Vec<(Bit, Bit)>,
    pub agreements: usize,
    /// Trials where the CNOT flipped the target. Classical control: the exact
    /// |1⟩ literal matched. Register: the control collapsed into its |1⟩
    /// branch, the only branch in which the permutation moves the target.
    pub cnot_fired: usize,
}

impl PairReport {
    fn push(&mut self, pair: (Bit, Bit), fired: bool) {
        if pair.0 == pair.1 {
            self.agreements += 1;
        }
        if fired {
            self.cnot_fired += 1;
        }
        self.pairs.push(pair);
    }
}

/// Two fresh |0⟩ qubits, H on the first, CNOT(first, second), then measure
/// the first followed by the second.
pub fn entanglement_trials<R: Rng + ?Sized>(
    trials: usize,
    mode: EntanglementMode,
    rng: &mut R,
) -> Result<PairReport, QubitError> {
    let mut report = PairReport::default();
    for _ in 0..trials {
        match mode {
            EntanglementMode::ClassicalControl => {
                let mut q1 = Qubit::zero();
                let mut q2 = Qubit::zero();
                hadamard(&mut q1)?;
                let fired = q1.is_exactly_one();
                cnot(&q1, &mut q2)?;
                let b1 = q1.measure(rng);
                let b2 = q2.measure(rng);
                report.push((b1, b2), fired);
            }
            #[cfg(feature = "register")]
            EntanglementMode::Register => {
                let mut reg = crate::core::register::Register2::new();
                reg.hadamard(0)?;
                reg.cnot(0, 1)?;
                let [b1, b2] = reg.measure(rng);
                report.push((b1, b2), b1.is_one());
            }
        }
    }
    Ok(report)
}
