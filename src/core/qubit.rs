//! A single two-level quantum state with basis measurement.
//!
//! A `Qubit` starts in superposition (any normalized `α|0⟩ + β|1⟩`) and moves to
//! the collapsed state exactly once, when [`Qubit::measure`] is called. Collapsed
//! qubits hold a classical basis state and reject every gate.
use rand::Rng;
use tracing::debug;

use crate::core::error::QubitError;
use crate::core::types::{c, Bit, Matrix2, QubitState, C64, NORM_TOLERANCE};

#[derive(Clone, Debug, PartialEq)]
pub struct Qubit {
    alpha: C64,
    beta: C64,
    collapsed: bool,
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl Qubit {
    /// Build from an amplitude pair; rejects pairs whose squared norm is not 1.
    pub fn new(alpha: C64, beta: C64) -> Result<Self, QubitError> {
        let q = Self { alpha, beta, collapsed: false };
        q.check_norm()?;
        Ok(q)
    }

    /// Classical |0⟩.
    pub fn zero() -> Self {
        Self { alpha: c(1.0, 0.0), beta: c(0.0, 0.0), collapsed: false }
    }

    /// Classical |1⟩.
    pub fn one() -> Self {
        Self { alpha: c(0.0, 0.0), beta: c(1.0, 0.0), collapsed: false }
    }

    pub fn alpha(&self) -> C64 { self.alpha }
    pub fn beta(&self) -> C64 { self.beta }
    pub fn is_collapsed(&self) -> bool { self.collapsed }

    /// `|α|²`, the probability of reading 0.
    pub fn prob_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Multiply the amplitude column by `gate`. The result is not re-normalized
    /// or checked.
    pub fn apply_unitary(&mut self, gate: &Matrix2) -> Result<(), QubitError> {
        self.ensure_live("apply_unitary")?;
        let (alpha, beta) = gate.apply(self.alpha, self.beta);
        self.alpha = alpha;
        self.beta = beta;
        Ok(())
    }

    /// Measure in the computational basis, collapsing the state.
    ///
    /// Draws one uniform sample from `rng`; the outcome is 0 when the sample
    /// falls below `|α|²`. Measuring an already collapsed qubit returns the
    /// recorded outcome and leaves `rng` untouched.
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Bit {
        if self.collapsed {
            return self.classical_value();
        }
        let prob0 = self.prob_zero();
        let sample: f64 = rng.gen();
        let result = Bit::from(sample >= prob0);
        debug!(prob0, sample, %result, "qubit measured");
        self.collapse(result);
        result
    }

    pub fn state(&self) -> QubitState {
        QubitState { collapsed: self.collapsed, alpha: self.alpha, beta: self.beta }
    }

    pub(crate) fn collapse(&mut self, result: Bit) {
        let (alpha, beta) = match result {
            Bit::Zero => (c(1.0, 0.0), c(0.0, 0.0)),
            Bit::One => (c(0.0, 0.0), c(1.0, 0.0)),
        };
        self.alpha = alpha;
        self.beta = beta;
        self.collapsed = true;
    }

    pub(crate) fn check_norm(&self) -> Result<(), QubitError> {
        let norm = self.norm_sqr();
        // NaN fails every comparison, so reject it explicitly.
        if norm.is_nan() || (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(QubitError::invalid_state(norm));
        }
        Ok(())
    }

    pub(crate) fn ensure_live(&self, op: &'static str) -> Result<(), QubitError> {
        if self.collapsed {
            return Err(QubitError::collapsed(op));
        }
        Ok(())
    }

    pub(crate) fn set_amplitudes(&mut self, alpha: C64, beta: C64) {
        self.alpha = alpha;
        self.beta = beta;
    }

    pub(crate) fn swap_amplitudes(&mut self) {
        std::mem::swap(&mut self.alpha, &mut self.beta);
    }

    /// Exact match against the |1⟩ literal `α = 0, β = 1`.
    ///
    /// No tolerance: amplitudes carrying rounding residue from earlier gates do
    /// not match.
    pub(crate) fn is_exactly_one(&self) -> bool {
        self.alpha == c(0.0, 0.0) && self.beta == c(1.0, 0.0)
    }

    fn classical_value(&self) -> Bit {
        Bit::from(self.alpha != c(1.0, 0.0))
    }
}
