//! Two-qubit joint state (feature: `register`).
//!
//! Amplitudes are indexed over `|q0 q1⟩` with qubit 0 as the most significant
//! bit, so index `2·b0 + b1`. Single-qubit gates are lifted with the Kronecker
//! product and CNOT is the 4×4 permutation unitary, which gives real
//! entanglement for superposed controls.
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use tracing::debug;

use crate::core::error::QubitError;
use crate::core::qubit::Qubit;
use crate::core::types::{c, Bit, Matrix2, C64, NORM_TOLERANCE};

const QUBITS: usize = 2;
const DIM: usize = 1 << QUBITS;

#[derive(Clone, Debug, PartialEq)]
pub struct Register2 {
    data: DVector<C64>,
    collapsed: bool,
}

impl Default for Register2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Register2 {
    /// |00⟩.
    pub fn new() -> Self {
        let mut data = DVector::from_element(DIM, c(0.0, 0.0));
        data[0] = c(1.0, 0.0);
        Self { data, collapsed: false }
    }

    /// Tensor product `q0 ⊗ q1` of two independent qubits.
    pub fn from_qubits(q0: &Qubit, q1: &Qubit) -> Result<Self, QubitError> {
        let a = DVector::from_vec(vec![q0.alpha(), q0.beta()]);
        let b = DVector::from_vec(vec![q1.alpha(), q1.beta()]);
        let reg = Self { data: a.kronecker(&b), collapsed: false };
        reg.check_norm()?;
        Ok(reg)
    }

    pub fn amplitudes(&self) -> &[C64] {
        self.data.as_slice()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Outcome probabilities for `|00⟩, |01⟩, |10⟩, |11⟩`.
    pub fn probabilities(&self) -> [f64; DIM] {
        let mut out = [0.0; DIM];
        for (p, z) in out.iter_mut().zip(self.data.iter()) {
            *p = z.norm_sqr();
        }
        out
    }

    /// Apply a single-qubit gate to `target`, identity on the other qubit.
    pub fn apply_1q(&mut self, gate: &Matrix2, target: usize) -> Result<(), QubitError> {
        self.lift_and_apply("apply_1q", gate, target)
    }

    fn lift_and_apply(&mut self, op: &'static str, gate: &Matrix2, target: usize) -> Result<(), QubitError> {
        self.ensure_live(op)?;
        if target >= QUBITS {
            return Err(QubitError::invalid_index(op, target));
        }
        let u = to_dmatrix(gate);
        let i2 = DMatrix::<C64>::identity(2, 2);
        let lifted = if target == 0 { u.kronecker(&i2) } else { i2.kronecker(&u) };
        self.data = lifted * &self.data;
        Ok(())
    }

    pub fn hadamard(&mut self, target: usize) -> Result<(), QubitError> {
        self.lift_and_apply("H", &Matrix2::hadamard(), target)?;
        self.check_norm()
    }

    pub fn pauli_x(&mut self, target: usize) -> Result<(), QubitError> {
        self.lift_and_apply("X", &Matrix2::pauli_x(), target)?;
        self.check_norm()
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> Result<(), QubitError> {
        self.ensure_live("CNOT")?;
        if control >= QUBITS {
            return Err(QubitError::invalid_index("CNOT", control));
        }
        if target >= QUBITS || target == control {
            return Err(QubitError::invalid_index("CNOT", target));
        }
        self.data = cnot_matrix(control, target) * &self.data;
        self.check_norm()
    }

    /// Measure both qubits jointly, collapsing onto one basis state.
    ///
    /// Once collapsed, the recorded outcome is returned without sampling.
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [Bit; QUBITS] {
        if self.collapsed {
            let idx = self.data.iter().position(|z| *z == c(1.0, 0.0)).unwrap_or(0);
            return bits_of(idx);
        }
        let probs = self.probabilities();
        let sample: f64 = rng.gen();
        let mut acc = 0.0;
        // Rounding can leave the cumulative sum a hair under 1.
        let mut idx = probs.iter().rposition(|p| *p > 0.0).unwrap_or(0);
        for (i, p) in probs.iter().enumerate() {
            acc += p;
            if sample < acc {
                idx = i;
                break;
            }
        }
        debug!(?probs, sample, outcome = idx, "register measured");
        self.data.fill(c(0.0, 0.0));
        self.data[idx] = c(1.0, 0.0);
        self.collapsed = true;
        bits_of(idx)
    }

    fn check_norm(&self) -> Result<(), QubitError> {
        let norm: f64 = self.data.iter().map(|z| z.norm_sqr()).sum();
        // NaN fails every comparison, so reject it explicitly.
        if norm.is_nan() || (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(QubitError::invalid_state(norm));
        }
        Ok(())
    }

    fn ensure_live(&self, op: &'static str) -> Result<(), QubitError> {
        if self.collapsed {
            return Err(QubitError::collapsed(op));
        }
        Ok(())
    }
}

fn to_dmatrix(gate: &Matrix2) -> DMatrix<C64> {
    let [[m00, m01], [m10, m11]] = gate.m;
    DMatrix::from_row_slice(2, 2, &[m00, m01, m10, m11])
}

fn bit_position(qubit: usize) -> usize {
    QUBITS - 1 - qubit
}

/// Permutation unitary mapping `|b⟩ → |b ⊕ (bit_c · e_t)⟩`.
fn cnot_matrix(control: usize, target: usize) -> DMatrix<C64> {
    let mut m = DMatrix::<C64>::from_element(DIM, DIM, c(0.0, 0.0));
    for basis in 0..DIM {
        let mut out = basis;
        if (basis >> bit_position(control)) & 1 == 1 {
            out ^= 1 << bit_position(target);
        }
        m[(out, basis)] = c(1.0, 0.0);
    }
    m
}

fn bits_of(idx: usize) -> [Bit; QUBITS] {
    [
        Bit::from((idx >> bit_position(0)) & 1 == 1),
        Bit::from((idx >> bit_position(1)) & 1 == 1),
    ]
}
