//! Core numeric types: amplitudes, classical bits, 2×2 gate matrices and state snapshots.
use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Complex amplitude of a basis state.
pub type C64 = Complex64;

/// Allowed deviation of `|α|² + |β|²` from 1.
pub const NORM_TOLERANCE: f64 = 1e-10;

#[inline]
pub fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Classical outcome of a measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

impl From<Bit> for u8 {
    fn from(b: Bit) -> u8 {
        match b {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(v: bool) -> Self {
        if v {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(format!("not a classical bit: {other}")),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A 2×2 complex matrix in row-major order.
///
/// Unitarity is not checked; callers that build their own matrices are trusted
/// to supply unitary ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2 {
    pub m: [[C64; 2]; 2],
}

impl Matrix2 {
    pub const fn new(m: [[C64; 2]; 2]) -> Self {
        Self { m }
    }

    pub fn from_rows(r0: [C64; 2], r1: [C64; 2]) -> Self {
        Self { m: [r0, r1] }
    }

    pub fn identity() -> Self {
        Self::from_rows([c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)])
    }

    pub fn hadamard() -> Self {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        Self::from_rows([c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)])
    }

    pub fn pauli_x() -> Self {
        Self::from_rows([c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)])
    }

    /// Matrix-vector product against the column `(alpha, beta)`.
    #[inline]
    pub fn apply(&self, alpha: C64, beta: C64) -> (C64, C64) {
        let [[m00, m01], [m10, m11]] = self.m;
        (m00 * alpha + m01 * beta, m10 * alpha + m11 * beta)
    }
}

/// Read-only snapshot of a qubit, as handed to callers that serialize it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    pub collapsed: bool,
    #[serde(with = "amplitude")]
    pub alpha: C64,
    #[serde(with = "amplitude")]
    pub beta: C64,
}

// Amplitudes travel as `{ "re": .., "im": .. }` records.
mod amplitude {
    use super::C64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Repr {
        re: f64,
        im: f64,
    }

    pub fn serialize<S: Serializer>(z: &C64, s: S) -> Result<S::Ok, S::Error> {
        Repr { re: z.re, im: z.im }.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<C64, D::Error> {
        let r = Repr::deserialize(d)?;
        Ok(C64::new(r.re, r.im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_product_matches_textbook_formula() {
        // (1+2i)(3+4i) = (3-8) + (4+6)i
        let m = Matrix2::from_rows([c(1.0, 2.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]);
        let (a, b) = m.apply(c(3.0, 4.0), c(0.5, -0.5));
        assert_eq!(a, c(-5.0, 10.0));
        assert_eq!(b, c(0.5, -0.5));
    }

    #[test]
    fn identity_leaves_amplitudes() {
        let (a, b) = Matrix2::identity().apply(c(0.6, 0.0), c(0.0, 0.8));
        assert_eq!((a, b), (c(0.6, 0.0), c(0.0, 0.8)));
    }

    #[test]
    fn bit_conversions() {
        assert_eq!(u8::from(Bit::One), 1);
        assert_eq!(Bit::try_from(0u8), Ok(Bit::Zero));
        assert!(Bit::try_from(2u8).is_err());
        assert_eq!(Bit::Zero.flipped(), Bit::One);
        assert_eq!(Bit::from(true).to_string(), "1");
    }
}
