//! Text ↔ bit codec with repetition redundancy, carried over a qubit channel.
//!
//! Each redundant bit is prepared as a basis qubit (|0⟩ or X|0⟩). The channel
//! may flip qubits with probability `noise`; decoding measures every qubit and
//! recovers each original bit by majority vote over its group.
use anyhow::{ensure, Result};
use rand::Rng;
use tracing::warn;

use crate::core::error::QubitError;
use crate::core::gates::pauli_x;
use crate::core::qubit::Qubit;
use crate::core::types::Bit;

/// UTF-8 bytes of `text`, eight bits per byte, most significant first.
pub fn text_to_bits(text: &str) -> Vec<Bit> {
    text.bytes()
        .flat_map(|byte| (0..8).rev().map(move |j| Bit::from((byte >> j) & 1 == 1)))
        .collect()
}

/// Inverse of [`text_to_bits`]. Short input is zero-padded to whole bytes;
/// invalid UTF-8 is replaced.
pub fn bits_to_text(bits: &[Bit]) -> String {
    let mut bits = bits.to_vec();
    if bits.len() % 8 != 0 {
        warn!(len = bits.len(), "bit count is not a multiple of 8; padding with zeros");
        bits.resize(bits.len().div_ceil(8) * 8, Bit::Zero);
    }
    let bytes: Vec<u8> = bits
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, b| (acc << 1) | u8::from(*b)))
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn add_redundancy(bits: &[Bit], factor: usize) -> Vec<Bit> {
    bits.iter()
        .flat_map(|b| std::iter::repeat(*b).take(factor))
        .collect()
}

/// Majority vote per group of `factor` bits; ties resolve to 0.
pub fn remove_redundancy(bits: &[Bit], factor: usize) -> Vec<Bit> {
    if factor == 0 {
        return Vec::new();
    }
    let mut bits = bits.to_vec();
    if bits.len() % factor != 0 {
        warn!(len = bits.len(), factor, "bit count is not a multiple of the redundancy factor; padding with zeros");
        bits.resize(bits.len().div_ceil(factor) * factor, Bit::Zero);
    }
    bits.chunks(factor)
        .map(|group| {
            let ones = group.iter().filter(|b| b.is_one()).count();
            Bit::from(ones * 2 > factor)
        })
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Codec {
    redundancy: usize,
    noise: f64,
}

impl Codec {
    pub fn new(redundancy: usize, noise: f64) -> Result<Self> {
        ensure!(redundancy >= 1, "redundancy factor must be at least 1");
        ensure!((0.0..=1.0).contains(&noise), "noise must lie in [0, 1], got {noise}");
        Ok(Self { redundancy, noise })
    }

    pub fn redundancy(&self) -> usize { self.redundancy }
    pub fn noise(&self) -> f64 { self.noise }

    /// Share of characters received intact. Position-wise matches over the
    /// shared prefix; every character of length mismatch counts as an error.
    /// Two empty messages score 1.0.
    pub fn accuracy(original: &str, decoded: &str) -> f64 {
        let sent: Vec<char> = original.chars().collect();
        let got: Vec<char> = decoded.chars().collect();
        let shared = sent.len().min(got.len());
        let length_diff = sent.len().abs_diff(got.len());
        let denom = shared + length_diff;
        if denom == 0 {
            return 1.0;
        }
        let matches = sent.iter().zip(got.iter()).filter(|(a, b)| a == b).count();
        matches as f64 / denom as f64
    }

    pub fn encode(&self, text: &str) -> Result<Vec<Qubit>, QubitError> {
        let bits = add_redundancy(&text_to_bits(text), self.redundancy);
        bits.into_iter()
            .map(|bit| {
                let mut q = Qubit::zero();
                if bit.is_one() {
                    pauli_x(&mut q)?;
                }
                Ok(q)
            })
            .collect()
    }

    /// Bit-flip channel: each live qubit is hit by X with probability `noise`.
    /// Returns how many qubits were flipped.
    pub fn transmit<R: Rng + ?Sized>(&self, qubits: &mut [Qubit], rng: &mut R) -> Result<usize, QubitError> {
        let mut flips = 0;
        if self.noise <= 0.0 {
            return Ok(flips);
        }
        for q in qubits.iter_mut() {
            if rng.gen::<f64>() < self.noise {
                pauli_x(q)?;
                flips += 1;
            }
        }
        Ok(flips)
    }

    pub fn decode<R: Rng + ?Sized>(&self, qubits: &mut [Qubit], rng: &mut R) -> String {
        let raw: Vec<Bit> = qubits.iter_mut().map(|q| q.measure(rng)).collect();
        bits_to_text(&remove_redundancy(&raw, self.redundancy))
    }
}
