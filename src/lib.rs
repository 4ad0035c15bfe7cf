//! Minimal single- and two-qubit state simulator.
//!
//! Construct a [`Qubit`], apply gates from [`gates`], then [`Qubit::measure`] it
//! with an injected random source. [`Register2`] models a true two-qubit joint
//! state when the `register` feature is enabled.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::error::QubitError;
pub use crate::core::gates;
pub use crate::core::qubit::Qubit;
pub use crate::core::types::{Bit, Matrix2, QubitState, C64, NORM_TOLERANCE};

#[cfg(feature = "register")]
pub use crate::core::register::Register2;
