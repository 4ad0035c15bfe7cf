//! Qubit state, gates and the small experiments built on them.

pub mod codec;
pub mod error;
pub mod experiment;
pub mod gates;
pub mod qubit;
pub mod types;

#[cfg(feature = "register")]
pub mod register;
