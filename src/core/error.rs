use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum QubitError {
    /// A gate touched a qubit whose lifecycle ended at measurement.
    CollapsedState { op: &'static str },
    /// `|α|² + |β|²` drifted from 1 beyond tolerance; carries the computed norm.
    InvalidState { norm: f64 },
    /// Register operation named a qubit that does not exist, or reused one.
    InvalidIndex { op: &'static str, index: usize },
}

impl fmt::Display for QubitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitError::CollapsedState { op } => {
                write!(f, "({op}) qubit has collapsed due to measurement")
            }
            QubitError::InvalidState { norm } => {
                write!(f, "invalid qubit state: norm must be 1, but got {norm}")
            }
            QubitError::InvalidIndex { op, index } => {
                write!(f, "({op}) invalid qubit index {index}")
            }
        }
    }
}

impl std::error::Error for QubitError {}

impl QubitError {
    pub fn collapsed(op: &'static str) -> Self { QubitError::CollapsedState { op } }
    pub fn invalid_state(norm: f64) -> Self { QubitError::InvalidState { norm } }
    pub fn invalid_index(op: &'static str, index: usize) -> Self { QubitError::InvalidIndex { op, index } }
}
