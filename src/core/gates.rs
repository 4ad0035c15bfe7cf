//! Named gates acting in place on qubits.
use tracing::trace;

use crate::core::error::QubitError;
use crate::core::qubit::Qubit;
use crate::core::types::Matrix2;

/// Hadamard: `α' = (α + β)/√2`, `β' = (α − β)/√2`.
pub fn hadamard(qubit: &mut Qubit) -> Result<(), QubitError> {
    qubit.ensure_live("H")?;
    let (alpha, beta) = Matrix2::hadamard().apply(qubit.alpha(), qubit.beta());
    qubit.set_amplitudes(alpha, beta);
    trace!(?alpha, ?beta, "H applied");
    qubit.check_norm()
}

/// Pauli-X: swaps `α` and `β` exactly.
pub fn pauli_x(qubit: &mut Qubit) -> Result<(), QubitError> {
    qubit.ensure_live("X")?;
    qubit.swap_amplitudes();
    trace!("X applied");
    qubit.check_norm()
}

/// Controlled-NOT over two independent qubits.
///
/// There is no joint state here: the target is flipped only when the control
/// holds exactly the |1⟩ literal. A control in superposition never fires. Use
/// `Register2::cnot` for the entangling gate.
pub fn cnot(control: &Qubit, target: &mut Qubit) -> Result<(), QubitError> {
    if control.is_collapsed() || target.is_collapsed() {
        return Err(QubitError::collapsed("CNOT"));
    }
    if control.is_exactly_one() {
        trace!("CNOT control matched |1>");
        pauli_x(target)?;
    }
    Ok(())
}
