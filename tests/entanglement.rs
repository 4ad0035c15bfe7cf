use qubit_sim::core::experiment::{entanglement_trials, EntanglementMode};
use qubit_sim::Bit;
use rand::rngs::StdRng;
use rand::SeedableRng;

// The literal model never entangles: after H the control is not the exact |1⟩
// literal, so the target stays |0⟩ and agreement only happens when q1 reads 0.
#[test]
fn classical_control_never_fires_after_hadamard() {
    let mut rng = StdRng::seed_from_u64(11);
    let report = entanglement_trials(500, EntanglementMode::ClassicalControl, &mut rng).unwrap();
    assert_eq!(report.pairs.len(), 500);
    assert_eq!(report.cnot_fired, 0);
    assert!(report.pairs.iter().all(|(_, b2)| *b2 == Bit::Zero));
    let q1_zero = report.pairs.iter().filter(|(b1, _)| *b1 == Bit::Zero).count();
    assert_eq!(report.agreements, q1_zero);
    assert!(report.agreements < 500);
}

#[cfg(feature = "register")]
mod register {
    use super::*;
    use qubit_sim::core::types::c;
    use qubit_sim::{Qubit, QubitError, Register2};

    #[test]
    fn bell_pairs_always_agree() {
        let mut rng = StdRng::seed_from_u64(11);
        let report = entanglement_trials(400, EntanglementMode::Register, &mut rng).unwrap();
        assert_eq!(report.agreements, 400);
        let ones = report.pairs.iter().filter(|(b1, _)| b1.is_one()).count();
        assert!(ones > 0 && ones < 400);
        assert_eq!(report.cnot_fired, ones);
    }

    #[test]
    fn bell_state_amplitudes() {
        let mut reg = Register2::new();
        reg.hadamard(0).unwrap();
        reg.cnot(0, 1).unwrap();
        let p = reg.probabilities();
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!(p[1].abs() < 1e-12);
        assert!(p[2].abs() < 1e-12);
        assert!((p[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn from_qubits_matches_classical_cnot() {
        let mut reg = Register2::from_qubits(&Qubit::one(), &Qubit::zero()).unwrap();
        reg.cnot(0, 1).unwrap();
        assert_eq!(reg.probabilities(), [0.0, 0.0, 0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(reg.measure(&mut rng), [Bit::One, Bit::One]);
    }

    #[test]
    fn reversed_cnot_uses_second_qubit_as_control() {
        let mut reg = Register2::from_qubits(&Qubit::zero(), &Qubit::one()).unwrap();
        reg.cnot(1, 0).unwrap();
        assert_eq!(reg.amplitudes()[3], c(1.0, 0.0));
    }

    #[test]
    fn collapsed_register_rejects_gates_and_keeps_outcome() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut reg = Register2::new();
        reg.hadamard(1).unwrap();
        let first = reg.measure(&mut rng);
        assert!(reg.is_collapsed());
        assert_eq!(reg.hadamard(0), Err(QubitError::collapsed("H")));
        assert_eq!(reg.cnot(0, 1), Err(QubitError::collapsed("CNOT")));
        for _ in 0..8 {
            assert_eq!(reg.measure(&mut rng), first);
        }
    }
}
