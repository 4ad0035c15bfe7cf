use qubit_sim::gates::pauli_x;
use qubit_sim::{Qubit, QubitState};

#[test]
fn snapshot_json_shape() {
    let json = serde_json::to_string(&Qubit::zero().state()).unwrap();
    insta::assert_snapshot!(json, @r#"{"collapsed":false,"alpha":{"re":1.0,"im":0.0},"beta":{"re":0.0,"im":0.0}}"#);

    let mut q = Qubit::zero();
    pauli_x(&mut q).unwrap();
    let json = serde_json::to_string(&q.state()).unwrap();
    insta::assert_snapshot!(json, @r#"{"collapsed":false,"alpha":{"re":0.0,"im":0.0},"beta":{"re":1.0,"im":0.0}}"#);
}

#[test]
fn snapshot_parses_back() {
    let raw = r#"{"collapsed":true,"alpha":{"re":0.0,"im":0.0},"beta":{"re":1.0,"im":0.0}}"#;
    let st: QubitState = serde_json::from_str(raw).unwrap();
    assert!(st.collapsed);
    assert_eq!(st.beta.re, 1.0);
}
