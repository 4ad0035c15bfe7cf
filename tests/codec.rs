use qubit_sim::core::codec::{add_redundancy, bits_to_text, remove_redundancy, text_to_bits, Codec};
use qubit_sim::Bit;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn text_survives_bit_conversion() {
    for text in ["", "hello", "qubit → |1⟩"] {
        assert_eq!(bits_to_text(&text_to_bits(text)), text);
    }
}

#[test]
fn dangling_bits_are_zero_padded() {
    // "A" = 01000001; dropping the last bit pads it back as 0 -> '@'
    let mut bits = text_to_bits("A");
    bits.pop();
    assert_eq!(bits_to_text(&bits), "@");
}

#[test]
fn redundancy_repeats_and_votes() {
    let bits = text_to_bits("ok");
    let wide = add_redundancy(&bits, 5);
    assert_eq!(wide.len(), bits.len() * 5);
    assert!(wide[..5].iter().all(|b| *b == bits[0]));
    assert_eq!(remove_redundancy(&wide, 5), bits);
}

#[test]
fn noiseless_channel_is_lossless() {
    let codec = Codec::new(3, 0.0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let mut qubits = codec.encode("time machine").unwrap();
    assert_eq!(qubits.len(), "time machine".len() * 8 * 3);
    assert_eq!(codec.transmit(&mut qubits, &mut rng).unwrap(), 0);
    assert_eq!(codec.decode(&mut qubits, &mut rng), "time machine");
}

#[test]
fn full_noise_inverts_every_bit() {
    let codec = Codec::new(1, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let mut qubits = codec.encode("A").unwrap();
    assert_eq!(codec.transmit(&mut qubits, &mut rng).unwrap(), 8);
    let read: Vec<Bit> = qubits.iter_mut().map(|q| q.measure(&mut rng)).collect();
    let flipped: Vec<Bit> = text_to_bits("A").into_iter().map(Bit::flipped).collect();
    assert_eq!(read, flipped);
}

#[test]
fn redundancy_absorbs_light_noise() {
    let codec = Codec::new(9, 0.02).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);
    let mut qubits = codec.encode("redundant").unwrap();
    let flips = codec.transmit(&mut qubits, &mut rng).unwrap();
    assert!(flips > 0);
    assert_eq!(codec.decode(&mut qubits, &mut rng), "redundant");
}
