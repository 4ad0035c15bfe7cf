use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::SimConfig;
use crate::core::codec::Codec;

pub fn main(
    cfg: &SimConfig,
    seed: Option<u64>,
    text: &str,
    redundancy: Option<usize>,
    noise: Option<f64>,
) -> Result<()> {
    let cfg = cfg.with_overrides(None, redundancy, noise)?;
    let codec = Codec::new(cfg.redundancy, cfg.noise)?;
    let mut rng = cfg.rng(seed);

    let mut qubits = codec.encode(text).context("failed to prepare qubits")?;
    let flips = codec.transmit(&mut qubits, &mut rng).context("channel failed")?;
    let decoded = codec.decode(&mut qubits, &mut rng);

    println!("sent:     {text}");
    println!("received: {decoded}");
    println!("accuracy: {:.2}%", Codec::accuracy(text, &decoded) * 100.0);
    println!(
        "{} {} qubits, redundancy {}, {} flipped in transit",
        "⟨Ψ⟩".truecolor(0, 255, 180),
        qubits.len(),
        codec.redundancy(),
        flips
    );
    if decoded != text {
        eprintln!("{} message corrupted in transit", "warn:".yellow().bold());
    }
    Ok(())
}
