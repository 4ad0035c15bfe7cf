use anyhow::{bail, ensure, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::atomic::atomic_write;

pub const TRIALS_MAX: usize = 10_000_000;
pub const REDUNDANCY_MAX: usize = 15;

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.qubit_sim/config.toml
    dirs_next::home_dir().map(|h| h.join(".qubit_sim").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Create config parent dir {}", parent.display()))?;
    }
    Ok(())
}

/// Tunable parameters, each bounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Fixed RNG seed; random per run when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub trials: usize,
    pub redundancy: usize,
    /// Bit-flip probability of the codec channel.
    pub noise: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: None, trials: 100_000, redundancy: 3, noise: 0.0 }
    }
}

impl SimConfig {
    pub const KEYS: [&'static str; 4] = ["seed", "trials", "redundancy", "noise"];

    /// Load from `path`; a missing file (or no path at all) yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        let cfg: SimConfig = toml::from_str(&text)
            .with_context(|| format!("Parse config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        ensure_parent_dir(path)?;
        let text = toml::to_string_pretty(self).context("Serialize config")?;
        atomic_write(path, text).with_context(|| format!("Write config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        check_trials(self.trials)?;
        check_redundancy(self.redundancy)?;
        check_noise(self.noise)?;
        Ok(())
    }

    /// Update one parameter from its textual value. Unknown keys and
    /// out-of-range values are rejected and leave the config unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "seed" => {
                self.seed = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse().with_context(|| format!("seed must be an unsigned integer or 'none', got '{value}'"))?)
                };
            }
            "trials" => {
                let v: usize = value.parse().with_context(|| format!("trials must be an integer, got '{value}'"))?;
                check_trials(v)?;
                self.trials = v;
            }
            "redundancy" => {
                let v: usize = value.parse().with_context(|| format!("redundancy must be an integer, got '{value}'"))?;
                check_redundancy(v)?;
                self.redundancy = v;
            }
            "noise" => {
                let v: f64 = value.parse().with_context(|| format!("noise must be a number, got '{value}'"))?;
                check_noise(v)?;
                self.noise = v;
            }
            other => bail!("unknown parameter '{other}' (known: {})", Self::KEYS.join(", ")),
        }
        Ok(())
    }

    /// Copy with command-line overrides applied, held to the same bounds as
    /// the file.
    pub fn with_overrides(
        &self,
        trials: Option<usize>,
        redundancy: Option<usize>,
        noise: Option<f64>,
    ) -> Result<Self> {
        let mut cfg = self.clone();
        if let Some(v) = trials {
            cfg.trials = v;
        }
        if let Some(v) = redundancy {
            cfg.redundancy = v;
        }
        if let Some(v) = noise {
            cfg.noise = v;
        }
        cfg.validate().context("invalid command-line override")?;
        Ok(cfg)
    }

    /// Seeded generator when a seed is known (`override_seed` first), else from entropy.
    pub fn rng(&self, override_seed: Option<u64>) -> StdRng {
        match override_seed.or(self.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn check_trials(v: usize) -> Result<()> {
    ensure!((1..=TRIALS_MAX).contains(&v), "trials must be in 1..={TRIALS_MAX}, got {v}");
    Ok(())
}

fn check_redundancy(v: usize) -> Result<()> {
    ensure!((1..=REDUNDANCY_MAX).contains(&v), "redundancy must be in 1..={REDUNDANCY_MAX}, got {v}");
    Ok(())
}

fn check_noise(v: f64) -> Result<()> {
    ensure!((0.0..=1.0).contains(&v), "noise must be in [0, 1], got {v}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SimConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "seed = 42\nnoise = 0.25\n").unwrap();
        let cfg = SimConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.noise, 0.25);
        assert_eq!(cfg.trials, 100_000);
    }

    #[test]
    fn out_of_bounds_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "redundancy = 40\n").unwrap();
        let err = SimConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("redundancy must be in 1..=15"));
    }

    #[test]
    fn set_checks_keys_and_bounds() {
        let mut cfg = SimConfig::default();
        cfg.set("redundancy", "5").unwrap();
        assert_eq!(cfg.redundancy, 5);
        assert!(cfg.set("redundancy", "0").is_err());
        assert!(cfg.set("noise", "1.01").is_err());
        assert!(cfg.set("warp_factor", "9").is_err());
        cfg.set("seed", "7").unwrap();
        assert_eq!(cfg.seed, Some(7));
        cfg.set("seed", "none").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.redundancy, 5);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let mut cfg = SimConfig::default();
        cfg.set("trials", "500").unwrap();
        cfg.save(&path).unwrap();
        assert_eq!(SimConfig::load(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn overrides_obey_bounds() {
        let cfg = SimConfig::default();
        let tuned = cfg.with_overrides(Some(10), None, Some(0.5)).unwrap();
        assert_eq!((tuned.trials, tuned.redundancy, tuned.noise), (10, 3, 0.5));
        assert!(cfg.with_overrides(None, Some(99), None).is_err());
        assert!(cfg.with_overrides(Some(TRIALS_MAX + 1), None, None).is_err());
        assert!(cfg.with_overrides(None, None, Some(f64::NAN)).is_err());
    }

    #[test]
    fn cli_seed_wins() {
        let cfg = SimConfig { seed: Some(1), ..SimConfig::default() };
        let a: u64 = cfg.rng(Some(99)).gen();
        let b: u64 = StdRng::seed_from_u64(99).gen();
        assert_eq!(a, b);
    }
}
