use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::SimConfig;

pub fn show(cfg: &SimConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg).context("Serialize config")?);
    Ok(())
}

pub fn path(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => println!("{}", p.display()),
        None => println!("(no home directory; pass --config FILE)"),
    }
    Ok(())
}

pub fn set(path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let path = path.context("no config path; pass --config FILE")?;
    let mut cfg = SimConfig::load(Some(path))?;
    cfg.set(key, value)?;
    cfg.save(path)?;
    println!("{} {key} = {value} ({})", "set".green().bold(), path.display());
    Ok(())
}
