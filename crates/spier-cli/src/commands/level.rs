//! Inspect the level registry.

use anyhow::Result;
use colored::Colorize;
use spier_core::{Logger, Severity};

pub fn show(logger: &Logger, severity: &str) -> Result<()> {
    let severity: Severity = severity.parse()?;
    println!("{}", logger.level_name(severity)?);
    Ok(())
}

pub fn list(logger: &Logger) -> Result<()> {
    let levels = logger.levels();
    for (severity, name) in levels.read().iter() {
        println!("{:>5}  {}", severity.to_string().cyan(), name);
    }
    Ok(())
}
