//! Show version information.

use anyhow::Result;
use colored::Colorize;

pub fn execute(detailed: bool) -> Result<()> {
    println!("{} {}", "Spier".cyan().bold(), spier_core::VERSION);

    if detailed {
        println!("\nBuild Information:");
        println!("  Version: {}", env!("CARGO_PKG_VERSION"));
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    Ok(())
}
