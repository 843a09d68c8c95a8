//! Show where records for a category go today.

use anyhow::Result;
use spier_core::{Category, Logger};

pub fn show(logger: &Logger, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    println!("{}", logger.path_for_today(&category).display());
    Ok(())
}
