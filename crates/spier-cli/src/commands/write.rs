//! Append records to category files.

use anyhow::Result;
use spier_core::{Category, Logger, Severity};

pub fn db_error(logger: &mut Logger, message: &str) -> Result<()> {
    logger.log_db_error(message)?;
    Ok(())
}

pub fn query_stats(logger: &mut Logger, message: &str) -> Result<()> {
    logger.log_query_stats(message)?;
    Ok(())
}

pub fn app_error(logger: &mut Logger, message: &str) -> Result<()> {
    logger.log_app_error(message)?;
    Ok(())
}

pub fn custom(logger: &mut Logger, category: &str, level: &str, message: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let severity: Severity = level.parse()?;
    logger.log(category, severity, message)?;
    Ok(())
}
