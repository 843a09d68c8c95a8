//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spier_core::config::load_logger_config;
use spier_core::{ContextProvider, Logger, ProcessContext, StaticContext, Terminator};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "spier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Append leveled records to daily category log files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log root directory prefix (overrides configuration)
    #[arg(short, long, global = true)]
    pub root: Option<String>,

    /// Configuration file (defaults to ~/.spier/config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Script identifier written into each record
    #[arg(short, long, global = true)]
    pub script: Option<String>,

    /// Remote address written into each record
    #[arg(long, global = true, env = "REMOTE_ADDR")]
    pub remote_addr: Option<String>,

    /// End records with a single newline instead of CRLF plus newline
    #[arg(long, global = true)]
    pub single_terminator: bool,

    /// Enable verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a database error (ERROR to dbLogs)
    #[command(name = "db-error")]
    DbError {
        /// Message text
        message: String,
    },

    /// Log query statistics (INFO to dbStats)
    #[command(name = "query-stats")]
    QueryStats {
        /// Message text
        message: String,
    },

    /// Log an application error (ERROR to appLogs)
    #[command(name = "app-error")]
    AppError {
        /// Message text
        message: String,
    },

    /// Log to any category at any registered level
    Log {
        /// Category token (dbLogs, dbStats, appLogs or a custom token)
        #[arg(short = 'C', long)]
        category: String,

        /// Severity number or standard name
        #[arg(short, long, default_value = "400")]
        level: String,

        /// Message text
        message: String,
    },

    /// Print the name of a severity
    Level {
        /// Severity number or standard name
        severity: String,
    },

    /// List registered levels
    Levels,

    /// Print today's file path for a category
    Path {
        /// Category token or alias
        category: String,
    },

    /// Show version information
    Version {
        /// Show detailed version info
        #[arg(long)]
        detailed: bool,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::DbError { message } => write::db_error(&mut self.logger()?, message),
            Commands::QueryStats { message } => write::query_stats(&mut self.logger()?, message),
            Commands::AppError { message } => write::app_error(&mut self.logger()?, message),
            Commands::Log { category, level, message } => {
                write::custom(&mut self.logger()?, category, level, message)
            }
            Commands::Level { severity } => level::show(&self.logger()?, severity),
            Commands::Levels => level::list(&self.logger()?),
            Commands::Path { category } => path::show(&self.logger()?, category),
            Commands::Version { detailed } => version::execute(*detailed),
        }
    }

    /// Build a logger from configuration with command-line overrides applied.
    fn logger(&self) -> Result<Logger> {
        let mut config = load_logger_config(self.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(root) = &self.root {
            config.log_root = root.clone();
        }
        if let Some(script) = &self.script {
            config.script_name = Some(script.clone());
        }
        if self.single_terminator {
            config.terminator = Terminator::Single;
        }
        debug!("Using log root '{}'", config.log_root);

        let mut logger = Logger::from_config(&config)?;
        if let Some(addr) = &self.remote_addr {
            let context = StaticContext::new(ProcessContext.script_name()).with_remote_addr(addr.clone());
            logger = logger.with_context(context);
        }
        Ok(logger)
    }
}
