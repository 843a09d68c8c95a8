//! # Spier Core
//!
//! A minimal leveled file logger. Each record is appended as one
//! timestamped, level-tagged line to a per-category file named for the
//! current day.
//!
//! This crate provides:
//!
//! - **Levels**: an extensible severity name registry
//! - **Channel**: lazy open-append-close handling of the dated file
//! - **Format**: the record line layout
//! - **Logger**: the facade with `log_db_error`, `log_query_stats` and `log_app_error`
//! - **Context/Time**: injectable script/remote context and clock
//! - **Configuration**: layered YAML + environment configuration
//!
//! ## Example
//!
//! ```no_run
//! use spier_core::{Logger, Severity};
//!
//! let mut logger = Logger::new();
//! logger.set_log_root("/var/log/app/");
//! logger.log_query_stats("SELECT took 12ms")?;
//! assert_eq!(logger.level_name(Severity::INFO)?, "INFO");
//! # Ok::<(), spier_core::SpierError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod config;
pub mod context;
pub mod format;
pub mod levels;
pub mod log;
pub mod logger;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use channel::FileChannel;
pub use context::{ContextProvider, ProcessContext, StaticContext};
pub use format::{LineFormatter, LogRecord};
pub use levels::{level_name, LevelRegistry, SharedLevels};
pub use logger::Logger;
pub use time::{Clock, FixedClock, SystemClock};
pub use spier_types::{Category, LoggerConfig, Result, Severity, SpierError, Terminator};

/// Spier version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spier application name
pub const APP_NAME: &str = "spier";
