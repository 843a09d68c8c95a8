//! # Spier Types
//!
//! Core types and errors shared across all Spier crates.
//!
//! This crate provides the fundamental building blocks for the Spier leveled
//! file logger, including:
//!
//! - The numeric [`Severity`] scale and its standard constants
//! - Log [`Category`] streams and their file tokens
//! - The record [`Terminator`] policy
//! - Typed logger configuration
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use spier_types::{Category, Severity};
//!
//! assert_eq!(Severity::ERROR.value(), 400);
//! assert!(Severity::WARNING < Severity::ERROR);
//!
//! let category: Category = "query-stats".parse().unwrap();
//! assert_eq!(category.token(), "dbStats");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod config;

// Re-export common types for convenience
pub use errors::{SpierError, Result};
pub use identifiers::Severity;
pub use enums::{Category, Terminator};
pub use config::LoggerConfig;
