//! CLI command implementations.

pub mod level;
pub mod path;
pub mod version;
pub mod write;
