//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::{bail, Terminator};

/// Logger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory prefix for every category file. Concatenated verbatim, so
    /// it normally ends with a path separator.
    #[serde(default)]
    pub log_root: String,

    /// Record terminator policy
    #[serde(default)]
    pub terminator: Terminator,

    /// Fixed script identifier, overriding the context provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,

    /// Custom levels registered at startup, keyed by numeric severity
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub levels: BTreeMap<u16, String>,
}

impl LoggerConfig {
    /// Check values that serde alone cannot reject.
    pub fn validate(&self) -> Result<()> {
        for (level, name) in &self.levels {
            if name.trim().is_empty() {
                bail!(Validation, "Level {} has an empty name", level);
            }
        }
        Ok(())
    }
}
