//! Configuration management for Spier.
//!
//! This module provides layered configuration with:
//! - File-based configuration (YAML)
//! - Environment variable overrides
//! - Programmatic updates
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables
//! 2. Programmatically set values
//! 3. Values loaded from file
//! 4. Default values
//!
//! ## Example
//!
//! ```no_run
//! use spier_core::config::Config;
//!
//! let mut config = Config::load("/etc/spier/config")?.with_env();
//! config.set("log_root", "/var/log/app/")?;
//! let logger_config = config.logger_config()?;
//! # Ok::<(), spier_core::SpierError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use spier_types::{LoggerConfig, Result, SpierError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::util::{deep_merge, expand_path, get_path, slurp};

/// Environment variables mapped onto configuration keys.
pub const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("SPIER_LOG_ROOT", "log_root"),
    ("SPIER_TERMINATOR", "terminator"),
    ("SPIER_SCRIPT_NAME", "script_name"),
];

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
    /// Values from environment variables
    Environment = 3,
}

impl ConfigLayer {
    /// Lowest priority first.
    const ASCENDING: [ConfigLayer; 4] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Set,
        ConfigLayer::Environment,
    ];
}

/// Layered configuration store.
#[derive(Clone, Debug)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Configuration holding only the defaults.
    pub fn new() -> Self {
        let mut layers = HashMap::new();
        layers.insert(
            ConfigLayer::Default,
            json!({ "log_root": "", "terminator": "legacy" }),
        );
        Self { layers, file_path: None }
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults; the path is remembered for `save`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_path(path);
        let mut config = Self::new();

        if path.exists() {
            let content = slurp(&path)
                .map_err(|e| SpierError::Config(format!("Failed to read config file: {}", e)))?;

            let value: Value = serde_yaml::from_str(&content)
                .map_err(|e| SpierError::Config(format!("Failed to parse config: {}", e)))?;

            if !value.is_null() {
                config.layers.insert(ConfigLayer::Loaded, value);
            }
            debug!("Loaded configuration from {}", path.display());
        } else {
            debug!("No configuration file at {}", path.display());
        }

        config.file_path = Some(path);
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(std::env::vars())
    }

    /// Apply overrides from the given variables; unrelated names are ignored.
    pub fn with_env_from<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut overrides = Map::new();
        for (name, value) in vars {
            if let Some((_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name.as_ref()) {
                overrides.insert(key.to_string(), Value::String(value.into()));
            }
        }
        if !overrides.is_empty() {
            self.layers.insert(ConfigLayer::Environment, Value::Object(overrides));
        }
        self
    }

    /// Get a configuration value by key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        ConfigLayer::ASCENDING
            .iter()
            .rev()
            .filter_map(|layer| self.layers.get(layer))
            .filter_map(|data| get_path(data, key))
            .find_map(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| SpierError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Map::new()));

        set_value_at_path(set_layer, key, value)
    }

    /// Save the merged configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self.file_path.as_ref().ok_or_else(|| {
            SpierError::Config("Cannot save: no file path set".to_string())
        })?;

        let yaml = serde_yaml::to_string(&self.merged_data())
            .map_err(|e| SpierError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml)
            .map_err(|e| SpierError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Typed logger configuration from all layers.
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        let config: LoggerConfig = serde_json::from_value(self.merged_data())
            .map_err(|e| SpierError::Config(format!("Failed to parse logger config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// File this configuration is bound to.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn merged_data(&self) -> Value {
        ConfigLayer::ASCENDING
            .iter()
            .filter_map(|layer| self.layers.get(layer))
            .fold(Value::Object(Map::new()), |merged, layer| {
                deep_merge(merged, layer.clone())
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// Set value at a dotted path, creating intermediate objects as needed
fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
    let mut parts: Vec<&str> = path.split('.').collect();
    let last = match parts.pop() {
        Some(last) if !last.is_empty() => last,
        _ => return Err(SpierError::Config("Empty path".to_string())),
    };

    let mut current = data;
    for part in parts {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Object(map) => map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            _ => unreachable!("replaced with an object above"),
        };
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
    Ok(())
}

/// Default configuration file (`~/.spier/config`), if a home directory exists.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".spier").join("config"))
}

/// Load the logger configuration from `path` (or the default file) plus the
/// environment.
pub fn load_logger_config(path: Option<&Path>) -> Result<LoggerConfig> {
    let config = match path.map(Path::to_path_buf).or_else(default_path) {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    config.with_env().logger_config()
}
