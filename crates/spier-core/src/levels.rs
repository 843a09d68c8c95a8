//! Severity name registry.
//!
//! The registry maps numeric severities to display names. It starts out with
//! the eight standard levels and can be extended with custom ones at startup.
//! Lookups of unregistered severities fail with [`SpierError::UnknownLevel`];
//! there is no silent default name.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use spier_types::{Result, Severity, SpierError};
use std::sync::Arc;

/// A registry shared between several loggers.
pub type SharedLevels = Arc<RwLock<LevelRegistry>>;

/// Insertion-ordered map from severity to display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRegistry {
    names: IndexMap<Severity, String>,
}

static DEFAULT_LEVELS: Lazy<LevelRegistry> = Lazy::new(LevelRegistry::default);

impl LevelRegistry {
    /// A registry with no levels at all.
    pub fn empty() -> Self {
        Self { names: IndexMap::new() }
    }

    /// Display name for `severity`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` listing every registered severity in key order.
    pub fn name_of(&self, severity: Severity) -> Result<&str> {
        self.names
            .get(&severity)
            .map(String::as_str)
            .ok_or_else(|| SpierError::unknown_level(severity, self.names.keys().copied()))
    }

    /// Insert or overwrite a level. Overwriting keeps the original position.
    pub fn register(&mut self, severity: Severity, name: impl Into<String>) {
        self.names.insert(severity, name.into());
    }

    /// Whether `severity` has a name.
    pub fn contains(&self, severity: Severity) -> bool {
        self.names.contains_key(&severity)
    }

    /// Number of registered levels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate levels in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &str)> {
        self.names.iter().map(|(s, n)| (*s, n.as_str()))
    }

    /// Wrap into a handle that can be shared between loggers.
    pub fn into_shared(self) -> SharedLevels {
        Arc::new(RwLock::new(self))
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (severity, name) in Severity::STANDARD {
            registry.register(severity, name);
        }
        registry
    }
}

/// Resolve a name against the standard table, without a logger.
pub fn level_name(severity: Severity) -> Result<&'static str> {
    let registry: &'static LevelRegistry = &DEFAULT_LEVELS;
    registry.name_of(severity)
}
