//! Common enumerations used throughout Spier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{SpierError, Result};

/// A logical log stream, each backed by its own daily file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Database errors (`dbLogs`)
    DbLogs,
    /// Database query statistics (`dbStats`)
    DbStats,
    /// Application errors (`appLogs`)
    AppLogs,
    /// Host-defined stream; the token is used verbatim in the file name
    Custom(String),
}

impl Category {
    /// The short machine token used in file names.
    pub fn token(&self) -> &str {
        match self {
            Category::DbLogs => "dbLogs",
            Category::DbStats => "dbStats",
            Category::AppLogs => "appLogs",
            Category::Custom(token) => token,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Category {
    type Err = SpierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dbLogs" | "db-logs" | "db-error" => Ok(Category::DbLogs),
            "dbStats" | "db-stats" | "query-stats" => Ok(Category::DbStats),
            "appLogs" | "app-logs" | "app-error" => Ok(Category::AppLogs),
            "" => Err(SpierError::Validation("Empty category token".to_string())),
            other => Ok(Category::Custom(other.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How a record is terminated.
///
/// `Legacy` keeps the historical layout where the message carries its own
/// `\r\n` and the formatter appends `\n` after it, so every record ends in
/// `\r\n\n`. `Single` ends every record with exactly one `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminator {
    /// `\r\n` on the message plus `\n` from the formatter
    #[default]
    Legacy,
    /// A single `\n`
    Single,
}

impl Terminator {
    /// Suffix appended to the message body before formatting.
    pub fn message_suffix(self) -> &'static str {
        match self {
            Terminator::Legacy => "\r\n",
            Terminator::Single => "",
        }
    }
}

impl FromStr for Terminator {
    type Err = SpierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Terminator::Legacy),
            "single" => Ok(Terminator::Single),
            _ => Err(SpierError::Config(format!("Invalid terminator: {}", s))),
        }
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Legacy => write!(f, "legacy"),
            Terminator::Single => write!(f, "single"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens() {
        assert_eq!(Category::DbLogs.token(), "dbLogs");
        assert_eq!(Category::DbStats.token(), "dbStats");
        assert_eq!(Category::AppLogs.token(), "appLogs");
        assert_eq!(Category::Custom("mailLogs".into()).token(), "mailLogs");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("db-error".parse::<Category>().unwrap(), Category::DbLogs);
        assert_eq!("dbStats".parse::<Category>().unwrap(), Category::DbStats);
        assert_eq!("app-error".parse::<Category>().unwrap(), Category::AppLogs);
        assert_eq!(
            "cronLogs".parse::<Category>().unwrap(),
            Category::Custom("cronLogs".into())
        );
        assert!("  ".parse::<Category>().is_err());
    }

    #[test]
    fn test_terminator_parsing() {
        assert_eq!("LEGACY".parse::<Terminator>().unwrap(), Terminator::Legacy);
        assert_eq!("single".parse::<Terminator>().unwrap(), Terminator::Single);
        assert!("double".parse::<Terminator>().is_err());
        assert_eq!(Terminator::default().message_suffix(), "\r\n");
    }
}
