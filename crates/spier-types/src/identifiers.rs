//! Numeric severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{SpierError, Result};

/// A numeric log severity.
///
/// Severities are ordered by their numeric value. The eight standard levels
/// are provided as associated constants; any other value is a custom level
/// and only becomes usable once it is registered with a level registry.
///
/// # Example
///
/// ```
/// use spier_types::Severity;
///
/// let audit = Severity::new(450);
/// assert!(audit > Severity::ERROR);
/// assert!(audit < Severity::CRITICAL);
/// assert!(!audit.is_standard());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u16);

impl Severity {
    /// Detailed debug information
    pub const DEBUG: Severity = Severity(100);
    /// Interesting events
    pub const INFO: Severity = Severity(200);
    /// Normal but significant events
    pub const NOTICE: Severity = Severity(250);
    /// Exceptional occurrences that are not errors
    pub const WARNING: Severity = Severity(300);
    /// Runtime errors
    pub const ERROR: Severity = Severity(400);
    /// Critical conditions
    pub const CRITICAL: Severity = Severity(500);
    /// Action must be taken immediately
    pub const ALERT: Severity = Severity(600);
    /// System is unusable
    pub const EMERGENCY: Severity = Severity(700);

    /// The standard levels paired with their display names, in ascending order.
    pub const STANDARD: [(Severity, &'static str); 8] = [
        (Severity::DEBUG, "DEBUG"),
        (Severity::INFO, "INFO"),
        (Severity::NOTICE, "NOTICE"),
        (Severity::WARNING, "WARNING"),
        (Severity::ERROR, "ERROR"),
        (Severity::CRITICAL, "CRITICAL"),
        (Severity::ALERT, "ALERT"),
        (Severity::EMERGENCY, "EMERGENCY"),
    ];

    /// Wrap a raw numeric severity.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this is one of the eight standard levels.
    pub fn is_standard(self) -> bool {
        Self::STANDARD.iter().any(|(s, _)| *s == self)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Severity {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl FromStr for Severity {
    type Err = SpierError;

    /// Parse either a number (`400`) or a standard name (`error`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u16>() {
            return Ok(Self(n));
        }
        Self::STANDARD
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(sev, _)| *sev)
            .ok_or_else(|| SpierError::Validation(format!("Invalid severity: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_values() {
        assert_eq!(Severity::DEBUG.value(), 100);
        assert_eq!(Severity::NOTICE.value(), 250);
        assert_eq!(Severity::EMERGENCY.value(), 700);
        assert!(Severity::STANDARD.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!("400".parse::<Severity>().unwrap(), Severity::ERROR);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::WARNING);
        assert_eq!(" Info ".parse::<Severity>().unwrap(), Severity::INFO);
        assert_eq!("42".parse::<Severity>().unwrap(), Severity::new(42));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Severity::ALERT).unwrap();
        assert_eq!(json, "600");
        let back: Severity = serde_json::from_str("250").unwrap();
        assert_eq!(back, Severity::NOTICE);
    }

    proptest! {
        #[test]
        fn ordering_follows_value(a in any::<u16>(), b in any::<u16>()) {
            prop_assert_eq!(Severity::new(a).cmp(&Severity::new(b)), a.cmp(&b));
        }
    }
}
