//! Record line rendering.
//!
//! Every record has the shape
//!
//! ```text
//! [DD.MM.YYYY HH:MM:SS] [<remote>] [<LEVEL>] [<script>] - <message>\n
//! ```
//!
//! Downstream parsers depend on this layout.

use chrono::NaiveDateTime;

use crate::time::record_timestamp;

/// Remote identifier used when there is no request at all.
pub const NO_REMOTE: &str = "from cron";

/// Remote identifier used when a request carries an empty address.
pub const UNKNOWN_REMOTE: &str = "REMOTE_ADDR_UNKNOWN";

/// One record, built per write and dropped once formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Local wall time of the write
    pub timestamp: NaiveDateTime,
    /// Remote address of the request, if any
    pub remote_addr: Option<&'a str>,
    /// Resolved severity name
    pub level_name: &'a str,
    /// Script identifier
    pub script_name: &'a str,
    /// Message body, including any caller-appended terminator
    pub message: &'a str,
}

/// Renders records into single lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl LineFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render `record` as one complete line, terminator included.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        format!(
            "[{}] [{}] [{}] [{}] - {}\n",
            record_timestamp(record.timestamp),
            remote_identifier(record.remote_addr),
            record.level_name,
            record.script_name,
            record.message,
        )
    }
}

/// Remote field for a record: the address, [`NO_REMOTE`] when absent, or
/// [`UNKNOWN_REMOTE`] when present but empty.
pub fn remote_identifier(addr: Option<&str>) -> &str {
    match addr {
        None => NO_REMOTE,
        Some("") => UNKNOWN_REMOTE,
        Some(addr) => addr,
    }
}
