//! Single-handle append channel for category files.

use chrono::NaiveDate;
use spier_types::{Category, Result, SpierError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::time::FILE_DATE_FORMAT;

/// Owns at most one open log file at a time.
///
/// Root and category are trusted configuration values. No escaping or
/// traversal checks are applied when building paths.
#[derive(Debug, Default)]
pub struct FileChannel {
    path: Option<PathBuf>,
    file: Option<File>,
}

impl FileChannel {
    /// Create a closed channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dated file path for a category: `{root}{token}_{YYYYMMDD}.log`.
    ///
    /// The root is concatenated as-is, so `"/var/log/app/"` and
    /// `"/var/log/app"` produce different paths.
    pub fn path_for(root: &str, category: &Category, date: NaiveDate) -> PathBuf {
        PathBuf::from(format!(
            "{}{}_{}.log",
            root,
            category.token(),
            date.format(FILE_DATE_FORMAT)
        ))
    }

    /// Open `path` for appending, creating it if absent.
    ///
    /// Reopening the path that is already open reuses the handle. Opening a
    /// different path closes the current handle first.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if self.file.is_some() {
            if self.path.as_deref() == Some(path) {
                return Ok(());
            }
            self.close();
        }

        self.path = Some(path.to_path_buf());
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                debug!("Opened log channel {}", path.display());
                self.file = Some(file);
                Ok(())
            }
            Err(source) => {
                warn!("Can't open {}: {}", path.display(), source);
                Err(SpierError::ChannelOpen {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Append `bytes` to the open file in one write.
    ///
    /// Callers format a whole record before calling this so concurrent
    /// appenders on the same file never interleave within a line.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let file = self.file.as_mut().ok_or(SpierError::ChannelNotOpen)?;
        file.write_all(bytes).map_err(|source| SpierError::ChannelWrite {
            path: self.path.clone().unwrap_or_default(),
            source,
        })
    }

    /// Release the handle. Closing a closed channel does nothing.
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            if let Some(path) = &self.path {
                debug!("Closed log channel {}", path.display());
            }
        }
    }

    /// Whether a handle is currently open.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Path of the current (or most recently attempted) file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
