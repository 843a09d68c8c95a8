//! The logger facade.
//!
//! A [`Logger`] turns a category, a severity and a message into one appended
//! line in that category's file for the current day:
//!
//! 1. resolve the severity name through the level registry,
//! 2. compute `{root}{category}_{YYYYMMDD}.log` from a single clock read,
//! 3. format the whole record, then open, write once and close.
//!
//! No handle is kept between calls. Open and write failures are returned to
//! the caller, who decides whether to fall back, count or abort.

use spier_types::{Category, LoggerConfig, Result, Severity, Terminator};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::channel::FileChannel;
use crate::context::{ContextProvider, ProcessContext};
use crate::format::{LineFormatter, LogRecord};
use crate::levels::{LevelRegistry, SharedLevels};
use crate::time::{Clock, SystemClock};

/// Leveled daily file logger.
///
/// # Example
///
/// ```no_run
/// use spier_core::Logger;
///
/// let mut logger = Logger::new();
/// logger.set_log_root("/var/log/app/");
/// logger.log_app_error("disk full")?;
/// # Ok::<(), spier_core::SpierError>(())
/// ```
pub struct Logger {
    log_root: String,
    levels: SharedLevels,
    terminator: Terminator,
    script_override: Option<String>,
    current_level: Option<String>,
    channel: FileChannel,
    formatter: LineFormatter,
    context: Box<dyn ContextProvider>,
    clock: Box<dyn Clock>,
}

impl Logger {
    /// Logger with the standard level table, process context and system clock.
    ///
    /// The log root starts empty; set it before logging or files land in the
    /// working directory.
    pub fn new() -> Self {
        Self {
            log_root: String::new(),
            levels: LevelRegistry::default().into_shared(),
            terminator: Terminator::default(),
            script_override: None,
            current_level: None,
            channel: FileChannel::new(),
            formatter: LineFormatter::new(),
            context: Box::new(ProcessContext),
            clock: Box::new(SystemClock),
        }
    }

    /// Build a logger from configuration, registering any custom levels.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;

        let mut logger = Self::new().with_terminator(config.terminator);
        logger.set_log_root(config.log_root.clone());
        logger.script_override = config.script_name.clone();
        {
            let mut levels = logger.levels.write();
            for (level, name) in &config.levels {
                levels.register(Severity::new(*level), name.clone());
            }
        }
        Ok(logger)
    }

    /// Use a different context provider.
    pub fn with_context(mut self, context: impl ContextProvider + 'static) -> Self {
        self.context = Box::new(context);
        self
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Share a level registry with other loggers.
    pub fn with_levels(mut self, levels: SharedLevels) -> Self {
        self.levels = levels;
        self
    }

    /// Select the record terminator policy.
    pub fn with_terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Configured log root.
    pub fn log_root(&self) -> &str {
        &self.log_root
    }

    /// Replace the log root. Not validated; a bad root surfaces as an open failure.
    pub fn set_log_root(&mut self, root: impl Into<String>) {
        self.log_root = root.into();
    }

    /// Handle to the level registry used by this logger.
    pub fn levels(&self) -> SharedLevels {
        Arc::clone(&self.levels)
    }

    /// Register a custom level on this logger's registry.
    pub fn register_level(&self, severity: Severity, name: impl Into<String>) {
        self.levels.write().register(severity, name);
    }

    /// Display name of `severity` without writing anything.
    pub fn level_name(&self, severity: Severity) -> Result<String> {
        self.levels.read().name_of(severity).map(str::to_string)
    }

    /// Severity name used by the most recent write.
    pub fn current_level_name(&self) -> Option<&str> {
        self.current_level.as_deref()
    }

    /// Terminator policy in effect.
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Path the next write to `category` would use.
    pub fn path_for_today(&self, category: &Category) -> PathBuf {
        FileChannel::path_for(&self.log_root, category, self.clock.today())
    }

    /// Append one record to `category`'s file for today.
    pub fn log(&mut self, category: Category, severity: Severity, message: &str) -> Result<()> {
        let level_name = self.level_name(severity)?;
        self.current_level = Some(level_name.clone());

        let now = self.clock.now();
        let path = FileChannel::path_for(&self.log_root, &category, now.date());

        let message = format!("{}{}", message, self.terminator.message_suffix());
        let script_name = match &self.script_override {
            Some(name) => name.clone(),
            None => self.context.script_name(),
        };
        let remote_addr = self.context.remote_addr();

        let line = self.formatter.format(&LogRecord {
            timestamp: now,
            remote_addr: remote_addr.as_deref(),
            level_name: &level_name,
            script_name: &script_name,
            message: &message,
        });

        self.channel.open(&path)?;
        let written = self.channel.write(line.as_bytes());
        self.channel.close();
        written?;

        debug!("Wrote {} record to {}", level_name, path.display());
        Ok(())
    }

    /// Log a database error (`ERROR` to `dbLogs`).
    pub fn log_db_error(&mut self, message: &str) -> Result<()> {
        self.log(Category::DbLogs, Severity::ERROR, message)
    }

    /// Log query statistics (`INFO` to `dbStats`).
    pub fn log_query_stats(&mut self, message: &str) -> Result<()> {
        self.log(Category::DbStats, Severity::INFO, message)
    }

    /// Log an application error (`ERROR` to `appLogs`).
    pub fn log_app_error(&mut self, message: &str) -> Result<()> {
        self.log(Category::AppLogs, Severity::ERROR, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_root", &self.log_root)
            .field("terminator", &self.terminator)
            .field("script_override", &self.script_override)
            .field("current_level", &self.current_level)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MockContextProvider, StaticContext};
    use crate::time::FixedClock;
    use spier_types::SpierError;
    use std::fs;
    use tempfile::TempDir;

    fn root_of(dir: &TempDir) -> String {
        format!("{}/", dir.path().display())
    }

    fn test_logger(dir: &TempDir) -> Logger {
        let mut logger = Logger::new()
            .with_clock(FixedClock::at(2024, 3, 2, 14, 30, 5))
            .with_context(StaticContext::new("index").with_remote_addr("10.1.2.3"));
        logger.set_log_root(root_of(dir));
        logger
    }

    #[test]
    fn test_app_error_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);

        logger.log_app_error("disk full").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("appLogs_20240302.log")).unwrap();
        assert_eq!(
            content,
            "[02.03.2024 14:30:05] [10.1.2.3] [ERROR] [index] - disk full\r\n\n"
        );
        assert_eq!(logger.current_level_name(), Some("ERROR"));
    }

    #[test]
    fn test_query_stats_uses_info_and_db_stats() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);

        logger.log_query_stats("SELECT took 12ms").unwrap();

        assert_eq!(logger.current_level_name(), Some("INFO"));
        let content = fs::read_to_string(temp_dir.path().join("dbStats_20240302.log")).unwrap();
        assert!(content.contains("[INFO] [index] - SELECT took 12ms"));
    }

    #[test]
    fn test_db_error_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);

        logger.log_db_error("connection refused").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("dbLogs_20240302.log")).unwrap();
        assert!(content.contains("[ERROR] [index] - connection refused\r\n"));
    }

    #[test]
    fn test_sequential_writes_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir).with_terminator(Terminator::Single);

        for i in 0..25 {
            logger.log_app_error(&format!("failure {}", i)).unwrap();
        }

        let content = fs::read_to_string(temp_dir.path().join("appLogs_20240302.log")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 25);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(
                *line,
                format!("[02.03.2024 14:30:05] [10.1.2.3] [ERROR] [index] - failure {}", i)
            );
        }
    }

    #[test]
    fn test_mixing_categories_leaves_channel_closed() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);

        logger.log_db_error("a").unwrap();
        logger.log_query_stats("b").unwrap();
        logger.log_app_error("c").unwrap();

        assert!(!logger.channel.is_open());
        for token in ["dbLogs", "dbStats", "appLogs"] {
            let path = temp_dir.path().join(format!("{}_20240302.log", token));
            assert_eq!(fs::read_to_string(path).unwrap().matches('\n').count(), 2);
        }
    }

    #[test]
    fn test_open_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);
        logger.set_log_root(format!("{}/missing/", temp_dir.path().display()));

        let err = logger.log_app_error("disk full").unwrap_err();
        assert!(matches!(err, SpierError::ChannelOpen { .. }));
        assert!(!temp_dir.path().join("missing").exists());

        // The logger keeps working once the root is fixed
        logger.set_log_root(root_of(&temp_dir));
        logger.log_app_error("recovered").unwrap();
    }

    #[test]
    fn test_unknown_level_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);

        let err = logger
            .log(Category::AppLogs, Severity::new(42), "odd")
            .unwrap_err();
        assert!(matches!(err, SpierError::UnknownLevel { .. }));
        assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_custom_level_and_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir);
        logger.register_level(Severity::new(450), "AUDIT");

        logger
            .log(Category::Custom("auditLogs".into()), Severity::new(450), "login")
            .unwrap();

        let content = fs::read_to_string(temp_dir.path().join("auditLogs_20240302.log")).unwrap();
        assert!(content.contains("[AUDIT] [index] - login"));
    }

    #[test]
    fn test_shared_levels_between_loggers() {
        let shared = LevelRegistry::default().into_shared();
        let first = Logger::new().with_levels(Arc::clone(&shared));
        let second = Logger::new().with_levels(shared);

        first.register_level(Severity::new(150), "TRACE");
        assert_eq!(second.level_name(Severity::new(150)).unwrap(), "TRACE");
        assert!(Logger::new().level_name(Severity::new(150)).is_err());
    }

    #[test]
    fn test_context_is_read_per_write() {
        let temp_dir = TempDir::new().unwrap();
        let mut context = MockContextProvider::new();
        context.expect_script_name().times(2).returning(|| "worker".to_string());
        context.expect_remote_addr().times(2).returning(|| None);

        let mut logger = Logger::new()
            .with_clock(FixedClock::at(2024, 3, 2, 0, 0, 0))
            .with_context(context);
        logger.set_log_root(root_of(&temp_dir));

        logger.log_app_error("one").unwrap();
        logger.log_app_error("two").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("appLogs_20240302.log")).unwrap();
        assert!(content.starts_with("[02.03.2024 00:00:00] [from cron] [ERROR] [worker] - one"));
    }

    #[test]
    fn test_empty_remote_addr() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = test_logger(&temp_dir)
            .with_context(StaticContext::new("index").with_remote_addr(""));

        logger.log_app_error("x").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("appLogs_20240302.log")).unwrap();
        assert!(content.contains("] [REMOTE_ADDR_UNKNOWN] [ERROR]"));
    }

    #[test]
    fn test_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = LoggerConfig {
            log_root: root_of(&temp_dir),
            terminator: Terminator::Single,
            script_name: Some("billing".to_string()),
            ..Default::default()
        };
        config.levels.insert(450, "AUDIT".to_string());

        let mut logger = Logger::from_config(&config)
            .unwrap()
            .with_clock(FixedClock::at(2024, 3, 2, 8, 0, 0));
        assert_eq!(logger.log_root(), root_of(&temp_dir));
        assert_eq!(logger.level_name(Severity::new(450)).unwrap(), "AUDIT");

        logger.log(Category::AppLogs, Severity::new(450), "charged").unwrap();
        let content = fs::read_to_string(temp_dir.path().join("appLogs_20240302.log")).unwrap();
        assert!(content.ends_with("[AUDIT] [billing] - charged\n"));
        assert!(!content.contains('\r'));
    }

    #[test]
    fn test_path_for_today() {
        let mut logger = Logger::new().with_clock(FixedClock::at(2024, 3, 2, 23, 59, 59));
        logger.set_log_root("/var/log/app/");
        assert_eq!(
            logger.path_for_today(&Category::AppLogs),
            PathBuf::from("/var/log/app/appLogs_20240302.log")
        );
    }
}
