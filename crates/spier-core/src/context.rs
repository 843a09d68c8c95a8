//! Invocation context supplied by the host environment.
//!
//! The logger only needs two values per record: an identifier for the
//! running script and the remote address of the request being served, if
//! any. Hosts plug in their own provider; the process provider reads them
//! from `argv[0]` and the CGI-style `REMOTE_ADDR` variable.

use std::path::Path;

/// Environment variable consulted by [`ProcessContext`] for the remote address.
pub const REMOTE_ADDR_VAR: &str = "REMOTE_ADDR";

/// Supplies per-record invocation context.
#[cfg_attr(test, mockall::automock)]
pub trait ContextProvider: Send + Sync {
    /// Identifier of the executing script or entry point.
    fn script_name(&self) -> String;

    /// Remote address of the current request.
    ///
    /// `None` means there is no request (background or cron invocation).
    /// `Some("")` means a request exists but its address is unknown.
    fn remote_addr(&self) -> Option<String>;
}

/// Context read from the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessContext;

impl ContextProvider for ProcessContext {
    fn script_name(&self) -> String {
        std::env::args_os()
            .next()
            .as_deref()
            .and_then(|arg| Path::new(arg).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn remote_addr(&self) -> Option<String> {
        std::env::var_os(REMOTE_ADDR_VAR).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Fixed context values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticContext {
    /// Script identifier
    pub script_name: String,
    /// Remote address, if any
    pub remote_addr: Option<String>,
}

impl StaticContext {
    /// Context for a script with no remote peer.
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            remote_addr: None,
        }
    }

    /// Attach a remote address.
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }
}

impl ContextProvider for StaticContext {
    fn script_name(&self) -> String {
        self.script_name.clone()
    }

    fn remote_addr(&self) -> Option<String> {
        self.remote_addr.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_context() {
        let ctx = StaticContext::new("index").with_remote_addr("10.0.0.7");
        assert_eq!(ctx.script_name(), "index");
        assert_eq!(ctx.remote_addr().as_deref(), Some("10.0.0.7"));
        assert_eq!(StaticContext::new("cron").remote_addr(), None);
    }

    #[test]
    fn test_process_context_script_name_is_stem() {
        let name = ProcessContext.script_name();
        assert!(!name.is_empty());
        assert!(!name.contains('/'));
    }
}
