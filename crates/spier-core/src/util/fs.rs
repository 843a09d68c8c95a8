//! Filesystem utilities.

use spier_types::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

/// Read entire file as string (slurp).
pub fn slurp(path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(path).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_absolute_paths() {
        assert_eq!(expand_path("/etc/spier/config"), PathBuf::from("/etc/spier/config"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/.spier/config"), home.join(".spier/config"));
        }
    }
}
