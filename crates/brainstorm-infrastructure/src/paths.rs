//! Path management for brainstorm configuration files.

use brainstorm_core::error::{BrainstormError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "brainstorm";

/// Locations of everything the client keeps on disk.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/brainstorm/
/// ├── config.toml          # API endpoint overrides
/// ├── local_storage.toml   # token and pending guest session marker
/// └── logs/
///     └── brainstorm.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainstormPaths {
    root: PathBuf,
}

impl BrainstormPaths {
    /// Uses `base` as the root when given, the platform config dir otherwise.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let root = match base {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or_else(|| BrainstormError::config("cannot find config directory"))?
                .join(APP_DIR),
        };
        Ok(Self { root })
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn local_storage_file(&self) -> PathBuf {
        self.root.join("local_storage.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_explicit_base() {
        let paths = BrainstormPaths::new(Some(PathBuf::from("/tmp/bs"))).unwrap();
        assert_eq!(paths.config_dir(), Path::new("/tmp/bs"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/bs/config.toml"));
        assert_eq!(
            paths.local_storage_file(),
            PathBuf::from("/tmp/bs/local_storage.toml")
        );
        assert_eq!(paths.logs_dir(), PathBuf::from("/tmp/bs/logs"));
    }
}
