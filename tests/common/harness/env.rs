//! Isolated test environment with a temporary config home.

use super::AbookCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// The binary reads its config from a temp directory that is cleaned up on
/// drop, so the developer's own `~/.config/abook` never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Directory used as XDG_CONFIG_HOME and HOME
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_home = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            config_home,
        }
    }

    /// Returns the directory used as the config home.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Returns the path the binary reads its config from.
    pub fn config_path(&self) -> PathBuf {
        self.config_home.join("abook").join("config.toml")
    }

    /// Writes `contents` as the abook config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config directory");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates an AbookCommand configured for this test environment.
    pub fn cmd(&self) -> AbookCommand {
        AbookCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.config_home().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.config_home().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_write_config() {
        let env = TestEnv::new();
        let path = env.write_config("format = \"json\"\n");
        assert!(path.ends_with("abook/config.toml"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "format = \"json\"\n");
    }
}
