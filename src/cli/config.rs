//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default log filter directive, e.g. `info` or `addressbook=debug`
    pub log_level: Option<String>,

    /// Default output format
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, defaulting when it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/abook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("abook")
            .join("config.toml")
    }

    /// Resolve the log filter directive.
    ///
    /// Precedence order:
    /// 1. `-v` flags (`info`, `debug`, `trace`)
    /// 2. Config file `log_level` setting
    /// 3. `warn`
    ///
    /// `RUST_LOG`, when set, overrides all of these at subscriber setup.
    pub fn log_directive(&self, verbose: u8) -> String {
        match verbose {
            0 => self
                .log_level
                .clone()
                .unwrap_or_else(|| "warn".to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }

    /// Resolve the output format, with CLI argument taking precedence.
    pub fn output_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }
}
