//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `abook` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct AbookCommand {
    args: Vec<String>,
    stdin: Option<String>,
    config_home: Option<PathBuf>,
}

impl AbookCommand {
    /// Creates a new command for the `abook` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
            config_home: None,
        }
    }

    /// Points config lookup at `path` instead of the real user config.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `lines` to the binary on stdin, one per line.
    pub fn stdin_lines(mut self, lines: &[&str]) -> Self {
        let mut input = lines.join("\n");
        input.push('\n');
        self.stdin = Some(input);
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("abook").expect("Failed to find abook binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses each stdout line as JSON.
    pub fn output_json_lines<T: DeserializeOwned>(self) -> Vec<T> {
        self.output_success()
            .lines()
            .map(|line| serde_json::from_str(line).expect("Failed to parse output as JSON"))
            .collect()
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Adds a `remark` command line.
    pub fn remark(self, index: &str, text: &str) -> Self {
        self.args([format!("remark {index} r/{text}")])
    }

    /// Adds a `help` command line.
    pub fn help(self) -> Self {
        self.args(["help"])
    }

    /// Adds an `exit` command line.
    pub fn exit(self) -> Self {
        self.args(["exit"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for AbookCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        AbookCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = AbookCommand::new().format_json().remark("1", "Hi").exit();
        let args = cmd.get_args();
        assert_eq!(args, &["--format", "json", "remark 1 r/Hi", "exit"]);
    }

    #[test]
    fn test_command_output_success() {
        let output = AbookCommand::new().args(["--help"]).output_success();
        assert!(output.contains("abook") || output.contains("address book"));
    }
}
