//! Output format types for command results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::Person;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable feedback (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Feedback of one command plus the displayed list it left behind.
#[derive(Debug, Serialize)]
pub struct CommandOutput<'a> {
    pub feedback: &'a str,
    pub persons: Vec<&'a Person>,
}
