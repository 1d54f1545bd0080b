//! Runs a sequence of command lines and renders their results.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::warn;

use super::output::{CommandOutput, Output, OutputFormat};
use crate::logic::LogicManager;
use crate::model::Model;

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Executes each line against `logic`, writing results to `out` and
/// errors to `err`.
///
/// Blank lines are skipped. The session stops after an `exit` command or
/// when the lines run out. A failing command is reported and the session
/// carries on with the next line.
pub fn handle_session<M, I, W, E>(
    logic: &mut LogicManager<M>,
    lines: I,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<SessionSummary>
where
    M: Model,
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
    E: Write,
{
    let mut summary = SessionSummary::default();

    for line in lines {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        summary.executed += 1;

        match logic.execute(&line) {
            Ok(result) => {
                render(logic, result.feedback_to_user(), format, out)?;
                if result.is_exit() {
                    break;
                }
            }
            Err(e) => {
                warn!(command = %line, error = %e, "command failed");
                summary.failed += 1;
                writeln!(err, "error: {e}")?;
            }
        }
    }

    Ok(summary)
}

fn render<M: Model, W: Write>(
    logic: &LogicManager<M>,
    feedback: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{feedback}")?,
        OutputFormat::Json => {
            let output = Output::new(CommandOutput {
                feedback,
                persons: logic.filtered_person_list(),
            });
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        }
    }
    Ok(())
}
