//! Output formatting for human and JSON modes
//!
//! Verdicts and generated messages can be rendered either as human-readable
//! text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{MessageKind, ValidationVerdict, VerdictStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Render a verdict based on output mode
pub fn render_verdict(verdict: &ValidationVerdict, mode: OutputMode) {
    match mode {
        OutputMode::Human => print!("{}", format_verdict(verdict)),
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(verdict).unwrap_or_default());
        },
    }
}

/// Human-readable verdict
#[must_use]
pub fn format_verdict(verdict: &ValidationVerdict) -> String {
    let mut out = String::new();
    let badge = match verdict.status {
        VerdictStatus::Success => "ACCEPTED".green().bold(),
        VerdictStatus::Failed => "FAILED".red().bold(),
        VerdictStatus::Blocked => "BLOCKED".magenta().bold(),
    };
    let _ = writeln!(out, "{badge}  trace {}  at {}", verdict.trace_id, verdict.timestamp);

    if verdict.data.is_empty() {
        let _ = writeln!(out, "\nNo recognized fields.");
    } else {
        let _ = writeln!(out, "\nFields:");
        for (field, value) in verdict.data.iter() {
            let mut lines = value.lines();
            let first = lines.next().unwrap_or_default();
            let _ = writeln!(out, "  {:<25} {first}", field.name());
            for line in lines {
                let _ = writeln!(out, "  {:<25} {line}", "");
            }
        }
    }

    if !verdict.errors.is_empty() {
        let _ = writeln!(out, "\nErrors:");
        for error in &verdict.errors {
            match &error.instance_path {
                Some(path) => {
                    let _ = writeln!(out, "  - {} ({})", error.message, path.dimmed());
                },
                None => {
                    let _ = writeln!(out, "  - {}", error.message);
                },
            }
        }
    }
    out
}

/// A generated sample message
#[derive(Debug, Serialize)]
pub struct GeneratedMessage {
    /// Requested kind
    pub kind: MessageKind,
    /// Backend that produced it
    pub generator: String,
    /// Raw message text
    pub message: String,
}

impl GeneratedMessage {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
