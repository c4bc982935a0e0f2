//! Validate a message from a file or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::{DateTime, Utc};

use swiftguard::config::ServiceConfig;
use swiftguard::output::{OutputMode, render_verdict};
use swiftguard::service::ValidationService;

/// Validate one message; exits with status 1 when it is not accepted
pub fn validate(
    config: &ServiceConfig,
    input: Option<&str>,
    at: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let submitted_at = match at {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map_err(|e| anyhow::anyhow!("Invalid --at time '{value}': {e}"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let service = ValidationService::from_config(config)?;
    let verdict = service.validate_at(&raw, submitted_at)?;
    render_verdict(&verdict, mode);

    if !verdict.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> anyhow::Result<String> {
    let bytes = match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        },
        Some(path) => fs::read(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to read {path}: {e}"))?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
