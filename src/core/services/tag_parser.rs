//! Tag parser - turns raw MT103 text into a [`ParsedRecord`]
//!
//! Parsing is total: any input, including empty strings and binary noise,
//! yields a (possibly empty) record. Deciding whether the record is
//! acceptable is left to the validator and the compliance gate.
//!
//! Rules, applied line by line after trimming:
//!
//! 1. `:CODE:` at line start is a tag line. Recognized tags become the
//!    current field and store the rest of the line (overwriting any earlier
//!    value). Unrecognized tags clear the current field.
//! 2. Any other line continues the current field, provided it already has a
//!    value. Envelope punctuation (lines starting with `{`, `}` or `-`) is
//!    dropped; blank lines are kept as empty continuation lines.
//! 3. Lines seen with no current field are dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Field, ParsedRecord};

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[A-Za-z0-9]+:").expect("tag pattern is valid"));

/// Parse a raw message into a record
#[must_use]
pub fn parse(raw: &str) -> ParsedRecord {
    let mut record = ParsedRecord::new();
    let mut current: Option<Field> = None;

    for line in raw.lines().map(str::trim) {
        if let Some(tag) = TAG_LINE.find(line) {
            current = Field::from_tag(tag.as_str());
            if let Some(field) = current {
                record.set(field, line[tag.end()..].trim());
            }
            continue;
        }

        let Some(field) = current else {
            continue;
        };
        if is_envelope_noise(line) {
            continue;
        }
        record.append_line(field, line);
    }

    log::debug!("parsed {} field(s) from {} byte(s)", record.len(), raw.len());
    record
}

fn is_envelope_noise(line: &str) -> bool {
    line.starts_with(['{', '}', '-'])
}
