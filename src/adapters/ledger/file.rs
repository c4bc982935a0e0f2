//! File-backed dedup ledger
//!
//! Accepted references are appended to a JSON-lines file and reloaded on
//! start, so duplicate detection survives restarts. The in-memory set and the
//! file are updated under one lock.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::core::ports::DedupLedger;

/// One line of the ledger file
#[derive(Debug, Serialize, Deserialize)]
struct LedgerEntry {
    reference: String,
    accepted_at: String,
}

#[derive(Debug)]
struct State {
    references: HashSet<String>,
    file: File,
}

/// Append-only JSON-lines ledger
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    state: Mutex<State>,
}

impl FileLedger {
    /// Open (or create) a ledger file, loading previously accepted references
    ///
    /// Lines that fail to parse are skipped with a warning.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut references = HashSet::new();
        if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            for (index, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<LedgerEntry>(&line) {
                    Ok(entry) => {
                        references.insert(entry.reference);
                    },
                    Err(e) => {
                        log::warn!("{}:{}: skipping unreadable entry: {e}", path.display(), index + 1);
                    },
                }
            }
        }
        log::debug!("loaded {} reference(s) from {}", references.len(), path.display());

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            state: Mutex::new(State { references, file }),
        })
    }

    /// Location of the ledger file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DedupLedger for FileLedger {
    fn insert_if_absent(&self, reference: &str) -> anyhow::Result<bool> {
        let mut state = self.state();
        if state.references.contains(reference) {
            return Ok(false);
        }

        let entry = LedgerEntry {
            reference: reference.to_string(),
            accepted_at: chrono::Utc::now().to_rfc3339(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        if let Err(e) = state.file.write_all(line.as_bytes()).and_then(|()| state.file.flush()) {
            log::error!("failed to persist reference {reference} to {}: {e}", self.path.display());
            return Err(e.into());
        }

        state.references.insert(entry.reference);
        Ok(true)
    }

    fn contains(&self, reference: &str) -> anyhow::Result<bool> {
        Ok(self.state().references.contains(reference))
    }

    fn len(&self) -> usize {
        self.state().references.len()
    }
}
