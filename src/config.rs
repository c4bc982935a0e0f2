//! Service configuration
//!
//! Loaded from TOML. An explicit `--config` path must exist; otherwise
//! `swiftguard.toml` in the working directory is used when present, and
//! built-in defaults apply when it is not.
//!
//! ```toml
//! [server]
//! port = 1934
//!
//! [ledger]
//! kind = "file"
//! path = "var/references.jsonl"
//!
//! [[compliance.sanctions]]
//! name = "Syria"
//! code = "SY"
//!
//! [compliance.business_hours]
//! start_hour = 9
//! end_hour = 17
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adapters::{FileLedger, InMemoryLedger, TemplateGenerator};
use crate::core::models::FieldSchema;
use crate::core::ports::{DedupLedger, MessageGenerator};
use crate::core::services::ComplianceRules;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "swiftguard.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP binding
    #[serde(default)]
    pub server: ServerConfig,
    /// Field schema source
    #[serde(default)]
    pub schema: SchemaConfig,
    /// Dedup ledger store
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Compliance rules
    #[serde(default)]
    pub compliance: ComplianceRules,
    /// Sample message generator
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// HTTP binding settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    1934
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the field schema comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// External schema file (TOML, or JSON by extension); built-in MT103 if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Dedup ledger backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    /// Process-lifetime set
    #[default]
    Memory,
    /// JSON-lines file
    File,
}

/// Dedup ledger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Backend
    #[serde(default)]
    pub kind: LedgerKind,
    /// File used by the `file` backend
    #[serde(default = "default_ledger_path")]
    pub path: PathBuf,
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("swiftguard-ledger.jsonl")
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            kind: LedgerKind::default(),
            path: default_ledger_path(),
        }
    }
}

/// Sample message backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Offline templates
    #[default]
    Template,
    /// OpenAI-compatible chat API (requires the `llm` feature)
    Chat,
}

/// Sample message generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Backend
    #[serde(default)]
    pub kind: GeneratorKind,
    /// Chat API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "openai/gpt-oss-120b".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::default(),
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration
    ///
    /// With `Some(path)` the file must exist. With `None`, falls back to
    /// [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {e}", path.display()))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The effective field schema
    pub fn field_schema(&self) -> anyhow::Result<FieldSchema> {
        match &self.schema.path {
            Some(path) => Ok(FieldSchema::load(path)?),
            None => Ok(FieldSchema::mt103()),
        }
    }

    /// Open the configured dedup ledger
    pub fn open_ledger(&self) -> anyhow::Result<Arc<dyn DedupLedger>> {
        Ok(match self.ledger.kind {
            LedgerKind::Memory => Arc::new(InMemoryLedger::new()),
            LedgerKind::File => Arc::new(FileLedger::open(&self.ledger.path)?),
        })
    }

    /// Build the configured message generator
    pub fn message_generator(&self) -> anyhow::Result<Box<dyn MessageGenerator>> {
        match self.generator.kind {
            GeneratorKind::Template => Ok(Box::new(TemplateGenerator::new())),
            GeneratorKind::Chat => self.chat_generator(),
        }
    }

    #[cfg(feature = "llm")]
    fn chat_generator(&self) -> anyhow::Result<Box<dyn MessageGenerator>> {
        let api_key = std::env::var(&self.generator.api_key_env).ok();
        Ok(Box::new(crate::adapters::generator::ChatCompletionGenerator::new(
            &self.generator.base_url,
            &self.generator.model,
            api_key,
        )?))
    }

    #[cfg(not(feature = "llm"))]
    fn chat_generator(&self) -> anyhow::Result<Box<dyn MessageGenerator>> {
        anyhow::bail!("generator kind \"chat\" requires swiftguard built with the `llm` feature")
    }
}
