//! Tests for configuration loading and the backends it selects

use std::fs;

use swiftguard::ValidationService;
use swiftguard::config::{LedgerKind, ServiceConfig};
use swiftguard::core::models::MessageKind;
use swiftguard::Field;
use tempfile::TempDir;

use super::common::valid_message;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("swiftguard.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8080

[[compliance.sanctions]]
name = "Syria"
code = "SY"

[compliance.business_hours]
start_hour = 8
"#,
    )
    .unwrap();

    let config = ServiceConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.compliance.sanctions.len(), 1);
    let hours = config.compliance.business_hours.unwrap();
    assert_eq!((hours.start_hour, hours.end_hour, hours.weekdays_only), (8, 17, true));
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = ServiceConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_invalid_toml_fails() {
    assert!(ServiceConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
}

// =============================================================================
// LEDGER
// =============================================================================

#[test]
fn test_file_ledger_survives_restart() {
    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("var").join("refs.jsonl");
    let mut config = ServiceConfig::default();
    config.ledger.kind = LedgerKind::File;
    config.ledger.path = ledger_path.clone();

    let first = ValidationService::from_config(&config).unwrap();
    assert!(first.validate(&valid_message("P1")).unwrap().valid);
    drop(first);

    let second = ValidationService::from_config(&config).unwrap();
    assert_eq!(second.ledger().len(), 1);
    assert!(!second.validate(&valid_message("P1")).unwrap().valid);
    assert!(ledger_path.exists());
}

// =============================================================================
// SCHEMA
// =============================================================================

#[test]
fn test_external_json_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strict.json");
    fs::write(
        &path,
        r#"{
  "title": "MT103 strict",
  "version": "2",
  "field": [
    { "name": "transactionReference", "required": true, "pattern": "^[A-Z0-9]{1,16}$" },
    { "name": "remittanceInfo", "required": true }
  ]
}"#,
    )
    .unwrap();

    let mut config = ServiceConfig::default();
    config.schema.path = Some(path);
    let service = ValidationService::from_config(&config).unwrap();

    let verdict = service.validate(":20:lower-case").unwrap();
    assert!(!verdict.valid);
    assert!(verdict.errors[0].targets(Field::RemittanceInfo));
    assert!(verdict.errors[1].targets(Field::TransactionReference));
}

#[test]
fn test_external_toml_schema_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "title = \"x\"\nversion = \"1\"\n\n[[field]]\nname = \"amount\"\n").unwrap();

    let mut config = ServiceConfig::default();
    config.schema.path = Some(path);
    assert!(ValidationService::from_config(&config).is_err());
}

// =============================================================================
// GENERATOR
// =============================================================================

#[test]
fn test_template_generator_selected_by_default() {
    let generator = ServiceConfig::default().message_generator().unwrap();
    assert_eq!(generator.name(), "template");

    let service = ValidationService::in_memory();
    let verdict = service.validate(&generator.generate(MessageKind::Valid).unwrap()).unwrap();
    assert!(verdict.valid);
}
