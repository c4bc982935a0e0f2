//! Print the effective field schema

use swiftguard::config::ServiceConfig;
use swiftguard::core::services::FieldValidator;
use swiftguard::output::OutputMode;

/// Print the schema the validator would use, after checking that it compiles
pub fn schema(config: &ServiceConfig, mode: OutputMode) -> anyhow::Result<()> {
    let schema = config.field_schema()?;
    FieldValidator::new(&schema)?;

    match mode {
        OutputMode::Human => print!("{}", schema.to_toml_string()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&schema)?),
    }
    Ok(())
}
