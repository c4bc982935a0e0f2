//! Generate a sample message

use swiftguard::config::ServiceConfig;
use swiftguard::core::models::MessageKind;
use swiftguard::output::{GeneratedMessage, OutputMode};

/// Print one generated message of the requested kind
pub fn generate(config: &ServiceConfig, kind: MessageKind, mode: OutputMode) -> anyhow::Result<()> {
    let generator = config.message_generator()?;
    log::debug!("generating {kind} message with {}", generator.name());

    let message = generator.generate(kind)?;
    GeneratedMessage {
        kind,
        generator: generator.name().to_string(),
        message,
    }
    .render(mode);
    Ok(())
}
