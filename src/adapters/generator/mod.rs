//! Message generator implementations
//!
//! - [`TemplateGenerator`] - Offline templates (default)
//! - `ChatCompletionGenerator` - OpenAI-compatible chat API (feature `llm`)

#[cfg(feature = "llm")]
mod chat;
mod template;

#[cfg(feature = "llm")]
pub use chat::{ChatCompletionGenerator, strip_code_fences};
pub use template::TemplateGenerator;
