//! Chat-completion generator
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint (Groq,
//! DeepSeek, OpenAI). Falls back to [`TemplateGenerator`] when no API key is
//! configured or the request fails.

use serde::{Deserialize, Serialize};

use super::TemplateGenerator;
use crate::core::models::MessageKind;
use crate::core::ports::MessageGenerator;

const VALID_PROMPT: &str = "Generate a valid SWIFT MT103 message using strict SWIFT tags.\n\
Mandatory tags: :20:, :23B:, :32A:, :50K:, :59:, :71A:.\n\
Output only the message content, no markdown, no explanations.\n\
Example format:\n\
:20:REF12345\n:23B:CRED\n:32A:230101USD1000,\n:50K:ORDERING CUST\nADDRESS LINE\n\
:59:BENEFICIARY\nADDRESS LINE\n:71A:OUR";

const INVALID_PROMPT: &str = "Generate an INVALID SWIFT MT103 message that omits the mandatory \
tags :23B: and :71A:. Output only the message content, no markdown.";

const SANCTIONED_PROMPT: &str = "Generate a structurally valid SWIFT MT103 message with tags \
:20:, :23B:, :32A:, :50K:, :59:, :71A: whose beneficiary address is in North Korea. Output \
only the message content, no markdown.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Generator backed by an OpenAI-compatible chat API
#[derive(Debug)]
pub struct ChatCompletionGenerator {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    model: String,
    api_key: Option<String>,
    fallback: TemplateGenerator,
}

impl ChatCompletionGenerator {
    /// Create a generator; `api_key` of `None` always uses the fallback
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            fallback: TemplateGenerator::new(),
        })
    }

    async fn complete(&self, api_key: &str, prompt: &str) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 1.0,
        };
        let response: ChatResponse = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .unwrap_or_default();
        Ok(strip_code_fences(&text))
    }
}

/// Remove markdown code fences a model may wrap its output in
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```swift", "").replace("```", "").trim().to_string()
}

impl MessageGenerator for ChatCompletionGenerator {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn generate(&self, kind: MessageKind) -> anyhow::Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!("no API key configured; using template {kind} message");
            return Ok(self.fallback.render(kind));
        };

        let prompt = match kind {
            MessageKind::Valid => VALID_PROMPT,
            MessageKind::Invalid => INVALID_PROMPT,
            MessageKind::Sanctioned => SANCTIONED_PROMPT,
        };

        match self.runtime.block_on(self.complete(api_key, prompt)) {
            Ok(text) if !text.is_empty() => Ok(text),
            Ok(_) => {
                log::warn!("{} returned an empty message; using template", self.model);
                Ok(self.fallback.render(kind))
            },
            Err(e) => {
                log::error!("chat generation with {} failed: {e}", self.model);
                Ok(self.fallback.render(kind))
            },
        }
    }
}
