//! Text-generation provider tiers.
//!
//! Each external capability implements [`TextGenerator`]; the
//! [`chain::ProviderChain`] consults them in priority order and falls back
//! to the deterministic [`template::TemplateResponder`] when none yields
//! text. Provider failures never escape this module — the chain's fallback
//! guarantee is what keeps consultation turns from failing on upstream
//! outages.

pub mod chain;
pub mod huggingface;
pub mod template;
pub mod watson;

pub use chain::{ProviderChain, ProviderReply, TurnContext};
pub use huggingface::HuggingFaceClient;
pub use template::TemplateResponder;
pub use watson::WatsonxClient;

use crate::config::ProviderSettings;

/// Build the production chain from environment settings: Hugging Face
/// first, watsonx second, template fallback terminal.
pub fn chain_from_settings(settings: &ProviderSettings) -> ProviderChain {
    ProviderChain::new(vec![
        Box::new(HuggingFaceClient::new(
            settings.huggingface_token.clone(),
            settings.timeout_secs,
        )),
        Box::new(WatsonxClient::new(
            settings.watson_api_key.clone(),
            settings.watson_url.clone(),
            settings.timeout_secs,
        )),
    ])
}

/// Generation parameters forwarded to external providers.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub max_length: u32,
    pub temperature: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_length: 500,
            temperature: 0.7,
        }
    }
}

/// Failures internal to a single provider tier.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Credentials absent — distinct from a call that was made and failed.
    #[error("Provider is not configured")]
    NotConfigured,
    #[error("Cannot reach provider at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse provider response: {0}")]
    ResponseParsing(String),
    /// The call succeeded but post-processing left nothing usable.
    #[error("Provider returned an empty response")]
    EmptyResponse,
}

/// An external text-generation capability, consulted by the chain.
pub trait TextGenerator: Send + Sync {
    /// Stable identifier recorded as `provider_used` on accepted turns.
    fn label(&self) -> &'static str;

    /// Whether credentials/configuration are present. The chain skips
    /// unconfigured tiers without making a network call.
    fn is_configured(&self) -> bool;

    /// Produce text for the prompt, post-processed by the provider itself
    /// (echo stripping, trimming). Must not return an empty string.
    fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, ProviderError>;
}

/// Configurable test double for the chain and service tests.
pub struct MockGenerator {
    label: &'static str,
    configured: bool,
    outcome: Result<String, fn() -> ProviderError>,
}

impl MockGenerator {
    pub fn responding(label: &'static str, text: &str) -> Self {
        Self {
            label,
            configured: true,
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(label: &'static str, error: fn() -> ProviderError) -> Self {
        Self {
            label,
            configured: true,
            outcome: Err(error),
        }
    }

    pub fn unconfigured(label: &'static str) -> Self {
        Self {
            label,
            configured: false,
            outcome: Err(|| ProviderError::NotConfigured),
        }
    }
}

impl TextGenerator for MockGenerator {
    fn label(&self) -> &'static str {
        self.label
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn generate(&self, _prompt: &str, _options: &GenerateOptions) -> Result<String, ProviderError> {
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}
