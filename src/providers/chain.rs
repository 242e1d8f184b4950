//! Ordered provider fallback.
//!
//! Tiers are consulted in priority order; every tier failure is swallowed
//! and logged here, and the deterministic template tier terminates the
//! chain. Callers therefore always receive text — upstream unavailability
//! can degrade response quality, never fail a turn.

use crate::models::{Patient, Specialization};

use super::template::{TemplateResponder, TEMPLATE_FALLBACK_LABEL};
use super::{GenerateOptions, TextGenerator};

/// Everything the template tier needs to answer when the external tiers
/// yield nothing.
pub struct TurnContext<'a> {
    pub patient: &'a Patient,
    pub specialization: Specialization,
    pub symptoms: &'a [String],
    pub message: &'a str,
}

/// Accepted text plus the label of the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub text: String,
    pub provider: String,
}

/// Priority-ordered provider tiers ending in the template responder.
pub struct ProviderChain {
    tiers: Vec<Box<dyn TextGenerator>>,
    fallback: TemplateResponder,
    options: GenerateOptions,
}

impl ProviderChain {
    pub fn new(tiers: Vec<Box<dyn TextGenerator>>) -> Self {
        Self {
            tiers,
            fallback: TemplateResponder::new(),
            options: GenerateOptions::default(),
        }
    }

    /// A chain with no external tiers — every turn answers from the
    /// template. This is the demo-mode configuration.
    pub fn template_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of configured external tiers.
    pub fn configured_tiers(&self) -> usize {
        self.tiers.iter().filter(|t| t.is_configured()).count()
    }

    /// Resolve a response for the prompt, degrading tier by tier.
    ///
    /// Never fails: provider errors are logged and swallowed, and the
    /// template tier always answers.
    pub fn respond(&self, prompt: &str, context: &TurnContext<'_>) -> ProviderReply {
        for tier in &self.tiers {
            if !tier.is_configured() {
                tracing::debug!(provider = tier.label(), "Skipping unconfigured provider");
                continue;
            }

            match tier.generate(prompt, &self.options) {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!(provider = tier.label(), "Provider produced response");
                    return ProviderReply {
                        text,
                        provider: tier.label().to_string(),
                    };
                }
                Ok(_) => {
                    tracing::warn!(provider = tier.label(), "Provider returned blank text");
                }
                Err(e) => {
                    tracing::warn!(provider = tier.label(), error = %e, "Provider failed");
                }
            }
        }

        tracing::info!("No external provider yielded text, using template fallback");
        ProviderReply {
            text: self.fallback.respond(
                context.specialization,
                context.symptoms,
                context.message,
                context.patient,
            ),
            provider: TEMPLATE_FALLBACK_LABEL.to_string(),
        }
    }
}
