//! Poem generator: glue between the compiler and the generation client.
//!
//! One [`PoemGenerator::compose`] call is one request: compile the
//! preferences, submit the instruction set as the complete single-shot
//! context, hand back the trimmed markdown text. No conversation history,
//! no state retained between calls; the credential lives inside the
//! provider and the result is an explicit return value.

use std::sync::Arc;

use tracing::{debug, info};

use crate::compiler::{compile, InstructionSet};
use crate::error::GenerationError;
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::preferences::PoemPreferences;

/// Generates poems from preference records through an [`LlmProvider`].
pub struct PoemGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl PoemGenerator {
    /// Create a generator backed by the given provider and model.
    ///
    /// An empty model string defers to the provider's default.
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature for generation requests.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the completion token cap for generation requests.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Compose a poem for the given preferences.
    ///
    /// Returns the model's markdown text, trimmed. By convention it begins
    /// with a `### <Title>` heading, but that is the model's promise to
    /// keep, not ours to enforce.
    pub async fn compose(&self, prefs: &PoemPreferences) -> Result<String, GenerationError> {
        let instructions = compile(prefs);
        debug!(
            directives = instructions.len(),
            model = %self.model,
            "Compiled poem preferences into instruction set"
        );

        let response = self
            .provider
            .generate(self.build_request(&instructions))
            .await?;

        let content = response
            .first_content()
            .ok_or(GenerationError::EmptyResponse)?;

        info!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Poem generated"
        );
        Ok(content.trim().to_string())
    }

    /// Wrap an instruction set as the complete request context: one system
    /// message carrying the directives, one empty user message, no history.
    fn build_request(&self, instructions: &InstructionSet) -> GenerationRequest {
        let mut request = GenerationRequest::new(
            self.model.clone(),
            vec![Message::system(instructions.as_prompt()), Message::user("")],
        );
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }
}
