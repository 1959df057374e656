//! Chat session orchestration
//!
//! One `send` call drives the full tool loop for a user turn: query the
//! model with the transcript plus the frozen tool catalog, execute any
//! requested tools, feed the results back, and repeat until the model
//! answers with text (or with nothing). An explicit loop with a round cap
//! replaces the original recursive re-entry, so long sessions cannot grow
//! the call stack.

use std::sync::Arc;

use thiserror::Error;

use crate::logging::Logger;
use crate::provider::{ChatOptions, Provider, ProviderError, ProviderModelConfig};
use crate::tools::{ToolCatalog, ToolExecutor};
use crate::transcript::Transcript;

/// Default cap on tool rounds within a single user turn
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 8;

/// Errors surfaced to the caller of `send`
///
/// These are loop-local: the session stays usable after any of them, and the
/// transcript keeps whatever was appended before the failing step.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Tool round limit reached after {0} rounds")]
    ToolRoundLimit(usize),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// A chat session: transcript, frozen tool catalog, and the loop over them
pub struct ChatSession {
    provider: Arc<dyn Provider>,
    executor: Arc<dyn ToolExecutor>,
    catalog: ToolCatalog,
    transcript: Transcript,
    model: ProviderModelConfig,
    options: ChatOptions,
    logger: Arc<dyn Logger>,
    max_tool_rounds: usize,
}

impl ChatSession {
    /// Create a session over an empty transcript
    pub fn new(
        provider: Arc<dyn Provider>,
        executor: Arc<dyn ToolExecutor>,
        catalog: ToolCatalog,
        model: ProviderModelConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            provider,
            executor,
            catalog,
            transcript: Transcript::new(),
            model,
            options: ChatOptions::default(),
            logger,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    /// Seed the transcript with a system prompt
    pub fn with_system(mut self, prompt: impl Into<String>) -> Self {
        self.transcript = Transcript::with_system(prompt);
        self
    }

    /// Set base chat options (temperature, max tokens)
    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the tool round cap
    pub fn with_max_tool_rounds(mut self, rounds: usize) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    /// Handle one user input to completion
    ///
    /// Returns the model's final text, or `None` for a reply that carried
    /// neither text nor tool calls. On error the appends made before the
    /// failing step remain in the transcript.
    pub async fn send(&mut self, input: &str) -> SessionResult<Option<String>> {
        self.transcript.push_user(input);

        let mut rounds = 0;
        loop {
            let reply = self.query_model().await?;

            if reply.has_tool_calls() {
                rounds += 1;
                if rounds > self.max_tool_rounds {
                    self.logger.warn(&format!(
                        "[ChatSession] Giving up after {} tool rounds",
                        self.max_tool_rounds
                    ));
                    return Err(SessionError::ToolRoundLimit(self.max_tool_rounds));
                }

                for call in &reply.tool_calls {
                    self.logger
                        .info(&format!("[ChatSession] Calling tool {}", call.name));
                }

                // Marker turn and result turn are appended pairwise: a
                // failed call shows up as an error result, never as an
                // orphaned marker.
                self.transcript.push_tool_markers(&reply.tool_calls);
                let results = self.executor.execute_all(&reply.tool_calls).await;
                self.transcript.push_tool_results(&reply.tool_calls, &results);
                continue;
            }

            if let Some(text) = reply.text {
                self.transcript.push_assistant(&text);
                return Ok(Some(text));
            }

            // Neither text nor calls: a no-op turn, nothing appended
            self.logger.debug("[ChatSession] Model returned an empty turn");
            return Ok(None);
        }
    }

    async fn query_model(&self) -> SessionResult<crate::provider::ModelReply> {
        let mut options = self.options.clone();
        if !self.catalog.is_empty() {
            options = options.with_tools(self.catalog.tools().to_vec());
        }

        let reply = self
            .provider
            .complete(
                self.transcript.messages().to_vec(),
                self.model.clone(),
                options,
            )
            .await?;
        Ok(reply)
    }

    /// The conversation so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The frozen tool catalog
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }
}
