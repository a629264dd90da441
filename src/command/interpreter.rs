//! Command interpretation façade
//!
//! Chooses the model-backed interpreter when one is configured and the
//! rule-based fallback otherwise, and converts every failure into an error
//! Action. Callers only ever inspect the returned Action; no failure
//! escapes this layer.
//!
//! A configured-but-failing model surfaces as an error Action rather than
//! silently cascading to the fallback, so a broken model path stays visible.

use crate::command::action::Action;
use crate::command::fallback;
use crate::core::config::Config;
use crate::llm::client::{ConnectionStatus, ModelClient};

/// Snapshot of interpreter health for the status surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterStatus {
    pub initialized: bool,
    pub has_api_key: bool,
    pub minute_count: u32,
    pub day_count: u32,
}

/// Entry point for turning raw text into a structured action
pub struct CommandInterpreter {
    model: Option<ModelClient>,
    has_api_key: bool,
}

impl CommandInterpreter {
    /// Build an interpreter from configuration
    ///
    /// A missing API key is not fatal; the interpreter degrades to
    /// rule-based parsing.
    pub fn new(config: &Config) -> Self {
        let has_api_key = config.api.api_key.is_some();
        let model = match ModelClient::new(&config.api) {
            Ok(client) => {
                tracing::debug!("model client initialized for {}", config.api.model);
                Some(client)
            }
            Err(e) => {
                tracing::warn!("model not available, using rule-based parsing: {}", e);
                None
            }
        };

        Self { model, has_api_key }
    }

    /// Interpret a command; always resolves to an Action
    pub async fn interpret(&self, text: &str) -> Action {
        if text.trim().is_empty() {
            return Action::error("Please enter a command");
        }

        match &self.model {
            Some(client) => match client.interpret(text).await {
                Ok(action) => action.or_message("Command processed successfully"),
                Err(e) => Action::error(e.to_string()),
            },
            None => fallback::interpret(text),
        }
    }

    /// Probe the model endpoint for the health display
    pub async fn validate_connection(&self) -> ConnectionStatus {
        match &self.model {
            Some(client) => client.validate_connection().await,
            None => ConnectionStatus {
                success: false,
                message: "API client not initialized. Please check your configuration.".into(),
            },
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn status(&self) -> InterpreterStatus {
        let (minute_count, day_count) = self
            .model
            .as_ref()
            .map(|c| c.request_counts())
            .unwrap_or((0, 0));

        InterpreterStatus {
            initialized: self.model.is_some(),
            has_api_key: self.has_api_key,
            minute_count,
            day_count,
        }
    }
}
