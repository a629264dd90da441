//! Async model client for command interpretation
//!
//! An HTTP client for an OpenRouter-style chat-completions endpoint. The
//! model's only job here is translating one user command into one structured
//! [`Action`]; everything stateful (rate limiting, retries, backoff) lives on
//! this side of the wire.

use crate::command::action::Action;
use crate::core::config::ApiConfig;
use crate::core::error::{HubError, Result};
use crate::llm::rate_limit::RateLimiter;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a connection health probe, for status display only
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    pub success: bool,
    pub message: String,
}

/// Async model client for translating commands into actions
pub struct ModelClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_retries: u32,
    limiter: RateLimiter,
}

impl ModelClient {
    /// Create a client from configuration
    ///
    /// Fails with `NotConfigured` when no API key is present; the caller is
    /// expected to degrade to rule-based interpretation.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(HubError::NotConfigured)?;

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_retries: config.max_retries.max(1),
            limiter: RateLimiter::new(config.rate_limit_per_minute, config.rate_limit_per_day),
        })
    }

    /// Interpret a natural-language command via the model
    ///
    /// Transient failures (transport errors, throttling, 5xx) are retried up
    /// to `max_retries` attempts with linear backoff (1s, 2s, ...). Rate-limit
    /// failures from the local limiter propagate as-is and are never retried;
    /// malformed model output fails immediately.
    pub async fn interpret(&self, text: &str) -> Result<Action> {
        let text = text.trim();
        if text.is_empty() {
            return Err(HubError::EmptyInput);
        }

        let mut attempt = 1;
        loop {
            self.limiter.check_and_consume()?;

            match self.attempt(text).await {
                Ok(action) => return Ok(action),
                Err(err) if err.is_transient() => {
                    tracing::warn!("model call attempt {} failed: {}", attempt, err);
                    if attempt >= self.max_retries {
                        return Err(HubError::ModelCallFailed {
                            source: Box::new(err),
                        });
                    }
                    tokio::time::sleep(Duration::from_millis(1000 * u64::from(attempt))).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, text: &str) -> Result<Action> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: text.into(),
                },
            ],
            max_tokens: 1000,
            temperature: Some(0.1),
            top_p: Some(0.9),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Title", "AI Assistant Hub")
            .json(&request)
            .send()
            .await
            .map_err(|e| HubError::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(
                status.as_u16(),
                format!("API error {}: {}", status.as_u16(), body.trim()),
            ));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| HubError::MalformedOutput(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(HubError::MalformedOutput(
                "Empty response from OpenRouter API".into(),
            ));
        }

        parse_action(content)
    }

    /// One minimal round trip to report endpoint reachability
    ///
    /// Health display only: does not consume rate-limit budget and never
    /// gates `interpret`.
    pub async fn validate_connection(&self) -> ConnectionStatus {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".into(),
                content: "Hello".into(),
            }],
            max_tokens: 10,
            temperature: None,
            top_p: None,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Title", "AI Assistant Hub")
            .json(&request)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => ConnectionStatus {
                success: true,
                message: "Connection successful".into(),
            },
            Ok(resp) => ConnectionStatus {
                success: false,
                message: format!("Connection failed: {}", resp.status()),
            },
            Err(e) => ConnectionStatus {
                success: false,
                message: format!("Connection failed: {}", e),
            },
        }
    }

    /// Current (minute, day) rate-limit consumption
    pub fn request_counts(&self) -> (u32, u32) {
        self.limiter.counts()
    }
}

/// Classify a non-success HTTP status
///
/// Throttling and the retryable server errors are transient; everything else
/// fails immediately. Classification is structural (by status code), never by
/// sniffing message text.
fn classify_status(status: u16, detail: String) -> HubError {
    match status {
        429 | 500 | 502 | 503 => HubError::Transient(detail),
        _ => HubError::Api(detail),
    }
}

/// Parse model output into an action, tolerating markdown fencing
fn parse_action(content: &str) -> Result<Action> {
    let cleaned = strip_code_fences(content);
    serde_json::from_str(&cleaned).map_err(|e| HubError::MalformedOutput(e.to_string()))
}

/// Strip triple-backtick fencing (```json ... ``` or bare ``` ... ```)
fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// System prompt carrying the action schema and a few-shot example
const SYSTEM_PROMPT: &str = r#"You are an AI assistant that converts natural language commands into structured JSON actions for a web application.

## Actions
- navigate: Switch pages. "target" is one of: dashboard, users, bots, commands
- add_user: Create a user with fields: name, email, role (Admin|User|Viewer), department
- create_bot: Create new bot with fields: name, description, type, selectionCriteria, isActive
- fill_form: Populate the currently open form with fields
- error: The command cannot be mapped to an action; explain why in "message"

## Bot Types Available
- Customer Service: For handling customer inquiries and support
- Recruitment: For candidate selection and hiring processes
- Technical Support: For technical issue resolution
- Email Assistant: For email management and communication
- General Assistant: For general purpose tasks

## Response Format
Return ONLY valid JSON (no markdown):

{
  "action": "create_bot",
  "target": "bots",
  "fields": {
    "name": "extracted_bot_name",
    "description": "extracted_description",
    "type": "appropriate_bot_type",
    "isActive": true,
    "selectionCriteria": []
  },
  "message": "Creating bot with specified details"
}

## Example
Input: "create a bot with name emailsender that will send emails to employees"
Output: {"action": "create_bot", "target": "bots", "fields": {"name": "emailsender", "description": "will send emails to employees", "type": "Email Assistant", "isActive": true, "selectionCriteria": []}, "message": "Creating email assistant bot named 'emailsender'"}

Extract exact names and descriptions from user input. Infer appropriate bot types based on functionality described."#;

// OpenRouter chat-completions wire format
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
