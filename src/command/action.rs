//! Structured actions produced by command interpretation
//!
//! An [`Action`] is the sole output of interpreting a natural-language
//! command, whether the interpretation came from the model or from the
//! rule-based fallback. The wire shape is a JSON object tagged by an
//! `"action"` key; everything a variant has no field for (the model also
//! emits `options` and `sequence` keys) is ignored at parse time, so the
//! executor never has to ignore it again.

use crate::core::types::{BotDraft, UserDraft};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured application action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Switch the application to another page
    Navigate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Create a user from the extracted attributes
    AddUser {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<UserDraft>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Create a bot from the extracted attributes
    CreateBot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<BotDraft>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Populate the currently-open form; consumed by the UI, not the executor
    FillForm {
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        fields: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Interpretation failed; `message` is shown to the user verbatim
    Error { message: String },
}

impl Action {
    pub fn error(message: impl Into<String>) -> Self {
        Action::Error {
            message: message.into(),
        }
    }

    pub fn navigate(target: impl Into<String>, message: impl Into<String>) -> Self {
        Action::Navigate {
            target: Some(target.into()),
            message: Some(message.into()),
        }
    }

    /// The wire tag for this action kind
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::AddUser { .. } => "add_user",
            Action::CreateBot { .. } => "create_bot",
            Action::FillForm { .. } => "fill_form",
            Action::Error { .. } => "error",
        }
    }

    /// The human-readable explanation, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Action::Navigate { message, .. }
            | Action::AddUser { message, .. }
            | Action::CreateBot { message, .. }
            | Action::FillForm { message, .. } => message.as_deref(),
            Action::Error { message } => Some(message),
        }
    }

    /// Fill in `message` when the interpretation left it out
    ///
    /// Error actions always carry their own message and are returned
    /// unchanged.
    pub fn or_message(mut self, default: &str) -> Self {
        match &mut self {
            Action::Navigate { message, .. }
            | Action::AddUser { message, .. }
            | Action::CreateBot { message, .. }
            | Action::FillForm { message, .. } => {
                if message.is_none() {
                    *message = Some(default.to_string());
                }
            }
            Action::Error { .. } => {}
        }
        self
    }
}
