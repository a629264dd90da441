//! Rule-based command interpretation
//!
//! A deterministic keyword classifier that maps raw text onto the same
//! [`Action`] schema the model produces, without any network call. This is
//! the degraded mode used whenever no API key is configured.
//!
//! Rules are tested in a fixed priority order; a phrase mentioning both
//! "user" and "bot" resolves to the user branch because that branch is
//! tested first. Keyword checks run on a lowercased copy of the input while
//! the extraction patterns run case-insensitively against the original text,
//! so captured names and emails keep the user's casing.

use crate::command::action::Action;
use crate::core::types::{BotDraft, BotType, UserDraft, UserRole};
use once_cell::sync::Lazy;
use regex::Regex;

static USER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)named?\s+([a-zA-Z\s]+?)(?:\s+with|\s+email|$)").unwrap());
static USER_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)email\s+(\S+)").unwrap());
static USER_ROLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)role\s+(admin|user|viewer)").unwrap());
static BOT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bot\s+named\s+([a-zA-Z0-9]+)").unwrap());
// "email assistant" is deliberately absent: with no type keyword matched the
// draft falls back to General Assistant, and email-flavored bots only get the
// Email Assistant type from the model path.
static BOT_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(customer service|recruitment|technical support|general assistant)").unwrap()
});

/// Interpret a command without the model
///
/// Pure and total: identical input always yields a structurally identical
/// Action, and unmatched input yields an error Action rather than a failure.
pub fn interpret(text: &str) -> Action {
    let trimmed = text.trim();
    let input = trimmed.to_lowercase();

    if input.contains("dashboard") || input.contains("home") {
        return Action::navigate("dashboard", "Navigating to dashboard");
    }

    if input.contains("user") {
        if input.contains("add") || input.contains("create") {
            let name = USER_NAME
                .captures(trimmed)
                .map(|c| c[1].trim().to_string())
                .unwrap_or_default();
            let email = USER_EMAIL
                .captures(trimmed)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            let role = USER_ROLE
                .captures(trimmed)
                .and_then(|c| UserRole::parse(&c[1]))
                .unwrap_or_default();

            return Action::AddUser {
                fields: Some(UserDraft {
                    name,
                    email,
                    role,
                    department: String::new(),
                }),
                message: Some("Adding new user".into()),
            };
        }
        return Action::navigate("users", "Navigating to users page");
    }

    if input.contains("bot") {
        if input.contains("create") || input.contains("add") {
            let name = BOT_NAME
                .captures(trimmed)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            let bot_type = BOT_TYPE
                .captures(trimmed)
                .and_then(|c| BotType::parse(&c[1]))
                .unwrap_or_default();

            return Action::CreateBot {
                fields: Some(BotDraft {
                    name: Some(name),
                    description: Some(String::new()),
                    bot_type: Some(bot_type),
                    selection_criteria: Some(Vec::new()),
                    is_active: Some(true),
                }),
                message: Some("Creating new bot".into()),
            };
        }
        return Action::navigate("bots", "Navigating to bots page");
    }

    if input.contains("command") {
        return Action::navigate("commands", "Navigating to AI command center");
    }

    Action::error("Sorry, I couldn't understand that command. Please try again.")
}
