//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages the application can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Users,
    Bots,
    Commands,
}

impl Page {
    /// The page identifier used on the wire and by navigation callbacks
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Bots => "bots",
            Page::Commands => "commands",
        }
    }

    /// Parse a navigation target; unknown targets resolve to None
    pub fn parse(target: &str) -> Option<Self> {
        match target {
            "dashboard" => Some(Page::Dashboard),
            "users" => Some(Page::Users),
            "bots" => Some(Page::Bots),
            "commands" => Some(Page::Commands),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User role enumeration shared by the interpretation and execution layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
            UserRole::Viewer => "Viewer",
        }
    }

    /// Parse a role keyword as extracted from command text (any casing)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            "viewer" => Some(UserRole::Viewer),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bot type enumeration shared by the interpretation and execution layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BotType {
    #[serde(rename = "Customer Service")]
    CustomerService,
    Recruitment,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Email Assistant")]
    EmailAssistant,
    #[default]
    #[serde(rename = "General Assistant")]
    GeneralAssistant,
}

impl BotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotType::CustomerService => "Customer Service",
            BotType::Recruitment => "Recruitment",
            BotType::TechnicalSupport => "Technical Support",
            BotType::EmailAssistant => "Email Assistant",
            BotType::GeneralAssistant => "General Assistant",
        }
    }

    /// Parse a bot type phrase as extracted from command text (any casing)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "customer service" => Some(BotType::CustomerService),
            "recruitment" => Some(BotType::Recruitment),
            "technical support" => Some(BotType::TechnicalSupport),
            "email assistant" => Some(BotType::EmailAssistant),
            "general assistant" => Some(BotType::GeneralAssistant),
            _ => None,
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User attributes extracted from a command
///
/// Required-field validation happens in the consumer that persists the
/// user, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: String,
}

/// Bot attributes extracted from a command, all optional
///
/// A draft is completed into a [`Bot`] by the executor, which fills
/// defaults for anything the command left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub bot_type: Option<BotType>,
    #[serde(
        default,
        rename = "selectionCriteria",
        skip_serializing_if = "Option::is_none"
    )]
    pub selection_criteria: Option<Vec<String>>,
    #[serde(default, rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A fully-specified bot record, ready to hand to the create-bot callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub bot_type: BotType,
    #[serde(rename = "selectionCriteria")]
    pub selection_criteria: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Bot {
    /// Complete a draft, filling defaults for missing attributes
    pub fn from_draft(draft: BotDraft) -> Self {
        Self {
            name: draft
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "NewBot".to_string()),
            description: draft
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "AI assistant bot".to_string()),
            bot_type: draft.bot_type.unwrap_or_default(),
            selection_criteria: draft.selection_criteria.unwrap_or_default(),
            is_active: draft.is_active.unwrap_or(true),
        }
    }
}
