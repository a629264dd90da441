//! Action execution - dispatches interpreted actions to capability callbacks

use crate::command::action::Action;
use crate::core::types::{Bot, UserDraft};

/// Caller-supplied side-effect callbacks
///
/// `navigate` is always available; the entity-creating callbacks are
/// optional, mirroring callers that render a page with no create handlers
/// wired up.
pub struct Capabilities<'a> {
    pub navigate: Box<dyn FnMut(&str) + 'a>,
    pub add_user: Option<Box<dyn FnMut(&UserDraft) + 'a>>,
    pub create_bot: Option<Box<dyn FnMut(Bot) + 'a>>,
}

/// Performs at most one capability call per action
pub struct ActionExecutor;

impl ActionExecutor {
    /// Execute a structured action against the supplied capabilities
    ///
    /// Dispatch is total: unknown-to-this-layer action kinds (`fill_form`,
    /// `error`) do nothing here and are surfaced to the user by the caller.
    pub fn execute(action: &Action, caps: &mut Capabilities<'_>) {
        match action {
            Action::Navigate { target, .. } => {
                if let Some(target) = target {
                    (caps.navigate)(target);
                }
            }
            Action::AddUser { fields, .. } => {
                if let (Some(handler), Some(fields)) = (caps.add_user.as_mut(), fields) {
                    handler(fields);
                }
            }
            Action::CreateBot { fields, .. } => {
                if let (Some(handler), Some(fields)) = (caps.create_bot.as_mut(), fields) {
                    // Create the bot directly, no form round trip, then land
                    // on the bots page so the new entity is visible.
                    handler(Bot::from_draft(fields.clone()));
                    (caps.navigate)("bots");
                }
            }
            Action::FillForm { .. } | Action::Error { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BotDraft, BotType};
    use std::cell::RefCell;

    #[derive(Debug, Default, PartialEq)]
    struct Recorded {
        navigations: Vec<String>,
        users: Vec<UserDraft>,
        bots: Vec<Bot>,
    }

    fn run(action: &Action) -> Recorded {
        let recorded = RefCell::new(Recorded::default());
        let mut caps = Capabilities {
            navigate: Box::new(|page| recorded.borrow_mut().navigations.push(page.to_string())),
            add_user: Some(Box::new(|fields| {
                recorded.borrow_mut().users.push(fields.clone())
            })),
            create_bot: Some(Box::new(|bot| recorded.borrow_mut().bots.push(bot))),
        };
        ActionExecutor::execute(action, &mut caps);
        drop(caps);
        recorded.into_inner()
    }

    #[test]
    fn test_create_bot_invokes_handler_before_navigation() {
        let events = RefCell::new(Vec::new());
        let mut caps = Capabilities {
            navigate: Box::new(|page: &str| events.borrow_mut().push(format!("navigate:{}", page))),
            add_user: None,
            create_bot: Some(Box::new(|bot: Bot| {
                events.borrow_mut().push(format!("create_bot:{}", bot.name))
            })),
        };
        let action = Action::CreateBot {
            fields: Some(BotDraft {
                name: Some("Greeter".into()),
                ..BotDraft::default()
            }),
            message: None,
        };
        ActionExecutor::execute(&action, &mut caps);
        drop(caps);
        assert_eq!(
            events.into_inner(),
            vec!["create_bot:Greeter".to_string(), "navigate:bots".to_string()]
        );
    }

    #[test]
    fn test_navigate_dispatch() {
        let recorded = run(&Action::navigate("users", "Navigating to users page"));
        assert_eq!(recorded.navigations, vec!["users".to_string()]);
        assert!(recorded.users.is_empty());
        assert!(recorded.bots.is_empty());
    }

    #[test]
    fn test_navigate_without_target_is_noop() {
        let recorded = run(&Action::Navigate {
            target: None,
            message: Some("nowhere to go".into()),
        });
        assert_eq!(recorded, Recorded::default());
    }

    #[test]
    fn test_add_user_dispatch() {
        let action = Action::AddUser {
            fields: Some(UserDraft {
                name: "Jane".into(),
                ..UserDraft::default()
            }),
            message: None,
        };
        let recorded = run(&action);
        assert_eq!(recorded.users.len(), 1);
        assert_eq!(recorded.users[0].name, "Jane");
        assert!(recorded.navigations.is_empty());
    }

    #[test]
    fn test_add_user_without_fields_is_noop() {
        let recorded = run(&Action::AddUser {
            fields: None,
            message: None,
        });
        assert_eq!(recorded, Recorded::default());
    }

    #[test]
    fn test_add_user_without_handler_is_noop() {
        let navigations = RefCell::new(Vec::new());
        let mut caps = Capabilities {
            navigate: Box::new(|page: &str| navigations.borrow_mut().push(page.to_string())),
            add_user: None,
            create_bot: None,
        };
        let action = Action::AddUser {
            fields: Some(UserDraft::default()),
            message: None,
        };
        ActionExecutor::execute(&action, &mut caps);
        assert!(navigations.borrow().is_empty());
    }

    #[test]
    fn test_create_bot_fills_defaults_then_navigates() {
        let action = Action::CreateBot {
            fields: Some(BotDraft {
                name: Some("X".into()),
                ..BotDraft::default()
            }),
            message: None,
        };
        let recorded = run(&action);

        assert_eq!(recorded.bots.len(), 1);
        let bot = &recorded.bots[0];
        assert_eq!(bot.name, "X");
        assert_eq!(bot.description, "AI assistant bot");
        assert_eq!(bot.bot_type, BotType::GeneralAssistant);
        assert!(bot.selection_criteria.is_empty());
        assert!(bot.is_active);

        // Navigation to the bots page happens after creation, exactly once
        assert_eq!(recorded.navigations, vec!["bots".to_string()]);
    }

    #[test]
    fn test_create_bot_without_handler_skips_navigation() {
        let navigations = RefCell::new(Vec::new());
        let mut caps = Capabilities {
            navigate: Box::new(|page: &str| navigations.borrow_mut().push(page.to_string())),
            add_user: None,
            create_bot: None,
        };
        let action = Action::CreateBot {
            fields: Some(BotDraft::default()),
            message: None,
        };
        ActionExecutor::execute(&action, &mut caps);
        assert!(navigations.borrow().is_empty());
    }

    #[test]
    fn test_fill_form_and_error_dispatch_nothing() {
        let recorded = run(&Action::FillForm {
            fields: serde_json::Map::new(),
            message: None,
        });
        assert_eq!(recorded, Recorded::default());

        let recorded = run(&Action::error("could not understand"));
        assert_eq!(recorded, Recorded::default());
    }
}
