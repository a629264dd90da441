//! Assistant Hub - Entry Point
//!
//! Interactive shell for the natural-language command pipeline. Reads
//! commands from stdin, interprets them (model-backed when an API key is
//! configured, rule-based otherwise), and applies the resulting actions to
//! an in-memory application state that stands in for the UI layer.

use assistant_hub::command::{Action, ActionExecutor, Capabilities, CommandInterpreter};
use assistant_hub::core::config::Config;
use assistant_hub::core::error::Result;
use assistant_hub::core::types::{Bot, UserDraft};

use clap::Parser;
use std::cell::RefCell;
use std::io::{self, Write};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Natural language command shell for the assistant hub
#[derive(Parser, Debug)]
#[command(name = "assistant-hub")]
#[command(about = "Type commands in plain language; they become application actions")]
struct Args {
    /// Interpret a single command, apply it, and exit
    #[arg(long)]
    command: Option<String>,

    /// Enable debug logging regardless of DEBUG_MODE
    #[arg(long)]
    debug: bool,
}

/// In-memory stand-in for the application the commands drive
#[derive(Debug, Default)]
struct HubState {
    current_page: String,
    users: Vec<UserRecord>,
    bots: Vec<BotRecord>,
}

#[derive(Debug)]
struct UserRecord {
    id: Uuid,
    user: UserDraft,
}

#[derive(Debug)]
struct BotRecord {
    id: Uuid,
    bot: Bot,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    let filter = if args.debug || config.app.debug {
        "assistant_hub=debug"
    } else {
        "assistant_hub=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = config.validate() {
        tracing::warn!("configuration problem: {}", e);
    }
    for var in config.missing_vars() {
        tracing::warn!("{} not set - using rule-based command parsing", var);
    }

    // Async runtime for the model calls
    let rt = Runtime::new()?;
    let interpreter = CommandInterpreter::new(&config);

    let state = RefCell::new(HubState {
        current_page: "dashboard".into(),
        ..HubState::default()
    });

    if let Some(command) = args.command {
        let action = rt.block_on(interpreter.interpret(&command));
        apply_action(&action, &state);
        return Ok(());
    }

    println!("\n=== {} ===", config.app.name);
    println!("Type commands in plain language, for example:");
    println!("  go to dashboard");
    println!("  add a user named Jane Doe with email jane@corp.test role admin");
    println!("  create a bot named Helper");
    println!();
    println!("Shell commands:");
    println!("  status / s      - Show application state and API status");
    println!("  check           - Probe the model endpoint");
    println!("  quit / q        - Exit");
    if interpreter.has_model() {
        println!("\nModel-backed interpretation is active.");
    } else {
        println!("\nNo API key configured - using rule-based interpretation.");
    }
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "status" || input == "s" {
            display_status(&interpreter, &state.borrow());
            continue;
        }
        if input == "check" {
            let status = rt.block_on(interpreter.validate_connection());
            println!("{}", status.message);
            continue;
        }

        let action = rt.block_on(interpreter.interpret(input));
        apply_action(&action, &state);
    }

    let state = state.borrow();
    println!(
        "\nGoodbye! Final state: {} user(s), {} bot(s).",
        state.users.len(),
        state.bots.len()
    );
    Ok(())
}

/// Apply one interpreted action to the shell's state
fn apply_action(action: &Action, state: &RefCell<HubState>) {
    tracing::debug!("executing {} action", action.kind());

    let mut caps = Capabilities {
        navigate: Box::new(|page| {
            state.borrow_mut().current_page = page.to_string();
            println!("-> now on the {} page", page);
        }),
        add_user: Some(Box::new(|fields: &UserDraft| {
            let record = UserRecord {
                id: Uuid::new_v4(),
                user: fields.clone(),
            };
            println!("-> added user '{}' ({})", record.user.name, record.user.role);
            state.borrow_mut().users.push(record);
        })),
        create_bot: Some(Box::new(|bot: Bot| {
            println!("-> created {} bot '{}'", bot.bot_type, bot.name);
            state.borrow_mut().bots.push(BotRecord {
                id: Uuid::new_v4(),
                bot,
            });
        })),
    };

    ActionExecutor::execute(action, &mut caps);
    drop(caps);

    // The message is surfaced for every action kind, error included
    if let Some(message) = action.message() {
        println!("{}", message);
    }
}

fn display_status(interpreter: &CommandInterpreter, state: &HubState) {
    let status = interpreter.status();

    println!("Current page: {}", state.current_page);
    println!("Users ({}):", state.users.len());
    for record in &state.users {
        println!(
            "  - {} <{}> [{}] ({})",
            record.user.name, record.user.email, record.user.role, record.id
        );
    }
    println!("Bots ({}):", state.bots.len());
    for record in &state.bots {
        println!(
            "  - {} [{}] active={} ({})",
            record.bot.name, record.bot.bot_type, record.bot.is_active, record.id
        );
    }
    println!(
        "API: initialized={} key={} requests={}/min {}/day",
        status.initialized, status.has_api_key, status.minute_count, status.day_count
    );
}
