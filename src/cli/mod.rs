pub mod console;
pub mod context;
pub mod contact_commands;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::ContactResult;
use crate::store::ContactStore;
use console::Severity;
use context::CLIContext;

const MENU: &str = "\
===============================================
           Professional Contact List App
===============================================
1. Add Contact
2. View All Contacts
3. Search Contact
4. Delete Contact
5. Exit
===============================================";

const FAREWELL: &str = "\nThank you for using Contact List App. Goodbye!";

/// What the loop does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Input ended mid-command.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Delete,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Only the exact tokens "1" through "5" are choices; no trimming.
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::View,
            "3" => MenuChoice::Search,
            "4" => MenuChoice::Delete,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Run the interactive menu on stdin/stdout with a fresh, empty store.
pub fn run(config: Config) -> ContactResult<()> {
    let stdin = io::stdin();
    let mut ctx = CLIContext::new(ContactStore::new(), stdin.lock(), io::stdout(), config);
    repl_loop(&mut ctx)
}

/// Show the menu and dispatch until "5" is chosen or input ends.
pub fn repl_loop<R: BufRead, W: Write>(ctx: &mut CLIContext<R, W>) -> ContactResult<()> {
    loop {
        ctx.console.line(MENU)?;
        let input = match ctx.console.read_line("\nSelect an option (1-5): ")? {
            Some(s) => s,
            None => break,
        };

        let choice = MenuChoice::parse(&input);
        debug!(?choice, "menu choice");

        let step = match choice {
            MenuChoice::Add => contact_commands::add(ctx)?,
            MenuChoice::View => contact_commands::view(ctx)?,
            MenuChoice::Search => contact_commands::search(ctx)?,
            MenuChoice::Delete => contact_commands::delete(ctx)?,
            MenuChoice::Exit => break,
            MenuChoice::Invalid => {
                ctx.console.say(Severity::Error, "Invalid option! Try again.")?;
                Step::Continue
            }
        };

        if step == Step::Quit || !ctx.console.pause_and_clear()? {
            break;
        }
    }

    ctx.console.line(FAREWELL)?;
    info!(contacts = ctx.store.len(), "session ended");
    Ok(())
}
