//! Menu commands.

use crate::error::UnknownCommand;
use std::fmt;
use std::str::FromStr;

/// A command the user can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Search,
    Delete,
    Edit,
    Show,
    Exit,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 6] = [
        Command::Add,
        Command::Search,
        Command::Delete,
        Command::Edit,
        Command::Show,
        Command::Exit,
    ];

    /// The keyword the user types.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Search => "search",
            Command::Delete => "delete",
            Command::Edit => "edit",
            Command::Show => "show",
            Command::Exit => "exit",
        }
    }

    /// One-line description shown in the menu.
    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add a new contact",
            Command::Search => "Search for a contact",
            Command::Delete => "Delete a contact",
            Command::Edit => "Edit a contact's phone number",
            Command::Show => "Show all contacts",
            Command::Exit => "Exit the program",
        }
    }
}

/// Parses a menu choice: surrounding whitespace is ignored, case does not matter.
impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim().to_lowercase();
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.keyword() == choice)
            .ok_or_else(|| UnknownCommand(s.trim().to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
