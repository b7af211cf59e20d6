//! Interactive session over an address book.

use super::command::Command;
use crate::config::Config;
use crate::error::ShellResult;
use crate::models::{AddressBook, PhoneOutcome, Record};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session.
///
/// The session owns the address book and its I/O handles; the book lives
/// exactly as long as the session does.
pub struct Session<R, W> {
    book: AddressBook,
    input: R,
    output: W,
    show_menu: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty address book.
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            input,
            output,
            show_menu: config.show_menu,
        }
    }

    /// The session's address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Consume the session, returning the book and the output handle.
    pub fn into_parts(self) -> (AddressBook, W) {
        (self.book, self.output)
    }

    /// Run commands until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Io` if reading or writing fails. Validation
    /// failures are reported to the user and never end the session.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            if self.show_menu {
                self.print_menu()?;
            }

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("End of input, closing session");
                return Ok(());
            };

            let flow = match choice.parse::<Command>() {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(
                        self.output,
                        "Invalid choice. Please choose from the available commands."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: Command) -> ShellResult<Flow> {
        debug!(%command, "Dispatching command");
        match command {
            Command::Add => self.add_contact(),
            Command::Search => self.search_contact(),
            Command::Delete => self.delete_contact(),
            Command::Edit => self.edit_contact(),
            Command::Show => self.show_contacts(),
            Command::Exit => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        writeln!(self.output, "\nAvailable commands:")?;
        for (i, command) in Command::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} - {}",
                i + 1,
                command.keyword(),
                command.description()
            )?;
        }
        Ok(())
    }

    /// Print `message`, then read one trimmed line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than ending the session.
    fn prompt(&mut self, message: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8, invalid bytes replaced");
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_contact(&mut self) -> ShellResult<Flow> {
        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter contact phone number: ")? else {
            return Ok(Flow::Exit);
        };

        let mut record = match Record::new(name) {
            Ok(record) => record,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        // A bad phone is reported but the contact is still added.
        if let PhoneOutcome::Rejected(e) = record.add_phone(&phone) {
            writeln!(self.output, "{}", e)?;
        }

        info!(contact = %record.name(), "Contact added");
        self.book.add_record(record);
        writeln!(self.output, "Contact added.")?;
        Ok(Flow::Continue)
    }

    fn search_contact(&mut self) -> ShellResult<Flow> {
        let Some(name) = self.prompt("Enter contact name to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.book.find(&name) {
            Some(record) => writeln!(self.output, "{}", record)?,
            None => writeln!(self.output, "Contact not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> ShellResult<Flow> {
        let Some(name) = self.prompt("Enter contact name to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if self.book.delete(&name) {
            info!(contact = %name, "Contact deleted");
            writeln!(self.output, "Contact deleted.")?;
        } else {
            writeln!(self.output, "Contact not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn edit_contact(&mut self) -> ShellResult<Flow> {
        let Some(name) = self.prompt("Enter contact name to edit: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter new phone number: ")? else {
            return Ok(Flow::Exit);
        };

        match self.book.edit_phone(&name, &phone) {
            Ok(true) => {
                info!(contact = %name, "Phone number updated");
                writeln!(self.output, "Phone number updated.")?;
            }
            Ok(false) => writeln!(self.output, "Contact not found.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_contacts(&mut self) -> ShellResult<Flow> {
        if self.book.is_empty() {
            writeln!(self.output, "Address book is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Address book contents:")?;
        for record in self.book.iter() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(Flow::Continue)
    }
}
