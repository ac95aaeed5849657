//! # Command Layer
//!
//! One module per command. Each `run` function takes the pieces of state it
//! needs, applies the command, and describes what happened in a
//! [`CmdResult`]. Commands never touch storage: a result with `modified` set
//! tells the API layer to write the book out.
//!
//! Malformed input is not an error at this layer. It produces a result whose
//! messages explain the problem, and the book is left as it was.

use crate::index::DisplayPerson;
use crate::model::Person;

pub mod add;
pub mod clear;
pub mod delete;
pub mod find;
pub mod help;
pub mod list;

/// A parsed command line: the first word picks the command, the rest of the
/// line is handed to it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Find(String),
    List,
    Delete(String),
    Clear,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, args) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        match word {
            "add" => Command::Add(args.to_string()),
            "find" => Command::Find(args.to_string()),
            "list" => Command::List,
            "delete" => Command::Delete(args.to_string()),
            "clear" => Command::Clear,
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn word(&self) -> &str {
        match self {
            Command::Add(_) => help::ADD.word,
            Command::Find(_) => help::FIND.word,
            Command::List => help::LIST.word,
            Command::Delete(_) => help::DELETE.word,
            Command::Clear => help::CLEAR.word,
            Command::Help => help::HELP.word,
            Command::Exit => help::EXIT.word,
            Command::Unknown(word) => word,
        }
    }

    /// Whether the command may change the book and so needs a write.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Delete(_) | Command::Clear)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_persons: Vec<Person>,
    pub listed_persons: Vec<DisplayPerson>,
    pub messages: Vec<CmdMessage>,
    /// The book changed and must be persisted.
    pub modified: bool,
    /// The user asked to leave.
    pub exit_requested: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_persons(mut self, persons: Vec<Person>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<DisplayPerson>) -> Self {
        self.listed_persons = persons;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit_requested = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_word_from_verbatim_arguments() {
        assert_eq!(
            Command::parse("add   John  Doe p/1 e/a@b.com"),
            Command::Add("John  Doe p/1 e/a@b.com".into())
        );
        assert_eq!(Command::parse("find"), Command::Find(String::new()));
        assert_eq!(Command::parse("delete\t2"), Command::Delete("2".into()));
    }

    #[test]
    fn ignores_arguments_of_argumentless_commands() {
        assert_eq!(Command::parse("list everything"), Command::List);
        assert_eq!(Command::parse("clear now"), Command::Clear);
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert_eq!(Command::parse("LIST"), Command::Unknown("LIST".into()));
        assert_eq!(Command::parse("Add x"), Command::Unknown("Add".into()));
    }

    #[test]
    fn only_add_delete_and_clear_mutate() {
        assert!(Command::parse("add x").is_mutating());
        assert!(Command::parse("delete 1").is_mutating());
        assert!(Command::parse("clear").is_mutating());
        assert!(!Command::parse("list").is_mutating());
        assert!(!Command::parse("find x").is_mutating());
        assert!(!Command::parse("help").is_mutating());
        assert!(!Command::parse("nope").is_mutating());
    }

    #[test]
    fn word_round_trips() {
        assert_eq!(Command::parse("delete 3").word(), "delete");
        assert_eq!(Command::parse("frobnicate 3").word(), "frobnicate");
    }
}
