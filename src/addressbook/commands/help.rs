//! Usage text for every command, shared by `help` and by the
//! invalid-format messages the other commands return.

use crate::commands::{CmdMessage, CmdResult};

pub struct Usage {
    pub word: &'static str,
    pub description: &'static str,
    pub parameters: Option<&'static str>,
    pub example: &'static str,
}

impl Usage {
    pub fn block(&self) -> String {
        let mut out = format!("{}: {}", self.word, self.description);
        if let Some(params) = self.parameters {
            out.push_str(&format!("\n\tParameters: {}", params));
        }
        out.push_str(&format!("\n\tExample: {}", self.example));
        out
    }
}

pub const ADD: Usage = Usage {
    word: "add",
    description: "Adds a person to the address book.",
    parameters: Some("NAME p/PHONE_NUMBER e/EMAIL"),
    example: "add John Doe p/98765432 e/johnd@gmail.com",
};

pub const FIND: Usage = Usage {
    word: "find",
    description: "Finds all persons whose names contain any of the specified keywords \
                  (case-sensitive) and displays them as a list with index numbers.",
    parameters: Some("KEYWORD [MORE_KEYWORDS]"),
    example: "find alice bob charlie",
};

pub const LIST: Usage = Usage {
    word: "list",
    description: "Displays all persons as a list with index numbers.",
    parameters: None,
    example: "list",
};

pub const DELETE: Usage = Usage {
    word: "delete",
    description: "Deletes a person identified by the index number used in the last find/list call.",
    parameters: Some("INDEX"),
    example: "delete 1",
};

pub const CLEAR: Usage = Usage {
    word: "clear",
    description: "Clears address book permanently.",
    parameters: None,
    example: "clear",
};

pub const HELP: Usage = Usage {
    word: "help",
    description: "Shows program usage instructions.",
    parameters: None,
    example: "help",
};

pub const EXIT: Usage = Usage {
    word: "exit",
    description: "Exits the program.",
    parameters: None,
    example: "exit",
};

pub const ALL: [&Usage; 7] = [&ADD, &FIND, &LIST, &DELETE, &CLEAR, &EXIT, &HELP];

pub fn all_blocks() -> String {
    ALL.iter()
        .map(|u| u.block())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The message returned when `word` was given arguments it cannot use.
pub fn invalid_format(word: &str, usage: &str) -> CmdMessage {
    CmdMessage::error(format!("Invalid command format: {} \n{}", word, usage))
}

pub fn run() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(all_blocks()))
}
