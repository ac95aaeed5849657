use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

/// Empties the book. The listing view is left alone, so earlier display
/// indexes now resolve to people who are gone.
pub fn run(book: &mut AddressBook) -> CmdResult {
    let removed = book.snapshot_all();
    book.clear();
    CmdResult::default()
        .with_message(CmdMessage::success("Address book has been cleared!"))
        .with_affected_persons(removed)
        .modified()
}
