use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::index::{index_persons, ListingView};
use crate::model::Person;

pub fn run(book: &AddressBook, view: &mut ListingView) -> CmdResult {
    show(book.snapshot_all(), view)
}

/// Numbers `persons` for display and makes them the current listing view.
pub(super) fn show(persons: Vec<Person>, view: &mut ListingView) -> CmdResult {
    let listed = index_persons(&persons);
    let count = listed.len();
    view.set_view(persons);

    CmdResult::default()
        .with_listed_persons(listed)
        .with_message(CmdMessage::info(format!("{} persons found!", count)))
}
