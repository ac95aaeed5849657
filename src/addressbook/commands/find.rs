use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::index::ListingView;
use std::collections::HashSet;

use super::list::show;

pub fn run(book: &AddressBook, view: &mut ListingView, args: &str) -> CmdResult {
    let keywords: HashSet<&str> = args.split_whitespace().collect();
    show(book.find_by_keywords(&keywords), view)
}
