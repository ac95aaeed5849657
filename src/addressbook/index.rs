//! # Display Indexes
//!
//! Users refer to contacts by the number printed next to them in the most
//! recent `list` or `find` output, not by their position in the book. The
//! [`ListingView`] remembers that output so `delete 2` means "the second
//! person I was shown".
//!
//! The view is a snapshot. Deleting or clearing contacts does not renumber it,
//! so an index can point at a person who is no longer in the book until the
//! next `list` or `find` refreshes the view. Callers must check that the
//! resolved person still exists before acting on it.

use crate::model::Person;
use std::fmt;
use thiserror::Error;

/// A 1-based position in the listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_offset(offset: usize) -> Self {
        Self(offset + 1)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPerson {
    pub index: DisplayIndex,
    pub person: Person,
}

/// Numbers `persons` from 1 in the order given.
pub fn index_persons(persons: &[Person]) -> Vec<DisplayPerson> {
    persons
        .iter()
        .enumerate()
        .map(|(offset, person)| DisplayPerson {
            index: DisplayIndex::from_offset(offset),
            person: person.clone(),
        })
        .collect()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("index {index} is outside 1..={len}")]
    OutOfRange { index: i64, len: usize },
}

/// Parses the argument of an index-taking command. Any integer is accepted
/// here; range checks belong to [`ListingView::resolve`].
pub fn parse_display_index(input: &str) -> Result<i64, IndexError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| IndexError::NotANumber(trimmed.to_string()))
}

#[derive(Debug, Default, Clone)]
pub struct ListingView {
    entries: Vec<Person>,
}

impl ListingView {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { entries: persons }
    }

    pub fn set_view(&mut self, persons: Vec<Person>) {
        self.entries = persons;
    }

    pub fn resolve(&self, display_index: i64) -> Result<&Person, IndexError> {
        let out_of_range = || IndexError::OutOfRange {
            index: display_index,
            len: self.entries.len(),
        };
        let offset = usize::try_from(display_index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(out_of_range)?;
        self.entries.get(offset).ok_or_else(out_of_range)
    }

    pub fn entries(&self) -> &[Person] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
