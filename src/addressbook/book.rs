//! The authoritative, ordered collection of contacts.
//!
//! Insertion order is preserved and duplicates are allowed. The book knows
//! nothing about persistence: the API layer writes it out after every
//! mutating command.

use crate::model::Person;
use std::collections::HashSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_persons(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn append(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Removes the first entry equal to `person`. Returns `false` when there
    /// was nothing to remove.
    pub fn remove_exact(&mut self, person: &Person) -> bool {
        match self.persons.iter().position(|p| p == person) {
            Some(pos) => {
                self.persons.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    pub fn replace_all(&mut self, persons: Vec<Person>) {
        self.persons = persons;
    }

    pub fn snapshot_all(&self) -> Vec<Person> {
        self.persons.clone()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Every person whose name shares at least one whole word with
    /// `keywords`, in book order. Matching is case-sensitive.
    pub fn find_by_keywords(&self, keywords: &HashSet<&str>) -> Vec<Person> {
        self.persons
            .iter()
            .filter(|p| p.name_tokens().any(|token| keywords.contains(token)))
            .cloned()
            .collect()
    }
}
