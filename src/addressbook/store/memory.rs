use super::DataStore;
use crate::error::{AddressBookError, Result};
use crate::model::Person;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    persons: Vec<Person>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Number of successful saves so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn load_persons(&self) -> Result<Vec<Person>> {
        Ok(self.persons.clone())
    }

    fn save_persons(&mut self, persons: &[Person]) -> Result<()> {
        if self.fail_writes {
            return Err(AddressBookError::StorageWrite {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::other("writes disabled"),
            });
        }
        self.persons = persons.to_vec();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_persons(mut self, count: usize) -> Self {
            for i in 0..count {
                let person = Person::new(
                    format!("Person {}", i + 1),
                    format!("{}", 1000 + i),
                    format!("person{}@example.com", i + 1),
                )
                .unwrap();
                self.store.persons.push(person);
            }
            self
        }

        pub fn with_person(mut self, name: &str, phone: &str, email: &str) -> Self {
            self.store
                .persons
                .push(Person::new(name, phone, email).unwrap());
            self
        }

        /// Make every subsequent save fail, as a full disk would.
        pub fn failing_writes(mut self) -> Self {
            self.store.fail_writes = true;
            self
        }
    }
}
