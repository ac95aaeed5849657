//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the contact list is persisted so the
//! API and command layers can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one encoded contact per line
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! John Doe p/98765432 e/johnd@gmail.com
//! Betsy Crowe e/betsycrowe@example.com p/1234567
//! ```
//!
//! Every line must decode (see [`crate::codec`]). A single bad line fails the
//! whole load: there is no partial recovery. Writes always replace the entire
//! file.

use crate::error::Result;
use crate::model::Person;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read and decode every stored contact, in file order.
    fn load_persons(&self) -> Result<Vec<Person>>;

    /// Replace the stored contacts with `persons`.
    fn save_persons(&mut self, persons: &[Person]) -> Result<()>;
}
