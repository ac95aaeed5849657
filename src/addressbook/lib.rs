//! # Addressbook Architecture
//!
//! Addressbook is a line-oriented contact manager. The library holds all of
//! the behaviour; the binary is a thin read-eval-print loop around it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Startup, input loop, comment/blank-line skipping         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ one command line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the book, the listing view and the store            │
//! │  - Dispatches to commands, writes through after mutations   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over AddressBook + ListingView                │
//! │  - Returns CmdResult, never performs I/O                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/ + codec.rs)                          │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! │  - One `NAME p/PHONE e/EMAIL` line per contact              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display indexes
//!
//! `delete N` refers to the N-th person of the last `list` or `find` output,
//! not to a position in the book. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The dispatcher and session state
//! - [`commands`]: Business logic for each command
//! - [`book`]: The ordered contact collection
//! - [`index`]: Listing view and display indexes
//! - [`codec`]: Line encoding of a contact
//! - [`model`]: The validated `Person` type
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration and application paths
//! - [`logging`]: File logging setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
