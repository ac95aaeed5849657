//! # CLI Layer
//!
//! One possible UI for the library: an interactive loop over stdin. This is
//! the only code that prints, reads stdin, or decides the exit status.
//!
//! - `setup.rs`: clap argument definitions and version string
//! - `commands.rs`: startup sequence and the read-eval-print loop
//! - `render.rs`: turning `CmdResult`s and errors into terminal lines

mod commands;
mod render;
mod setup;

pub use commands::run;
