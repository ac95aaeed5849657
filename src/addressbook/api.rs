//! # API Facade
//!
//! [`AddressBookApi`] is the command dispatcher and the single owner of the
//! session state: the book itself, the listing view that display indexes
//! refer to, and the storage backend. A UI builds one instance at startup and
//! feeds it one command line at a time.
//!
//! ## Write-through
//!
//! Every command that modifies the book is followed by a full rewrite of the
//! store. If that write fails, the in-memory change is rolled back before the
//! error is returned, so memory and storage never disagree. Write failures
//! are fatal for the caller; the API itself never exits the process.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, help, CmdMessage, CmdResult, Command};
use crate::error::Result;
use crate::index::ListingView;
use crate::store::DataStore;
use log::{debug, error, info};

pub struct AddressBookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    view: ListingView,
}

impl<S: DataStore> AddressBookApi<S> {
    /// Loads every contact from `store`. Any undecodable entry fails the whole
    /// load. The listing view starts out as the full book.
    pub fn open(store: S) -> Result<Self> {
        let persons = store.load_persons()?;
        info!(
            "event=book_open module=api status=ok count={}",
            persons.len()
        );
        Ok(Self {
            view: ListingView::new(persons.clone()),
            book: AddressBook::from_persons(persons),
            store,
        })
    }

    /// Parses and runs one command line. Blank and comment lines are the
    /// caller's business and should not reach this point.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        self.dispatch(Command::parse(line))
    }

    pub fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        let word = command.word().to_string();
        let before = command.is_mutating().then(|| self.book.snapshot_all());

        let result = match command {
            Command::Add(args) => commands::add::run(&mut self.book, &args),
            Command::Find(args) => commands::find::run(&self.book, &mut self.view, &args),
            Command::List => commands::list::run(&self.book, &mut self.view),
            Command::Delete(args) => commands::delete::run(&mut self.book, &self.view, &args),
            Command::Clear => commands::clear::run(&mut self.book),
            Command::Help => help::run(),
            Command::Exit => CmdResult::default()
                .with_message(CmdMessage::info("Exiting Address Book... Good bye!"))
                .exiting(),
            Command::Unknown(word) => {
                CmdResult::default().with_message(help::invalid_format(&word, &help::all_blocks()))
            }
        };

        if result.modified {
            if let Err(err) = self.store.save_persons(self.book.persons()) {
                if let Some(previous) = before {
                    self.book.replace_all(previous);
                }
                error!("event=persist module=api status=error command={word} error={err}");
                return Err(err);
            }
            info!(
                "event=persist module=api status=ok command={} affected={} count={}",
                word,
                result.affected_persons.len(),
                self.book.len()
            );
            for person in &result.affected_persons {
                debug!("event=person_changed module=api command={word} person=\"{person}\"");
            }
        }

        debug!(
            "event=command_executed module=api command={} modified={} listed={}",
            word,
            result.modified,
            result.listed_persons.len()
        );
        Ok(result)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn view(&self) -> &ListingView {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
