use super::render::{
    print_banner, print_closing, print_divider, print_farewell, print_fatal, print_lines,
    render_result, LINE_PREFIX,
};
use super::setup::Cli;
use addressbook::api::AddressBookApi;
use addressbook::config::{AddressBookConfig, AppPaths};
use addressbook::error::Result;
use addressbook::logging::init_logging;
use addressbook::store::fs::FileStore;
use addressbook::store::DataStore;
use clap::Parser;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const COMMENT_MARKER: char = '#';

/// Runs a whole session. Every fatal error is printed to the user before it
/// is returned; the caller only turns it into an exit status.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_banner(&mut out)?;

    let mut api = match start(&mut out, &cli) {
        Ok(api) => api,
        Err(err) => {
            print_fatal(&mut out, &err)?;
            return Err(err);
        }
    };

    let stdin = io::stdin();
    run_session(&mut api, stdin.lock(), &mut out)
}

fn start<W: Write>(out: &mut W, cli: &Cli) -> Result<AddressBookApi<FileStore>> {
    let paths = AppPaths::discover()?;
    let config = AddressBookConfig::load(&paths.home)?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(err) = init_logging(level, &paths.log_dir()) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    open_api(out, cli, &config)
}

fn open_api<W: Write>(
    out: &mut W,
    cli: &Cli,
    config: &AddressBookConfig,
) -> Result<AddressBookApi<FileStore>> {
    let path: PathBuf = match &cli.storage_file {
        Some(path) => path.clone(),
        None if config.uses_default_storage_file() => {
            print_lines(
                out,
                &format!("Using default storage file : {}", config.storage_file.display()),
            )?;
            config.storage_file.clone()
        }
        None => {
            print_lines(
                out,
                &format!("Using configured storage file : {}", config.storage_file.display()),
            )?;
            config.storage_file.clone()
        }
    };

    let store = FileStore::new(path)?;
    if store.ensure_exists()? {
        let shown = store.path().display();
        print_lines(out, &format!("Storage file missing: {}", shown))?;
        print_lines(out, &format!("Created new empty storage file: {}", shown))?;
    }

    AddressBookApi::open(store)
}

/// Blank lines and `#` comments are skipped without being echoed.
fn is_command_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

fn next_command<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    for line in lines {
        let line = line?;
        if is_command_line(&line) {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

/// Reads commands until `exit` or end of input. A fatal error is printed
/// before it is returned.
fn run_session<S, R, W>(api: &mut AddressBookApi<S>, input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}Enter command: ", LINE_PREFIX)?;
        out.flush()?;

        let line = match next_command(&mut lines) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                info!("event=session_end module=cli reason=eof");
                print_farewell(out)?;
                return Ok(());
            }
            Err(err) => {
                writeln!(out)?;
                warn!("event=session_end module=cli reason=input error={}", err);
                print_fatal(out, &err)?;
                return Err(err);
            }
        };
        print_lines(out, &format!("[Command entered:{}]", line))?;

        let result = match api.execute(&line) {
            Ok(result) => result,
            Err(err) => {
                warn!("event=session_end module=cli reason=fatal error={}", err);
                print_fatal(out, &err)?;
                return Err(err);
            }
        };
        render_result(out, &result)?;

        if result.exit_requested {
            info!("event=session_end module=cli reason=exit");
            print_closing(out)?;
            return Ok(());
        }
        print_divider(out)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addressbook::error::AddressBookError;
    use addressbook::store::memory::InMemoryStore;

    fn session(input: &str) -> (AddressBookApi<InMemoryStore>, String) {
        colored::control::set_override(false);
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        let mut out = Vec::new();
        run_session(&mut api, input.as_bytes(), &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(is_command_line("list"));
        assert!(is_command_line("  add x"));
        assert!(!is_command_line(""));
        assert!(!is_command_line("   \t"));
        assert!(!is_command_line("  # a note"));
    }

    #[test]
    fn runs_commands_until_exit() {
        let (api, out) = session(
            "# setup\n\nadd John Doe p/98765432 e/johnd@gmail.com\nlist\nexit\nadd Never p/1 e/a@b.com\n",
        );

        assert_eq!(api.book().len(), 1);
        assert!(out.contains("|| [Command entered:add John Doe p/98765432 e/johnd@gmail.com]"));
        assert!(out.contains("|| New person added: John Doe, Phone: 98765432, Email: johnd@gmail.com"));
        assert!(out.contains("|| \t1. John Doe  Phone Number: 98765432  Email: johnd@gmail.com"));
        assert!(out.contains("|| 1 persons found!"));
        assert!(out.contains("Exiting Address Book... Good bye!"));
        assert!(!out.contains("[Command entered:# setup]"));
        assert!(!out.contains("Never"));
    }

    #[test]
    fn end_of_input_says_goodbye() {
        let (_api, out) = session("list\n");
        assert!(out.contains("Exiting Address Book... Good bye!"));
    }

    #[test]
    fn unreadable_input_ends_with_framed_farewell() {
        colored::control::set_override(false);
        let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
        let mut out = Vec::new();
        let input: &[u8] = b"list\n\xff\xfe\nadd Bob p/1 e/a@b.com\n";

        let err = run_session(&mut api, input, &mut out).unwrap_err();
        let out = String::from_utf8(out).unwrap();

        assert!(matches!(err, AddressBookError::Io(_)));
        assert!(out.contains("[Command entered:list]"));
        assert!(out.contains("Exiting Address Book... Good bye!"));
        assert!(api.book().is_empty());
    }

    #[test]
    fn recoverable_errors_keep_the_session_alive() {
        let (api, out) = session("delete 1\nadd Bob p/abc e/a@b.com\nadd Bob p/1 e/a@b.com\n");
        assert!(out.contains("The person index provided is invalid"));
        assert!(out.contains("Invalid command format: add"));
        assert_eq!(api.book().len(), 1);
    }
}
