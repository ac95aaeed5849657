//! The binary only calls into `cli::run()` and turns its outcome into an exit
//! status. Fatal errors have already been shown to the user by then.

mod cli;

fn main() {
    let code = match cli::run() {
        Ok(()) => 0,
        Err(_) => 1,
    };
    addressbook::logging::flush_logging();
    std::process::exit(code);
}
