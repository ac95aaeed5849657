//! Every line the session prints starts with [`LINE_PREFIX`]. Multi-line
//! messages are split so each physical line carries the prefix.

use super::setup::version_banner;
use addressbook::commands::{CmdMessage, CmdResult, MessageLevel};
use addressbook::error::AddressBookError;
use addressbook::index::DisplayPerson;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

pub const LINE_PREFIX: &str = "|| ";
pub const DIVIDER: &str = "===================================================";
const GOODBYE: &str = "Exiting Address Book... Good bye!";

pub(super) fn print_lines<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for line in text.lines() {
        writeln!(out, "{}{}", LINE_PREFIX, line)?;
    }
    Ok(())
}

pub(super) fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let version = version_banner();
    for line in [DIVIDER, DIVIDER, version.as_str(), "Welcome to your Address Book!", DIVIDER] {
        print_lines(out, line)?;
    }
    Ok(())
}

pub(super) fn print_divider<W: Write>(out: &mut W) -> io::Result<()> {
    print_lines(out, DIVIDER)
}

pub(super) fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    print_lines(out, GOODBYE)?;
    print_closing(out)
}

pub(super) fn print_closing<W: Write>(out: &mut W) -> io::Result<()> {
    print_lines(out, DIVIDER)?;
    print_lines(out, DIVIDER)
}

/// Reports an error that ends the session.
pub(super) fn print_fatal<W: Write>(out: &mut W, err: &AddressBookError) -> io::Result<()> {
    for line in err.to_string().lines() {
        writeln!(out, "{}{}", LINE_PREFIX, line.red())?;
    }
    print_farewell(out)
}

pub(super) fn render_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    render_person_list(out, &result.listed_persons)?;
    render_messages(out, &result.messages)
}

fn render_person_list<W: Write>(out: &mut W, persons: &[DisplayPerson]) -> io::Result<()> {
    for dp in persons {
        writeln!(
            out,
            "{}\t{} {}",
            LINE_PREFIX,
            format!("{}.", dp.index).as_str().yellow(),
            dp.person
        )?;
    }
    Ok(())
}

fn render_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        for line in message.content.lines() {
            writeln!(out, "{}{}", LINE_PREFIX, styled(message.level, line))?;
        }
    }
    Ok(())
}

fn styled(level: MessageLevel, line: &str) -> ColoredString {
    match level {
        MessageLevel::Info => line.dimmed(),
        MessageLevel::Success => line.green(),
        MessageLevel::Warning => line.yellow(),
        MessageLevel::Error => line.red(),
    }
}
