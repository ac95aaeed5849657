//! # Record Codec
//!
//! Maps a [`Person`] to its one-line text form and back:
//!
//! ```text
//! John Doe p/98765432 e/johnd@gmail.com
//! ```
//!
//! The same line format is used by the storage file and by the arguments of
//! the `add` command. The two tagged fields may appear in either order.

use crate::model::{Person, PersonError};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const PHONE_PREFIX: &str = "p/";
pub const EMAIL_PREFIX: &str = "e/";

static PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new("p/|e/").expect("valid prefix regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected NAME p/PHONE e/EMAIL")]
    MissingFields,

    #[error(transparent)]
    InvalidField(#[from] PersonError),
}

pub fn encode(person: &Person) -> String {
    format!(
        "{} {}{} {}{}",
        person.name(),
        PHONE_PREFIX,
        person.phone(),
        EMAIL_PREFIX,
        person.email()
    )
}

pub fn decode(line: &str) -> Result<Person, DecodeError> {
    let line = line.trim();
    if !has_three_segments(line) {
        return Err(DecodeError::MissingFields);
    }

    let (phone_at, email_at) = match (line.find(PHONE_PREFIX), line.find(EMAIL_PREFIX)) {
        (Some(p), Some(e)) => (p, e),
        _ => return Err(DecodeError::MissingFields),
    };

    let (phone, email) = if phone_at < email_at {
        (&line[phone_at..email_at], &line[email_at..])
    } else {
        (&line[phone_at..], &line[email_at..phone_at])
    };
    let name = &line[..phone_at.min(email_at)];

    Ok(Person::new(
        name.trim(),
        strip_prefix(phone, PHONE_PREFIX),
        strip_prefix(email, EMAIL_PREFIX),
    )?)
}

/// Splitting on the prefixes must yield name, phone and email, all non-empty.
/// Trailing empty segments do not count, so a dangling prefix at the very end
/// is tolerated here and left to field validation.
fn has_three_segments(line: &str) -> bool {
    let mut segments: Vec<&str> = PREFIX_RE.split(line).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.len() == 3 && segments.iter().all(|s| !s.is_empty())
}

fn strip_prefix(field: &str, prefix: &str) -> String {
    field.replace(prefix, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Person {
        Person::new("Bob", "123", "a@b.com").unwrap()
    }

    #[test]
    fn encodes_with_single_spaces() {
        assert_eq!(encode(&bob()), "Bob p/123 e/a@b.com");
    }

    #[test]
    fn decodes_both_tag_orders_identically() {
        assert_eq!(decode("Bob p/123 e/a@b.com").unwrap(), bob());
        assert_eq!(decode("Bob e/a@b.com p/123").unwrap(), bob());
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        let person = decode("   John Doe   p/ 98765432   e/ johnd@gmail.com  ").unwrap();
        assert_eq!(person.name(), "John Doe");
        assert_eq!(person.phone(), "98765432");
        assert_eq!(person.email(), "johnd@gmail.com");
    }

    #[test]
    fn round_trips_valid_records() {
        let people = [
            Person::new("John Doe", "98765432", "johnd@gmail.com").unwrap(),
            Person::new("a_b 9", "0", "x.y@z.co").unwrap(),
            Person::new("Alice", "1", "a@b.c.d").unwrap(),
            Person::new("_", "7", "u@v.w").unwrap(),
            Person::new("___", "00", "a.b.c@d.e.f.g").unwrap(),
            Person::new("Mary   Ann\tLee", "1", "m@x.io").unwrap(),
            Person::new("X", "012345678901234567890123456789", "a@b.c").unwrap(),
            Person::new("Jo 2", "5", "first.last+tag@mail.co.uk").unwrap(),
            Person::new("Ed", "5", "p@e.pe").unwrap(),
        ];
        for person in people {
            assert_eq!(decode(&encode(&person)).unwrap(), person);
        }
    }

    #[test]
    fn refuses_records_that_would_not_decode_back() {
        let unrepresentable = [
            (" Bob", "1", "a@b.com"),
            ("Bob ", "1", "a@b.com"),
            ("   ", "1", "a@b.com"),
            ("Bob", "1", "ap/b@c.com"),
            ("Bob", "1", "a@be/c.com"),
        ];
        for (name, phone, email) in unrepresentable {
            assert!(
                Person::new(name, phone, email).is_err(),
                "{name:?} {phone:?} {email:?} was accepted"
            );
        }
    }

    #[test]
    fn email_with_prefix_inside_does_not_decode() {
        assert_eq!(decode("Bob p/1 e/ap/b@c.com"), Err(DecodeError::MissingFields));
    }

    #[test]
    fn rejects_non_digit_phone() {
        assert!(matches!(
            decode("Bob p/abc e/a@b.com"),
            Err(DecodeError::InvalidField(PersonError::InvalidPhone(_)))
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(matches!(
            decode("Bob p/123 e/bad"),
            Err(DecodeError::InvalidField(PersonError::InvalidEmail(_)))
        ));
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(decode("p/123 e/a@b.com"), Err(DecodeError::MissingFields));
    }

    #[test]
    fn rejects_missing_or_repeated_prefixes() {
        assert_eq!(decode("Bob p/123"), Err(DecodeError::MissingFields));
        assert_eq!(decode("Bob p/123 p/456"), Err(DecodeError::MissingFields));
        assert_eq!(decode("Bob p/123 e/"), Err(DecodeError::MissingFields));
        assert_eq!(decode("Bob p/1 e/a@b.com p/2"), Err(DecodeError::MissingFields));
        assert_eq!(decode(""), Err(DecodeError::MissingFields));
    }

    #[test]
    fn rejects_blank_phone_segment() {
        assert!(matches!(
            decode("Bob p/ e/a@b.com"),
            Err(DecodeError::InvalidField(PersonError::InvalidPhone(_)))
        ));
    }
}
