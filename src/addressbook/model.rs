use crate::codec::{EMAIL_PREFIX, PHONE_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s]+$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    #[error(
        "invalid name {0:?}: only letters, digits, underscores and inner spaces are allowed"
    )]
    InvalidName(String),

    #[error("invalid phone {0:?}: expected one or more digits")]
    InvalidPhone(String),

    #[error("invalid email {0:?}: expected local@domain.tld without p/ or e/")]
    InvalidEmail(String),
}

/// A single contact.
///
/// Fields are only reachable through accessors: a `Person` that exists has
/// passed validation, and nothing can change it afterwards. Validation is
/// strict enough that every `Person` survives an encode/decode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    phone: String,
    email: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let (name, phone, email) = (name.into(), phone.into(), email.into());

        if !NAME_RE.is_match(&name) || name.trim() != name {
            return Err(PersonError::InvalidName(name));
        }
        if !PHONE_RE.is_match(&phone) {
            return Err(PersonError::InvalidPhone(phone));
        }
        if !EMAIL_RE.is_match(&email)
            || email.contains(PHONE_PREFIX)
            || email.contains(EMAIL_PREFIX)
        {
            return Err(PersonError::InvalidEmail(email));
        }

        Ok(Self { name, phone, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The whitespace-separated words of the name, used by keyword search.
    pub fn name_tokens(&self) -> impl Iterator<Item = &str> {
        self.name.split_whitespace()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  Phone Number: {}  Email: {}",
            self.name, self.phone, self.email
        )
    }
}
