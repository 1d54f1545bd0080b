//! Validated contact fields: name, phone, email and address.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain, where the \
     local-part contains alphanumerics separated by single special characters (+_.-) and the \
     domain is made of labels separated by periods, the last label being at least 2 characters";
const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let label = r"[[:alnum:]]([-[:alnum:]]*[[:alnum:]])?";
    Regex::new(&format!(
        r"^[[:alnum:]]+([+_.-][[:alnum:]]+)*@({label}\.)*({label}){{2,}}$"
    ))
    .expect("email pattern is valid")
});

/// Error returned when a contact field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    field: &'static str,
    value: String,
    constraints: &'static str,
}

impl ParseFieldError {
    fn new(field: &'static str, value: &str, constraints: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            constraints,
        }
    }

    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Returns the rejected input.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': {}", self.field, self.value, self.constraints)
    }
}

impl std::error::Error for ParseFieldError {}

/// A person's name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(s: &str) -> Result<Self, ParseFieldError> {
        let mut chars = s.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid {
            return Err(ParseFieldError::new("name", s, NAME_CONSTRAINTS));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number of at least three digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(s: &str) -> Result<Self, ParseFieldError> {
        if s.len() < 3 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseFieldError::new("phone", s, PHONE_CONSTRAINTS));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self, ParseFieldError> {
        if !EMAIL_RE.is_match(s) {
            return Err(ParseFieldError::new("email", s, EMAIL_CONSTRAINTS));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A free-form postal address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(s: &str) -> Result<Self, ParseFieldError> {
        if !s.chars().next().is_some_and(|c| !c.is_whitespace()) {
            return Err(ParseFieldError::new("address", s, ADDRESS_CONSTRAINTS));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field_impls {
    ($($ty:ident),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!(stringify!($ty), "(\"{}\")"), self.0)
                }
            }

            impl FromStr for $ty {
                type Err = ParseFieldError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(&self.0)
                }
            }
        )+
    };
}

string_field_impls!(Name, Phone, Email, Address);
