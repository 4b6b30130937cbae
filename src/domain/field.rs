//! Validated field value holder.

use super::errors::ValidationError;
use crate::error::AddressBookError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Wire and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// The kind of a field, which decides the format rule applied on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-form name. Never rejected.
    Name,
    /// Phone number: digits, `-`, space, `(` and `)` only.
    Phone,
    /// Birthday: a calendar date written as `YYYY-MM-DD`.
    Birthday,
}

impl FieldKind {
    /// Lowercase field name as used in queries and the persisted format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }

    /// Check `value` against this kind's format rule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` describing the rejected value.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Name => Ok(()),
            Self::Phone => {
                if is_valid_phone(value) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidPhone(value.to_string()))
                }
            }
            Self::Birthday => parse_birthday(value).map(|_| ()),
        }
    }
}

impl FromStr for FieldKind {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "birthday" => Ok(Self::Birthday),
            other => Err(AddressBookError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '(' | ')'))
}

/// Parse a birthday written as zero-padded `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthday` for malformed strings and for
/// dates that do not exist on the calendar (e.g. `2023-02-29`).
pub fn parse_birthday(value: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(ValidationError::InvalidBirthday(value.to_string()));
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
}

/// A named value holder that enforces its kind's format rule on every write.
///
/// The stored value is `None` while unset. Writing an empty string to a
/// phone or birthday field clears it; a name is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedField {
    kind: FieldKind,
    value: Option<String>,
}

impl ValidatedField {
    /// Create an unset field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self { kind, value: None }
    }

    /// Create a field and write `value` into it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `value` breaks the kind's format rule.
    pub fn with_value(kind: FieldKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        let mut field = Self::new(kind);
        field.set(value)?;
        Ok(field)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Validate and store `value`. On failure the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `value` breaks the kind's format rule.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();

        if value.is_empty() && self.kind != FieldKind::Name {
            self.value = None;
            return Ok(());
        }

        self.kind.validate(&value)?;
        self.value = Some(value);
        Ok(())
    }

    /// Reset the field to unset.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Current value, `None` while unset.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or("None"))
    }
}
