//! Record model representing one contact entry.

use crate::domain::{parse_birthday, FieldKind, ValidatedField, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact entry made of a name, an optional phone and an optional birthday.
///
/// Each field is a `ValidatedField`, so every write (at construction or later
/// through a setter) is checked against the field's format rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ValidatedField,
    phone: ValidatedField,
    birthday: ValidatedField,
}

/// Serialized shape of a record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordEntry {
    name: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl Record {
    /// Create a new record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `phone` or `birthday` is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Record;
    ///
    /// let record = Record::new("Alice", Some("555-1234"), Some("1990-05-17")).unwrap();
    /// assert_eq!(record.phone(), Some("555-1234"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self {
            name: ValidatedField::with_value(FieldKind::Name, name)?,
            phone: ValidatedField::new(FieldKind::Phone),
            birthday: ValidatedField::new(FieldKind::Birthday),
        };

        if let Some(phone) = phone {
            record.phone.set(phone)?;
        }
        if let Some(birthday) = birthday {
            record.birthday.set(birthday)?;
        }

        Ok(record)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.get()
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.get()
    }

    /// Borrow the field of the given kind.
    pub fn field(&self, kind: FieldKind) -> &ValidatedField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Phone => &self.phone,
            FieldKind::Birthday => &self.birthday,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name.set(name)
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone.set(phone)
    }

    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday.set(birthday)
    }

    /// Days from today (local time) until the next birthday, `None` without one.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month and day.
    ///
    /// Returns 0 when `today` is the birthday. A Feb 29 birthday falls on
    /// Feb 28 in non-leap years. The result is always within `0..=365`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        // Stored birthdays were validated on write.
        let birthday = parse_birthday(self.birthday.get()?).ok()?;

        let this_year = occurrence_in(today.year(), birthday)?;
        let next = if this_year < today {
            occurrence_in(today.year() + 1, birthday)?
        } else {
            this_year
        };

        Some((next - today).num_days())
    }
}

fn occurrence_in(year: i32, birthday: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().unwrap_or_default().to_string(),
            phone: record.phone().map(str::to_string),
            birthday: record.birthday().map(str::to_string),
        }
    }
}

// Serde support - serialize as a flat entry
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RecordEntry::from(self).serialize(serializer)
    }
}

// Serde support - deserialize through the validating constructor
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entry = RecordEntry::deserialize(deserializer)?;
        Record::new(entry.name, entry.phone.as_deref(), entry.birthday.as_deref())
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Birthday: {}",
            self.name, self.phone, self.birthday
        )
    }
}
