//! Domain value types.
//!
//! This module contains the field kinds of a contact record and the
//! `ValidatedField` holder that checks each write against the kind's
//! format rule, so an invalid phone or birthday can never be stored.

pub mod errors;
pub mod field;

pub use errors::ValidationError;
pub use field::{parse_birthday, FieldKind, ValidatedField, BIRTHDAY_FORMAT};
