//! Address Book - validated personal contact records with JSON persistence.
//!
//! This library keeps an ordered, in-memory list of contacts (name, phone,
//! birthday), checks every field write against its format rule, answers
//! exact-match, substring and paginated queries, and persists the list to a
//! versioned JSON file.
//!
//! # Architecture
//!
//! - **domain**: Field kinds, the `ValidatedField` holder and validation errors
//! - **models**: The `Record` type and its birthday countdown
//! - **address_book**: The `AddressBook` container and its queries
//! - **repositories**: Storage abstraction and the JSON file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive menu used by the binary

pub mod address_book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use address_book::AddressBook;
pub use config::Config;
pub use domain::{FieldKind, ValidatedField, ValidationError};
pub use error::{AddressBookError, BookResult, ConfigError};
pub use models::Record;
pub use repositories::{JsonFileStore, RecordStore};
