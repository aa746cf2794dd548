//! Contact Directory - an in-memory contact store with validated operations.
//!
//! The directory keeps an ordered collection of contacts (name, email, phone)
//! keyed by email, and supports add, edit, delete, substring search and
//! field-based sorting.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record
//! - **directory**: `ContactDirectory` and the typed `ContactField` selector
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::{ContactDirectory, ContactField, EditPolicy};
pub use error::{ConfigError, DirectoryError, DirectoryResult, ErrorKind};
pub use models::Contact;
