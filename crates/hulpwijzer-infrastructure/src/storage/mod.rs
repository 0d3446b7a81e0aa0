//! Durable storage primitives.

pub mod key_value_file;

pub use key_value_file::{KeyValueFile, KeyValueFileError};
