//! Error types for the store layer.
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Errors while executing operations against the item store.
/// Mutating and reading operations that reference an identifier fail with
/// `RecordNotFound` when that identifier is absent from the store.
#[derive(Debug, PartialEq)]
pub struct Error {
    // Enum representing which category of error
    pub error_kind: StoreErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum StoreErrorKind {
    // Referenced record not found
    RecordNotFound,
}

impl Error {
    pub fn record_not_found() -> Self {
        Self {
            error_kind: StoreErrorKind::RecordNotFound,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Store Error: {:?}", self)
    }
}

impl StdError for Error {}
