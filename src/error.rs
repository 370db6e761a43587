// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Validation(ValidationError),
    Persistence(PersistenceError),
    Config(String),
}

/// Local precondition violations. Rejected synchronously; the working copy
/// is left unchanged and nothing reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A move referenced an index outside the current list.
    IndexOutOfBounds { index: usize, len: usize },

    /// Commit requested without a product id.
    MissingProductId,

    /// Commit requested with an empty working copy.
    EmptyImageList,

    /// A move or a second commit was requested while a save is in flight.
    SaveInFlight,
}

/// Failures of the one network call. The working copy is preserved so the
/// user can retry without re-dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The request never completed (connection error, timeout, non-2xx status).
    Network(String),

    /// The response body could not be decoded.
    InvalidResponse(String),

    /// The response decoded but did not carry the confirmation marker and
    /// the committed list. A generic HTTP success is not a confirmation.
    Unconfirmed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for list of length {len}")
            }
            ValidationError::MissingProductId => write!(f, "Missing product id"),
            ValidationError::EmptyImageList => write!(f, "Image list is empty"),
            ValidationError::SaveInFlight => write!(f, "A save is already in flight"),
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Network(msg) => write!(f, "Network error: {msg}"),
            PersistenceError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
            PersistenceError::Unconfirmed(msg) => {
                write!(f, "Server did not confirm the reorder: {msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "Validation Error: {e}"),
            Error::Persistence(e) => write!(f, "Persistence Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<PersistenceError> for Error {
    fn from(err: PersistenceError) -> Self {
        Error::Persistence(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
