use std::str::Utf8Error;
use thiserror::Error;

/// The primary error type for the `rauth-lib` library.
///
/// Only the decode path can fail; encoding is a total function of its
/// inputs and has no error outcomes.
#[derive(Error, Debug)]
pub enum RauthError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token too short: expected at least {expected} bytes, got {actual}")]
    TokenTooShort { expected: usize, actual: usize },

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("Malformed payload: expected {expected} fields, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("Invalid timestamp field: {0:?}")]
    InvalidTimestamp(String),
}
