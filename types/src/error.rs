//! Errors raised while constructing domain values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),

    #[error("invalid control date {input:?}: {reason}")]
    InvalidControlDate { input: String, reason: String },

    #[error("unknown failure reason: {0}")]
    UnknownFailureReason(String),
}
