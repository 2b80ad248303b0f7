//! Reasons a health-clearance verification is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// Why a track was rejected for a passenger.
///
/// The string codes are the values recorded on the booking passenger and are
/// part of the external contract with callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// The authority's response was absent, incomplete, or not "valid".
    #[serde(rename = "HEALTH_CLEARANCE_CERTIFICATE_NOT_VALID")]
    CertificateNotValid,
    /// The certificate holder does not match the booking passenger.
    #[serde(rename = "NAME_MATCHING_VALIDATION_FAILED")]
    NameMismatch,
}

impl FailureReason {
    /// Wire / passenger error code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::CertificateNotValid => "HEALTH_CLEARANCE_CERTIFICATE_NOT_VALID",
            Self::NameMismatch => "NAME_MATCHING_VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for FailureReason {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HEALTH_CLEARANCE_CERTIFICATE_NOT_VALID" => Ok(Self::CertificateNotValid),
            "NAME_MATCHING_VALIDATION_FAILED" => Ok(Self::NameMismatch),
            other => Err(TypesError::UnknownFailureReason(other.to_string())),
        }
    }
}
