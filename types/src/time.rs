//! Control date sent alongside a track.
//!
//! The authority evaluates the certificate as of this instant, normally the
//! departure of the first flight segment. Local wall-clock time, no offset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// A date-time without timezone, serialized as `YYYY-MM-DDTHH:MM:SS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ControlDate(NaiveDateTime);

impl ControlDate {
    /// Query-string format (24-hour clock, second precision).
    pub const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn parse(s: &str) -> Result<Self, TypesError> {
        NaiveDateTime::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|e| TypesError::InvalidControlDate {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for ControlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for ControlDate {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ControlDate {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ControlDate> for String {
    fn from(d: ControlDate) -> Self {
        d.to_string()
    }
}

impl From<NaiveDateTime> for ControlDate {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}
