//! Travel route: origin and destination countries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// An ISO 3166 country code (alpha-2 or alpha-3), stored upper-case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: &str) -> Result<Self, TypesError> {
        let code = raw.trim();
        let well_formed = matches!(code.len(), 2 | 3) && code.bytes().all(|b| b.is_ascii_alphabetic());
        if !well_formed {
            return Err(TypesError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<CountryCode> for String {
    fn from(c: CountryCode) -> Self {
        c.0
    }
}

/// Direction of travel reported to the authority.
///
/// Verification is always performed for the outbound leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelType {
    #[default]
    #[serde(rename = "DEPARTURE")]
    Departure,
}

impl TravelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Departure => "DEPARTURE",
        }
    }
}

/// Origin and destination of the journey being cleared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub from: CountryCode,
    pub to: CountryCode,
    #[serde(default)]
    pub travel_type: TravelType,
}

impl Route {
    pub fn departure(from: CountryCode, to: CountryCode) -> Self {
        Self {
            from,
            to,
            travel_type: TravelType::Departure,
        }
    }
}
