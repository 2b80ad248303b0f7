//! The booking passenger a track is verified against.

use serde::{Deserialize, Serialize};

use crate::FailureReason;

/// A passenger as known to the booking.
///
/// `error` is the only field verification writes to. A single passenger must
/// not be verified concurrently; `&mut` access enforces that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    error: Option<FailureReason>,
}

impl Passenger {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            error: None,
        }
    }

    /// The last recorded verification failure, if any.
    pub fn error(&self) -> Option<FailureReason> {
        self.error
    }

    /// The last recorded failure as its string code.
    pub fn error_code(&self) -> Option<&'static str> {
        self.error.map(|e| e.as_code())
    }

    pub fn set_error(&mut self, reason: FailureReason) {
        self.error = Some(reason);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_passenger_has_no_error() {
        let p = Passenger::new("Marie", "Dupont");
        assert_eq!(p.error(), None);
        assert_eq!(p.error_code(), None);
    }

    #[test]
    fn set_and_clear_error() {
        let mut p = Passenger::new("Marie", "Dupont");
        p.set_error(FailureReason::NameMismatch);
        assert_eq!(p.error_code(), Some("NAME_MATCHING_VALIDATION_FAILED"));
        p.clear_error();
        assert_eq!(p.error(), None);
    }

    #[test]
    fn deserializes_without_error_field() {
        let p: Passenger =
            serde_json::from_str(r#"{"first_name":"Marie","last_name":"Dupont"}"#).unwrap();
        assert_eq!(p, Passenger::new("Marie", "Dupont"));
    }
}
