//! Nullable name matcher: scripted outcomes, recorded calls.

use clearance_tac::{NameMatchError, NameMatcher};
use std::sync::Mutex;

/// A name matcher that returns a fixed outcome and records its inputs.
pub struct NullNameMatcher {
    outcome: Result<bool, String>,
    calls: Mutex<Vec<[String; 4]>>,
}

impl NullNameMatcher {
    /// Always answers `Ok(matched)`.
    pub fn answering(matched: bool) -> Self {
        Self {
            outcome: Ok(matched),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with a matcher error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call as `[cert_first, cert_last, booking_first, booking_last]`.
    pub fn calls(&self) -> Vec<[String; 4]> {
        self.calls.lock().unwrap().clone()
    }
}

impl NameMatcher for NullNameMatcher {
    fn matches(
        &self,
        cert_first: &str,
        cert_last: &str,
        booking_first: &str,
        booking_last: &str,
    ) -> Result<bool, NameMatchError> {
        self.calls.lock().unwrap().push([
            cert_first.to_string(),
            cert_last.to_string(),
            booking_first.to_string(),
            booking_last.to_string(),
        ]);
        self.outcome.clone().map_err(NameMatchError::Matcher)
    }
}
