//! Matching the certificate holder against the booking passenger.

use thiserror::Error;

use crate::response::DynamicData;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameMatchError {
    #[error("certificate record has no holder {0} name")]
    MissingHolderName(&'static str),

    #[error("name matcher failed: {0}")]
    Matcher(String),
}

/// Compares the name on a certificate with the name on a booking.
pub trait NameMatcher: Send + Sync {
    fn matches(
        &self,
        cert_first: &str,
        cert_last: &str,
        booking_first: &str,
        booking_last: &str,
    ) -> Result<bool, NameMatchError>;
}

/// Holder first and last name of a record.
pub fn holder_name(record: &DynamicData) -> Result<(&str, &str), NameMatchError> {
    let first = record
        .lite_first_name
        .as_deref()
        .ok_or(NameMatchError::MissingHolderName("first"))?;
    let last = record
        .lite_last_name
        .as_deref()
        .ok_or(NameMatchError::MissingHolderName("last"))?;
    Ok((first, last))
}

/// Canonical form used for comparison.
///
/// Upper-cases, turns ICAO `<` fillers, hyphens, apostrophes and dots into
/// spaces, and collapses runs of whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '<' | '-' | '\'' | '\u{2019}' | '.' => ' ',
            other => other,
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact comparison of normalised first and last names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizedNameMatcher;

impl NameMatcher for NormalizedNameMatcher {
    fn matches(
        &self,
        cert_first: &str,
        cert_last: &str,
        booking_first: &str,
        booking_last: &str,
    ) -> Result<bool, NameMatchError> {
        let cert_first = normalize_name(cert_first);
        let cert_last = normalize_name(cert_last);
        if cert_first.is_empty() || cert_last.is_empty() {
            return Ok(false);
        }
        Ok(cert_first == normalize_name(booking_first) && cert_last == normalize_name(booking_last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_icao_and_punctuation() {
        assert_eq!(normalize_name("jean<pierre"), "JEAN PIERRE");
        assert_eq!(normalize_name("  O'Neil-Smith "), "O NEIL SMITH");
        assert_eq!(normalize_name("Anne  Marie"), "ANNE MARIE");
    }

    #[test]
    fn matches_ignoring_case_and_separators() {
        let m = NormalizedNameMatcher;
        assert_eq!(m.matches("JEAN<PIERRE", "DUPONT", "Jean-Pierre", "dupont"), Ok(true));
    }

    #[test]
    fn different_names_do_not_match() {
        let m = NormalizedNameMatcher;
        assert_eq!(m.matches("MARIE", "DUPONT", "Marie", "Durand"), Ok(false));
        assert_eq!(m.matches("DUPONT", "MARIE", "Marie", "Dupont"), Ok(false));
    }

    #[test]
    fn empty_certificate_name_never_matches() {
        let m = NormalizedNameMatcher;
        assert_eq!(m.matches("", "", "", ""), Ok(false));
    }

    #[test]
    fn holder_name_requires_both_parts() {
        let record = DynamicData {
            lite_first_name: Some("MARIE".into()),
            ..Default::default()
        };
        assert_eq!(
            holder_name(&record),
            Err(NameMatchError::MissingHolderName("last"))
        );
    }
}
