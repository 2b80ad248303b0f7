//! Track classification.

use serde::{Deserialize, Serialize};

/// Which family of certificate a track belongs to.
///
/// Determines the endpoint the track is submitted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// International digital certificate.
    Dcc,
    /// Domestic 2D-DOC barcode.
    TwoDDoc,
}

impl TrackKind {
    /// Classify a track by its leading identifier, ignoring ASCII case.
    ///
    /// An empty `dcc_prefix` matches every track.
    pub fn classify(track: &str, dcc_prefix: &str) -> Self {
        let head = track.as_bytes().get(..dcc_prefix.len());
        match head {
            Some(head) if head.eq_ignore_ascii_case(dcc_prefix.as_bytes()) => Self::Dcc,
            _ => Self::TwoDDoc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dcc => "dcc",
            Self::TwoDDoc => "2d-doc",
        }
    }
}
