//! Nullable endpoint provider: fixed URLs, no environment lookup.

use clearance_tac::EndpointProvider;
use clearance_types::TrackKind;

/// Endpoint provider with fixed, test-local URLs.
#[derive(Clone, Debug)]
pub struct NullEndpoints {
    pub dcc: Option<String>,
    pub two_d_doc: Option<String>,
    pub dcc_prefix: String,
}

impl NullEndpoints {
    pub const DCC_URL: &'static str = "http://tac.null/dcc";
    pub const TWO_D_DOC_URL: &'static str = "http://tac.null/2ddoc";
    pub const DCC_PREFIX: &'static str = "HC1:";

    pub fn new() -> Self {
        Self {
            dcc: Some(Self::DCC_URL.to_string()),
            two_d_doc: Some(Self::TWO_D_DOC_URL.to_string()),
            dcc_prefix: Self::DCC_PREFIX.to_string(),
        }
    }

    /// Provider with no endpoints configured at all.
    pub fn unconfigured() -> Self {
        Self {
            dcc: None,
            two_d_doc: None,
            dcc_prefix: Self::DCC_PREFIX.to_string(),
        }
    }
}

impl Default for NullEndpoints {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointProvider for NullEndpoints {
    fn endpoint(&self, kind: TrackKind) -> Option<String> {
        match kind {
            TrackKind::Dcc => self.dcc.clone(),
            TrackKind::TwoDDoc => self.two_d_doc.clone(),
        }
    }

    fn dcc_track_prefix(&self) -> String {
        self.dcc_prefix.clone()
    }
}
