use thiserror::Error;

#[derive(Debug, Error)]
pub enum TacError {
    #[error("TAC responded with HTTP status {status}")]
    Status { status: u16 },

    #[error("TAC endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP request to TAC failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from TAC: {0}")]
    InvalidResponse(String),

    #[error("invalid TAC endpoint {url:?}: {reason}")]
    Endpoint { url: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl TacError {
    /// HTTP status carried by the error, if the authority answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
