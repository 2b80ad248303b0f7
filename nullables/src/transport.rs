//! Nullable transport: record submitted tracks without sending them.

use async_trait::async_trait;
use clearance_tac::{TacError, TacResponse, TacTransport};
use reqwest::Url;
use std::sync::Mutex;

/// A track "sent" through the null transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentTrack {
    pub url: Url,
    pub track: String,
}

enum Scripted {
    Body(Option<TacResponse>),
    Status(u16),
    Unreachable,
}

/// A transport that answers from a script instead of the network.
///
/// Replies are consumed in order; the last one repeats once the script is
/// exhausted.
pub struct NullTransport {
    script: Mutex<Vec<Scripted>>,
    sent: Mutex<Vec<SentTrack>>,
}

impl NullTransport {
    fn with(reply: Scripted) -> Self {
        Self {
            script: Mutex::new(vec![reply]),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a decoded response (or an empty body for `None`).
    pub fn responding(response: Option<TacResponse>) -> Self {
        Self::with(Scripted::Body(response))
    }

    /// Answer with a JSON fixture.
    ///
    /// # Panics
    /// Panics if `json` is not a valid response body.
    pub fn responding_json(json: &str) -> Self {
        let response = serde_json::from_str::<Option<TacResponse>>(json)
            .unwrap_or_else(|e| panic!("invalid TAC fixture: {e}"));
        Self::responding(response)
    }

    /// Fail every call with the given HTTP status.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with(Scripted::Status(status))
    }

    /// Fail every call as if the authority could not be reached.
    pub fn unreachable() -> Self {
        Self::with(Scripted::Unreachable)
    }

    /// Queue another reply after the current ones.
    pub fn then_json(self, json: &str) -> Self {
        let response = serde_json::from_str::<Option<TacResponse>>(json)
            .unwrap_or_else(|e| panic!("invalid TAC fixture: {e}"));
        self.script.lock().unwrap().push(Scripted::Body(response));
        self
    }

    /// All tracks submitted so far (for assertions).
    pub fn sent(&self) -> Vec<SentTrack> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recent submission.
    pub fn last_sent(&self) -> Option<SentTrack> {
        self.sent.lock().unwrap().last().cloned()
    }

    fn next_reply(&self) -> Result<Option<TacResponse>, TacError> {
        let mut script = self.script.lock().unwrap();
        let reply = if script.len() > 1 {
            script.remove(0)
        } else {
            match script.first() {
                Some(Scripted::Body(body)) => Scripted::Body(body.clone()),
                Some(Scripted::Status(status)) => Scripted::Status(*status),
                Some(Scripted::Unreachable) | None => Scripted::Unreachable,
            }
        };
        match reply {
            Scripted::Body(body) => Ok(body),
            Scripted::Status(status) => Err(TacError::Status { status }),
            Scripted::Unreachable => Err(TacError::Unreachable("null transport".into())),
        }
    }
}

#[async_trait]
impl TacTransport for NullTransport {
    async fn post_track(&self, url: &Url, track: &str) -> Result<Option<TacResponse>, TacError> {
        self.sent.lock().unwrap().push(SentTrack {
            url: url.clone(),
            track: track.to_string(),
        });
        self.next_reply()
    }
}
