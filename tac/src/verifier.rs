//! Health-clearance verification against the TAC authority.
//!
//! Each call is a stateless pipeline:
//! 1. resolve the URL and `POST` the track (transport errors propagate)
//! 2. validate the response shape and status → `CertificateNotValid`
//! 3. match the holder name against the passenger → `NameMismatch`

use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, error, info_span, warn, Instrument, Span};

use clearance_types::{ControlDate, FailureReason, Passenger, Route, TrackKind};

use crate::config::TacConfig;
use crate::endpoint::{build_url, EndpointProvider};
use crate::error::TacError;
use crate::names::{holder_name, NameMatcher, NormalizedNameMatcher};
use crate::response::{DynamicData, ResponseValidator};
use crate::transport::{HttpTransport, TacTransport};

/// One track to verify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    pub track: String,
    /// Instant the certificate must be valid at; usually the first departure.
    pub control_date: Option<ControlDate>,
    pub route: Option<Route>,
}

impl VerificationRequest {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            control_date: None,
            route: None,
        }
    }

    pub fn with_control_date(mut self, control_date: ControlDate) -> Self {
        self.control_date = Some(control_date);
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }
}

/// Outcome of a verification that reached the authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearanceVerdict {
    Verified,
    Rejected(FailureReason),
}

impl ClearanceVerdict {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            Self::Verified => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

fn verify_span(kind: TrackKind) -> Span {
    info_span!("tac_verify", kind = %kind.as_str())
}

/// Verifies tracks against passengers.
///
/// Holds no per-call state; share it freely across tasks.
#[derive(Clone)]
pub struct ClearanceVerifier {
    transport: Arc<dyn TacTransport>,
    endpoints: Arc<dyn EndpointProvider>,
    names: Arc<dyn NameMatcher>,
    validator: ResponseValidator,
}

impl ClearanceVerifier {
    pub fn new(
        transport: Arc<dyn TacTransport>,
        endpoints: Arc<dyn EndpointProvider>,
        names: Arc<dyn NameMatcher>,
        validator: ResponseValidator,
    ) -> Self {
        Self {
            transport,
            endpoints,
            names,
            validator,
        }
    }

    /// Verifier talking HTTP to the endpoints in `config`, with the default
    /// name matcher.
    pub fn from_config(config: TacConfig) -> Result<Self, TacError> {
        let transport = HttpTransport::from_config(&config)?;
        let validator = config.validator();
        Ok(Self::new(
            Arc::new(transport),
            Arc::new(config),
            Arc::new(NormalizedNameMatcher),
            validator,
        ))
    }

    /// Resolve the target URL for a request.
    pub fn resolve_url(&self, request: &VerificationRequest) -> Result<(TrackKind, Url), TacError> {
        build_url(
            self.endpoints.as_ref(),
            &request.track,
            request.control_date.as_ref(),
            request.route.as_ref(),
        )
    }

    /// Verify a track for a passenger without touching the passenger.
    ///
    /// Transport failures are returned as errors; every other outcome is a
    /// verdict.
    pub async fn assess(
        &self,
        request: &VerificationRequest,
        passenger: &Passenger,
    ) -> Result<ClearanceVerdict, TacError> {
        let (kind, url) = self.resolve_url(request)?;

        async {
            let response = match self.transport.post_track(&url, &request.track).await {
                Ok(response) => response,
                Err(e) => {
                    match e.status() {
                        Some(status) => error!(
                            status,
                            "TAC:: exception occurred while verifying health clearance, status code is {status}"
                        ),
                        None => error!("TAC:: exception occurred while verifying health clearance: {e}"),
                    }
                    return Err(e);
                }
            };

            let record = match self.validator.check(response.as_ref()) {
                Ok(record) => record,
                Err(defect) => {
                    debug!(%defect, "TAC:: certificate not valid");
                    return Ok(ClearanceVerdict::Rejected(FailureReason::CertificateNotValid));
                }
            };

            if let Some(extra) = response.as_ref().map(|r| r.ignored_records()).filter(|n| *n > 0) {
                debug!(ignored = extra, "TAC:: only the first dynamic record is consulted");
            }

            if self.verify_name(record, passenger) {
                Ok(ClearanceVerdict::Verified)
            } else {
                Ok(ClearanceVerdict::Rejected(FailureReason::NameMismatch))
            }
        }
        .instrument(verify_span(kind))
        .await
    }

    /// Verify a track and record any failure reason on the passenger.
    ///
    /// Returns `Ok(true)` when the certificate is valid and belongs to the
    /// passenger. The passenger's error is left untouched on success.
    pub async fn verify(
        &self,
        track: &str,
        passenger: &mut Passenger,
        control_date: Option<ControlDate>,
        route: Option<Route>,
    ) -> Result<bool, TacError> {
        let request = VerificationRequest {
            track: track.to_string(),
            control_date,
            route,
        };
        let verdict = self.assess(&request, passenger).await?;
        if let ClearanceVerdict::Rejected(reason) = verdict {
            passenger.set_error(reason);
        }
        Ok(verdict.is_verified())
    }

    /// Match failures of any kind count as a mismatch.
    fn verify_name(&self, record: &DynamicData, passenger: &Passenger) -> bool {
        let outcome = holder_name(record).and_then(|(cert_first, cert_last)| {
            self.names.matches(
                cert_first,
                cert_last,
                &passenger.first_name,
                &passenger.last_name,
            )
        });
        match outcome {
            Ok(matched) => {
                if !matched {
                    warn!("Name matching validation - certificate holder does not match passenger");
                }
                matched
            }
            Err(e) => {
                error!("Name matching validation - exception occurred while verifying name of passenger: {e}");
                false
            }
        }
    }
}
