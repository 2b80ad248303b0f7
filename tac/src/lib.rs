//! TAC integration: verify a health-clearance track against a passenger.
//!
//! One verification is a single request/response exchange:
//! - resolve the endpoint from the track kind (international DCC vs. domestic 2D-DOC)
//! - `POST` the raw track, with the control date and optional route in the query
//! - check the first dynamic record's rule-engine status for the declared resource type
//! - match the certificate holder's name against the booking passenger
//!
//! Every collaborator (transport, endpoint lookup, name matching) sits behind a
//! trait so the verifier runs without network or environment in tests.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod names;
pub mod response;
pub mod transport;
pub mod verifier;

pub use config::TacConfig;
pub use endpoint::{build_url, EndpointProvider};
pub use error::TacError;
pub use names::{NameMatchError, NameMatcher, NormalizedNameMatcher};
pub use response::{
    CountryResult, DynamicData, ResourceType, ResponseValidator, RuleEngineResult, ShapeDefect,
    TacData, TacResponse,
};
pub use transport::{HttpTransport, TacTransport};
pub use verifier::{ClearanceVerdict, ClearanceVerifier, VerificationRequest};
