//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the verifier (HTTP transport, endpoint
//! configuration, name matching) is abstracted behind a trait. This crate
//! provides test-friendly implementations that:
//! - Return deterministic, pre-programmed values
//! - Record what they were asked, for assertions
//! - Never touch the network or the environment
//!
//! Usage: swap real implementations for nullables in tests.

pub mod endpoints;
pub mod names;
pub mod transport;

pub use endpoints::NullEndpoints;
pub use names::NullNameMatcher;
pub use transport::{NullTransport, SentTrack};
