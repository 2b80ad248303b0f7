//! Fundamental types for health-clearance verification.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the booking passenger, failure reasons, track kinds, travel routes and the
//! control date sent to the verification authority.

pub mod error;
pub mod failure;
pub mod passenger;
pub mod route;
pub mod time;
pub mod track;

pub use error::TypesError;
pub use failure::FailureReason;
pub use passenger::Passenger;
pub use route::{CountryCode, Route, TravelType};
pub use time::ControlDate;
pub use track::TrackKind;
