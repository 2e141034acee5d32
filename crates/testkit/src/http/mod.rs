//! In-memory HTTP response doubles.
//!
//! [`MockResponse`] mirrors the surface code under test reads from a real response:
//! a status code, text body, headers and a `json()` accessor evaluated on demand.
//! Responses can also be turned into `wiremock` templates when a test needs an actual
//! HTTP round trip.

pub mod error;
pub mod models;
pub mod response;
pub mod template;

pub use error::*;
pub use models::*;
pub use response::*;
