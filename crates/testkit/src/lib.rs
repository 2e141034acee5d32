#![doc = include_str!("../README.md")]

pub mod assert;
pub mod common;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod series;

pub use assert::{assert_subset, check_json_subset, check_subset, json_eq, KeyPath, SubsetError};
pub use common::*;
pub use error::*;
pub use http::{build_mock_response, MockHttpError, MockResponse, MockResponseParams};
pub use series::{generate_series_points, generate_synthetic_series, SeriesConfig, SeriesPoint};

#[doc(hidden)]
pub use serde_json as __serde_json;

/// A string-keyed JSON mapping with insertion order preserved.
pub type Record = serde_json::Map<String, serde_json::Value>;
