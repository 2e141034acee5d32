// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! `rstest` fixtures shared across test suites.
//!
//! Import the fixture by name and declare a parameter with the same name:
//!
//! ```ignore
//! use datapoint_testkit::{fixtures::synthetic_dataset, Record};
//! use rstest::rstest;
//!
//! #[rstest]
//! fn uses_dataset(synthetic_dataset: Vec<Record>) {
//!     assert_eq!(synthetic_dataset.len(), 10);
//! }
//! ```

use rstest::fixture;

use crate::{
    common::consts::DEFAULT_SERIES_COUNT,
    http::{build_mock_response, MockResponse, MockResponseParams},
    series::generate_synthetic_series,
    Record,
};

/// Ten synthetic records over the last 30 days.
#[fixture]
pub fn synthetic_dataset() -> Vec<Record> {
    generate_synthetic_series(DEFAULT_SERIES_COUNT, None, None)
}

/// A `200` response with empty bodies.
#[fixture]
pub fn ok_response() -> MockResponse {
    build_mock_response(MockResponseParams::default())
}
