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

//! Construction parameters for mock responses.

use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{common::consts::DEFAULT_STATUS_CODE, Record};

/// Inputs to [`build_mock_response`](super::build_mock_response).
///
/// Unset fields fall back to an empty JSON record, an empty text body and no headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct MockResponseParams {
    pub status_code: u16,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Record>,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl Default for MockResponseParams {
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE,
            json_data: None,
            text: None,
            headers: None,
        }
    }
}

impl MockResponseParams {
    pub fn builder() -> MockResponseParamsBuilder {
        MockResponseParamsBuilder::default()
    }

    /// Parameters for a response with the given status and nothing else.
    pub fn with_status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_default_params() {
        let params = MockResponseParams::default();
        assert_eq!(params.status_code, 200);
        assert_eq!(params.json_data, None);
        assert_eq!(params.text, None);
        assert_eq!(params.headers, None);
    }

    #[rstest]
    fn test_builder_keeps_defaults_for_unset_fields() {
        let params = MockResponseParams::builder()
            .text("created")
            .build()
            .unwrap();

        assert_eq!(params.status_code, 200);
        assert_eq!(params.text.as_deref(), Some("created"));
        assert_eq!(params.json_data, None);
    }

    #[rstest]
    fn test_deserialize_partial_params() {
        let params: MockResponseParams =
            serde_json::from_value(json!({"status_code": 201, "json_data": {"id": 7}})).unwrap();

        assert_eq!(params.status_code, 201);
        assert_eq!(params.json_data.unwrap()["id"], 7);
        assert_eq!(params.headers, None);
    }
}
