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

//! The mock response type and its constructor.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::{self, Debug},
    sync::Arc,
};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use super::{error::MockHttpError, models::MockResponseParams};
use crate::Record;

/// Deferred JSON body: evaluated each time [`MockResponse::json`] is called.
pub type JsonAccessor = Arc<dyn Fn() -> Record + Send + Sync>;

/// A response double carrying a status code, text body, headers and lazy JSON body.
#[derive(Clone)]
pub struct MockResponse {
    pub status_code: u16,
    pub text: String,
    pub headers: HashMap<String, String>,
    json: JsonAccessor,
}

/// Builds a [`MockResponse`] from `params`, substituting defaults for unset fields.
///
/// The JSON body is captured behind a zero-argument accessor returning `json_data`,
/// or an empty record when none was given.
pub fn build_mock_response(params: MockResponseParams) -> MockResponse {
    trace!(status_code = params.status_code, "building mock response");

    let json_data = params.json_data.unwrap_or_default();
    MockResponse {
        status_code: params.status_code,
        text: params.text.unwrap_or_default(),
        headers: params.headers.unwrap_or_default(),
        json: Arc::new(move || json_data.clone()),
    }
}

impl From<MockResponseParams> for MockResponse {
    fn from(params: MockResponseParams) -> Self {
        build_mock_response(params)
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        build_mock_response(MockResponseParams::default())
    }
}

impl MockResponse {
    /// A `200` response with empty bodies and no headers.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Creates a response whose JSON body is produced by `json`.
    pub fn with_json_fn<F>(status_code: u16, json: F) -> Self
    where
        F: Fn() -> Record + Send + Sync + 'static,
    {
        Self {
            status_code,
            text: String::new(),
            headers: HashMap::new(),
            json: Arc::new(json),
        }
    }

    /// Invokes the JSON accessor.
    pub fn json(&self) -> Record {
        (self.json)()
    }

    /// Decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MockHttpError::JsonDecodeError`] if the body does not match `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, MockHttpError> {
        serde_json::from_value(Value::Object(self.json()))
            .map_err(|e| MockHttpError::JsonDecodeError(e.to_string()))
    }

    /// Looks up a header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns `self` for 2xx responses, otherwise the error a client would raise.
    ///
    /// # Errors
    ///
    /// Returns the [`MockHttpError`] mapped from the status code, carrying the text body.
    pub fn error_for_status(&self) -> Result<&Self, MockHttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(MockHttpError::from_http_status(
                self.status_code,
                self.text.clone(),
            ))
        }
    }

    /// Renders the response as `{status_code, json, text, headers}`.
    ///
    /// Headers are emitted sorted by name.
    pub fn to_record(&self) -> Record {
        let headers: BTreeMap<&String, &String> = self.headers.iter().collect();
        let headers: Record = headers
            .into_iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        let mut record = Record::new();
        record.insert("status_code".to_string(), Value::from(self.status_code));
        record.insert("json".to_string(), Value::Object(self.json()));
        record.insert("text".to_string(), Value::String(self.text.clone()));
        record.insert("headers".to_string(), Value::Object(headers));
        record
    }
}

impl Debug for MockResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(MockResponse))
            .field("status_code", &self.status_code)
            .field("json", &self.json())
            .field("text", &self.text)
            .field("headers", &self.headers)
            .finish()
    }
}
