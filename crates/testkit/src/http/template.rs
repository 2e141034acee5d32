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

//! Conversion of mock responses into `wiremock` templates.

use serde_json::Value;
use wiremock::ResponseTemplate;

use super::response::MockResponse;

impl MockResponse {
    /// Builds a `wiremock` template serving this response.
    ///
    /// The body is the JSON record when it is non-empty, otherwise the text body. A
    /// `Content-Type` header on the response takes precedence over the inferred one.
    ///
    /// # Panics
    ///
    /// `wiremock` panics while building the template if the status code is outside
    /// `100..=999` or a header name or value is not valid HTTP, e.g. contains `\n`.
    pub fn to_response_template(&self) -> ResponseTemplate {
        let json = self.json();
        let (body, inferred_mime) = if json.is_empty() {
            (self.text.clone().into_bytes(), "text/plain")
        } else {
            (Value::Object(json).to_string().into_bytes(), "application/json")
        };
        let mime = self.header("content-type").unwrap_or(inferred_mime);

        self.headers
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
            .fold(ResponseTemplate::new(self.status_code), |template, (name, value)| {
                template.insert_header(name.as_str(), value.as_str())
            })
            .set_body_raw(body, mime)
    }
}
