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

//! HTTP error types raised by mock responses.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockHttpError {
    #[error("HTTP error: {0} - {1}")]
    HttpError(u16, String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Invalid request: {0}")]
    InvalidRequestError(String),

    #[error("Resource not found: {0}")]
    NotFoundError(String),

    #[error("JSON decode error: {0}")]
    JsonDecodeError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl MockHttpError {
    /// Determines if a client would retry the request that produced this error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MockHttpError::ServerError(_) | MockHttpError::RateLimitError(_)
        )
    }

    /// Maps HTTP status codes to appropriate error variants
    pub fn from_http_status(status: u16, message: String) -> Self {
        match status {
            400 => MockHttpError::InvalidRequestError(message),
            401 => MockHttpError::AuthenticationError(message),
            403 => MockHttpError::AuthorizationError(message),
            404 => MockHttpError::NotFoundError(message),
            429 => MockHttpError::RateLimitError(message),
            500..=599 => MockHttpError::ServerError(message),
            _ => MockHttpError::HttpError(status, message),
        }
    }
}
