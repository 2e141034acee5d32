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

//! Crate-level error types for the test kit.

use thiserror::Error;

use crate::{assert::SubsetError, http::MockHttpError};

#[derive(Error, Debug)]
pub enum TestkitError {
    #[error(transparent)]
    Subset(#[from] SubsetError),

    #[error(transparent)]
    Http(#[from] MockHttpError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for TestkitError {
    fn from(err: serde_json::Error) -> Self {
        TestkitError::SerializationError(err.to_string())
    }
}

pub type TestkitResult<T> = Result<T, TestkitError>;
