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

//! Failures reported by the subset checker.

use serde_json::Value;
use thiserror::Error;

use super::path::KeyPath;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubsetError {
    #[error("Key '{path}' not found in actual record")]
    MissingKey { path: KeyPath },

    #[error("Value mismatch at '{path}': expected {expected}, got {actual}")]
    ValueMismatch {
        path: KeyPath,
        expected: Value,
        actual: Value,
    },

    #[error("Type mismatch at '{path}': expected a record, got {actual}")]
    TypeMismatch { path: KeyPath, actual: Value },
}

impl SubsetError {
    /// Dotted path of the offending key.
    pub fn path(&self) -> &KeyPath {
        match self {
            SubsetError::MissingKey { path }
            | SubsetError::ValueMismatch { path, .. }
            | SubsetError::TypeMismatch { path, .. } => path,
        }
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self, SubsetError::MissingKey { .. })
    }
}
