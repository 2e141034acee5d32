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

//! Default values shared by the response and series constructors.

/// Status code used when a mock response is built without one.
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Number of records produced by the default synthetic series.
pub const DEFAULT_SERIES_COUNT: usize = 10;

/// Span covered by the default series, ending now.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Value of `metadata.source` on generated records.
pub const SERIES_SOURCE: &str = "test";

/// Value of `metadata.version` on generated records.
pub const SERIES_VERSION: &str = "1.0";

/// Prefix of generated record ids, followed by the record index.
pub const SERIES_ID_PREFIX: &str = "test_";

/// Rendering of the empty key path in diagnostics.
pub const ROOT_PATH: &str = "<root>";
