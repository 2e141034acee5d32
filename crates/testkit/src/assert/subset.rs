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

//! Depth-first subset checker.

use serde_json::{Number, Value};
use tracing::{debug, trace};

use super::{error::SubsetError, path::KeyPath};
use crate::Record;

/// Checks that every key of `expected` is present in `actual` with an equal value.
///
/// Nested records in `expected` are matched recursively, so `expected` only has to
/// name the keys it cares about at each level. Any other value, arrays included, is
/// compared with [`json_eq`], so `10` and `10.0` are equal. Stops at the first violation, in `expected`'s key order.
///
/// # Errors
///
/// - [`SubsetError::MissingKey`] if a key of `expected` is absent from `actual`.
/// - [`SubsetError::TypeMismatch`] if `expected` holds a record where `actual` does not.
/// - [`SubsetError::ValueMismatch`] if two leaf values differ.
pub fn check_subset(actual: &Record, expected: &Record) -> Result<(), SubsetError> {
    check_record(actual, expected, &KeyPath::root()).map_err(log_failure)
}

/// Applies the [`check_subset`] rules to arbitrary JSON values.
///
/// When `expected` is not an object the two values are compared for equality.
///
/// # Errors
///
/// Returns the first [`SubsetError`] found, with paths relative to the given values.
pub fn check_json_subset(actual: &Value, expected: &Value) -> Result<(), SubsetError> {
    check_value(actual, expected, &KeyPath::root()).map_err(log_failure)
}

/// Panicking form of [`check_subset`] for use in tests.
///
/// # Panics
///
/// Panics with the checker's message when `actual` does not contain `expected`.
#[track_caller]
pub fn assert_subset(actual: &Record, expected: &Record) {
    if let Err(err) = check_subset(actual, expected) {
        panic!("{err}");
    }
}

/// Panicking form of [`check_json_subset`], used by [`assert_json_subset!`](crate::assert_json_subset).
///
/// # Panics
///
/// Panics with the checker's message when `actual` does not contain `expected`.
#[track_caller]
pub fn assert_json_value_subset(actual: &Value, expected: &Value) {
    if let Err(err) = check_json_subset(actual, expected) {
        panic!("{err}");
    }
}

/// Asserts that `actual` contains `expected`, converting both with `serde_json::to_value`.
///
/// ```
/// use datapoint_testkit::assert_json_subset;
/// use serde_json::json;
///
/// assert_json_subset!(
///     json!({"id": "test_0", "metadata": {"source": "test", "version": "1.0"}}),
///     json!({"metadata": {"source": "test"}}),
/// );
/// ```
#[macro_export]
macro_rules! assert_json_subset {
    ($actual:expr, $expected:expr $(,)?) => {{
        let actual = $crate::__serde_json::to_value(&$actual)
            .expect("actual value should serialize to JSON");
        let expected = $crate::__serde_json::to_value(&$expected)
            .expect("expected value should serialize to JSON");
        $crate::assert::assert_json_value_subset(&actual, &expected);
    }};
}

fn check_record(actual: &Record, expected: &Record, path: &KeyPath) -> Result<(), SubsetError> {
    for (key, expected_value) in expected {
        let key_path = path.child(key);
        let Some(actual_value) = actual.get(key) else {
            return Err(SubsetError::MissingKey { path: key_path });
        };
        check_value(actual_value, expected_value, &key_path)?;
    }
    Ok(())
}

fn check_value(actual: &Value, expected: &Value, path: &KeyPath) -> Result<(), SubsetError> {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => {
            trace!(path = %path, "descending into nested record");
            check_record(actual, expected, path)
        }
        (Value::Object(_), other) => Err(SubsetError::TypeMismatch {
            path: path.clone(),
            actual: other.clone(),
        }),
        _ if json_eq(actual, expected) => Ok(()),
        _ => Err(SubsetError::ValueMismatch {
            path: path.clone(),
            expected: expected.clone(),
            actual: actual.clone(),
        }),
    }
}

/// Structural JSON equality where numbers compare by value.
///
/// Integers compare exactly, any comparison involving a float goes through `f64`.
/// Arrays and objects must match element for element, with no subset semantics.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| json_eq(value, other)))
        }
        _ => a == b,
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    matches!((a.as_f64(), b.as_f64()), (Some(a), Some(b)) if a == b)
}

fn log_failure(err: SubsetError) -> SubsetError {
    debug!(path = %err.path(), "subset check failed: {err}");
    err
}
