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

//! Linear interpolation of synthetic series points over a time range.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use super::{
    config::SeriesConfig,
    models::{SeriesMetadata, SeriesPoint},
};
use crate::{common::consts::SERIES_ID_PREFIX, Record};

/// Generates `count` records spread linearly over `[start_date, end_date)`.
///
/// Record `i` has id `test_{i}`, value `i * 10`, fixed metadata and the timestamp at
/// fraction `i / count` of the range. Missing dates default to the last 30 days ending
/// now. A `count` of zero yields an empty series.
pub fn generate_synthetic_series(
    count: usize,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Vec<Record> {
    generate_series_points(&SeriesConfig::new(count, start_date, end_date))
        .iter()
        .map(SeriesPoint::to_record)
        .collect()
}

/// Typed form of [`generate_synthetic_series`] driven by a full [`SeriesConfig`].
pub fn generate_series_points(config: &SeriesConfig) -> Vec<SeriesPoint> {
    let (start, end) = config.resolve_range(Utc::now());
    debug!(count = config.count, %start, %end, "generating synthetic series");

    let span = end.signed_duration_since(start);
    let metadata = SeriesMetadata {
        source: config.source.clone(),
        version: config.version.clone(),
    };

    (0..config.count)
        .map(|index| SeriesPoint {
            id: format!("{SERIES_ID_PREFIX}{index}"),
            timestamp: interpolate(start, span, index, config.count),
            value: index as u64 * 10,
            metadata: metadata.clone(),
        })
        .collect()
}

/// Returns `start + span * index / count`, rounded to the nearest microsecond.
///
/// Ties round to the even microsecond.
fn interpolate(
    start: DateTime<Utc>,
    span: TimeDelta,
    index: usize,
    count: usize,
) -> DateTime<Utc> {
    let span_micros = span.num_microseconds().unwrap_or(if span < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    });
    // |offset| <= |span_micros| because index < count.
    let offset = div_round_half_even(i128::from(span_micros) * index as i128, count as i128);
    start + TimeDelta::microseconds(offset as i64)
}

fn div_round_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let twice_remainder = 2 * numerator.rem_euclid(denominator);
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}
