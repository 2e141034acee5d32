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

//! Generation settings for synthetic series.

use chrono::{DateTime, TimeDelta, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    common::consts::{DEFAULT_LOOKBACK_DAYS, DEFAULT_SERIES_COUNT, SERIES_SOURCE, SERIES_VERSION},
    error::{TestkitError, TestkitResult},
};

/// Settings for [`generate_series_points`](super::generate_series_points).
///
/// Unset dates resolve against the current time when a series is generated: the end
/// defaults to now and the start to `lookback_days` before now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of records to generate.
    pub count: usize,
    /// Timestamp of the first record.
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound of the interpolated range (never reached by the last record).
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Length of the default range, in days.
    pub lookback_days: i64,
    /// Value of `metadata.source`.
    #[builder(setter(into))]
    pub source: String,
    /// Value of `metadata.version`.
    #[builder(setter(into))]
    pub version: String,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SERIES_COUNT,
            start_date: None,
            end_date: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            source: SERIES_SOURCE.to_string(),
            version: SERIES_VERSION.to_string(),
        }
    }
}

impl SeriesConfig {
    pub fn builder() -> SeriesConfigBuilder {
        SeriesConfigBuilder::default()
    }

    /// Creates a configuration with the given count and range, other fields defaulted.
    pub fn new(
        count: usize,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            count,
            start_date,
            end_date,
            ..Self::default()
        }
    }

    /// Parses a configuration from an inline JSON document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError::SerializationError`] for malformed JSON and
    /// [`TestkitError::ConfigError`] for a negative `lookback_days`.
    pub fn from_json_str(data: &str) -> TestkitResult<Self> {
        let config: Self = serde_json::from_str(data)?;
        if config.lookback_days < 0 {
            return Err(TestkitError::ConfigError(format!(
                "lookback_days must not be negative, was {}",
                config.lookback_days
            )));
        }
        Ok(config)
    }

    /// Resolves the `(start, end)` range against `now`.
    pub fn resolve_range(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = self.end_date.unwrap_or(now);
        let start = self.start_date.unwrap_or_else(|| {
            TimeDelta::try_days(self.lookback_days)
                .and_then(|lookback| now.checked_sub_signed(lookback))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        });
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = SeriesConfig::default();
        assert_eq!(config.count, 10);
        assert_eq!(config.lookback_days, 30);
        assert_eq!(config.source, "test");
        assert_eq!(config.version, "1.0");
        assert_eq!(config.start_date, None);
        assert_eq!(config.end_date, None);
    }

    #[rstest]
    fn test_builder() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = SeriesConfig::builder()
            .count(3usize)
            .start_date(start)
            .source("sensor")
            .build()
            .unwrap();

        assert_eq!(config.count, 3);
        assert_eq!(config.start_date, Some(start));
        assert_eq!(config.end_date, None);
        assert_eq!(config.source, "sensor");
        assert_eq!(config.version, "1.0");
    }

    #[rstest]
    fn test_resolve_range_defaults_to_lookback() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let (start, end) = SeriesConfig::default().resolve_range(now);

        assert_eq!(end, now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }

    #[rstest]
    fn test_resolve_range_keeps_explicit_dates() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();

        let config = SeriesConfig::new(5, Some(start), Some(end));
        assert_eq!(config.resolve_range(now), (start, end));
    }

    #[rstest]
    fn test_resolve_range_saturates_huge_lookback() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = SeriesConfig {
            lookback_days: i64::MAX,
            ..SeriesConfig::default()
        };

        let (start, _) = config.resolve_range(now);
        assert_eq!(start, DateTime::<Utc>::MIN_UTC);
    }

    #[rstest]
    fn test_from_json_str() {
        let config =
            SeriesConfig::from_json_str(r#"{"count": 4, "start_date": "2024-01-01T00:00:00Z"}"#)
                .unwrap();

        assert_eq!(config.count, 4);
        assert_eq!(
            config.start_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(config.lookback_days, 30);
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"count": -1}"#)]
    fn test_from_json_str_malformed(#[case] data: &str) {
        let err = SeriesConfig::from_json_str(data).unwrap_err();
        assert!(matches!(err, TestkitError::SerializationError(_)));
    }

    #[rstest]
    fn test_from_json_str_rejects_negative_lookback() {
        let err = SeriesConfig::from_json_str(r#"{"lookback_days": -2}"#).unwrap_err();
        assert!(matches!(err, TestkitError::ConfigError(_)));
    }
}
