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

//! Typed form of a synthetic series record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Record;

/// Metadata attached to every generated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub source: String,
    pub version: String,
}

impl SeriesMetadata {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("source".to_string(), Value::String(self.source.clone()));
        record.insert("version".to_string(), Value::String(self.version.clone()));
        record
    }
}

/// One point of a synthetic series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `test_{index}`
    pub id: String,
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// `index * 10`
    pub value: u64,
    pub metadata: SeriesMetadata,
}

impl SeriesPoint {
    /// RFC 3339 rendering of the timestamp with fixed microsecond precision.
    ///
    /// The fixed width keeps lexicographic order equal to chronological order.
    pub fn timestamp_string(&self) -> String {
        iso_timestamp::format(&self.timestamp)
    }

    /// Renders the point as `{id, timestamp, value, metadata}`.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::String(self.id.clone()));
        record.insert("timestamp".to_string(), Value::String(self.timestamp_string()));
        record.insert("value".to_string(), Value::from(self.value));
        record.insert("metadata".to_string(), Value::Object(self.metadata.to_record()));
        record
    }
}

mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn format(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
