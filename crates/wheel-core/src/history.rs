//! Spin history.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// When a spin finished.
///
/// Spins recorded here are always `Parsed`. Imported histories may carry a
/// locale-formatted time such as `01.05.2024 12:00:00`; that text is kept
/// verbatim as `Raw` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTime {
    /// An RFC 3339 instant.
    Parsed(DateTime<Utc>),
    /// Text that is not RFC 3339.
    Raw(String),
}

impl RecordTime {
    /// The instant, if the time was RFC 3339.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            RecordTime::Parsed(dt) => Some(*dt),
            RecordTime::Raw(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for RecordTime {
    fn from(dt: DateTime<Utc>) -> Self {
        RecordTime::Parsed(dt)
    }
}

impl fmt::Display for RecordTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTime::Parsed(dt) => f.write_str(&iso_millis::format(dt)),
            RecordTime::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for RecordTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordTime {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => RecordTime::Parsed(dt.with_timezone(&Utc)),
            Err(_) => RecordTime::Raw(raw),
        })
    }
}

/// One completed spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// When the wheel stopped.
    pub timestamp: RecordTime,
    /// The winning label.
    pub winner: String,
}

impl SpinRecord {
    /// Record a winner at `timestamp`.
    pub fn new(timestamp: DateTime<Utc>, winner: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            winner: winner.into(),
        }
    }
}

/// Append-only log of completed spins, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpinHistory {
    records: Vec<SpinRecord>,
}

impl SpinHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: SpinRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SpinRecord] {
        &self.records
    }

    /// Records newest first, each with its 1-based spin number.
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &SpinRecord)> {
        self.records
            .iter()
            .enumerate()
            .rev()
            .map(|(i, r)| (i + 1, r))
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&SpinRecord> {
        self.records.last()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no spin has completed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<SpinRecord>> for SpinHistory {
    fn from(records: Vec<SpinRecord>) -> Self {
        Self { records }
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }
}
