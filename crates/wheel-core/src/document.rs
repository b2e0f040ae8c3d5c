//! Portable session documents.
//!
//! Export writes every field. Import is deliberately lopsided: items and
//! speed are always replaced (falling back to an empty list and normal
//! speed), while history and spin count are only replaced when the document
//! carries them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{WheelError, WheelResult};
use crate::history::{SpinRecord, iso_millis};
use crate::spin::SpinSpeed;

/// File name prefix shared by session and image exports.
pub const EXPORT_PREFIX: &str = "decision-wheel";

/// The exported form of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// Option labels in wheel order.
    pub items: Vec<String>,
    /// Speed multiplier.
    pub spin_speed: f64,
    /// When the document was written.
    #[serde(serialize_with = "iso_millis::serialize")]
    pub timestamp: DateTime<Utc>,
    /// Winner of the last completed spin, if it is still on display.
    pub winner: Option<String>,
    /// Spins started.
    pub spin_count: u64,
    /// Completed spins, oldest first.
    pub spin_history: Vec<SpinRecord>,
}

impl SessionDocument {
    /// Encode as compact JSON.
    pub fn to_json(&self) -> WheelResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A parsed import document. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportedSession {
    /// Option labels.
    pub items: Option<Vec<String>>,
    /// Speed multiplier.
    pub spin_speed: Option<f64>,
    /// Completed spins.
    pub spin_history: Option<Vec<SpinRecord>>,
    /// Spins started.
    pub spin_count: Option<u64>,
}

impl ImportedSession {
    /// Parse a document. Anything that is not a JSON object of the expected
    /// shape is a [`WheelError::MalformedSession`].
    pub fn parse(text: &str) -> WheelResult<Self> {
        serde_json::from_str(text).map_err(WheelError::MalformedSession)
    }

    /// The speed to apply: missing or zero means normal, and an unknown
    /// multiplier is treated as normal.
    pub fn speed(&self) -> SpinSpeed {
        match self.spin_speed {
            None => SpinSpeed::Normal,
            Some(v) if v == 0.0 => SpinSpeed::Normal,
            Some(v) => SpinSpeed::from_multiplier(v).unwrap_or_else(|| {
                warn!(multiplier = v, "unknown spin speed in import; using normal");
                SpinSpeed::Normal
            }),
        }
    }
}

/// Dated file name for an export, e.g. `decision-wheel-2024-05-01.json`.
pub fn export_filename(now: DateTime<Utc>, extension: &str) -> String {
    format!("{EXPORT_PREFIX}-{}.{extension}", now.format("%Y-%m-%d"))
}
