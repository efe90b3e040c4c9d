// src/gps/status.rs
//! Status record returned by the `/gps` endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for a field the server did not provide
pub const UNKNOWN: &str = "Unknown";

/// GPS fix quality as reported in the `fix` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixType {
    NoFix,
    TwoD,
    ThreeD,
}

impl FixType {
    /// Map the wire code (1, 2 or 3) to a fix type
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(FixType::NoFix),
            2 => Some(FixType::TwoD),
            3 => Some(FixType::ThreeD),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FixType::NoFix => "No Fix",
            FixType::TwoD => "2D",
            FixType::ThreeD => "3D",
        }
    }
}

impl fmt::Display for FixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One snapshot of receiver state.
///
/// Every field is optional: servers seed the record with placeholders and fill
/// it in as messages arrive, so partial objects are normal. Extra keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpsStatus {
    pub date: Option<String>,
    pub time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    pub speed: Option<f64>,
    pub track: Option<f64>,
    pub siv: Option<u32>,
    pub pdop: Option<f64>,
    pub hdop: Option<f64>,
    pub vdop: Option<f64>,
    pub fix: Option<u8>,
}

impl GpsStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a status record from a JSON response body
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn fix_type(&self) -> Option<FixType> {
        self.fix.and_then(FixType::from_code)
    }

    /// Fix description, `Unknown` for a missing or out-of-range code
    pub fn fix_description(&self) -> &'static str {
        self.fix_type().map_or(UNKNOWN, |fix| fix.description())
    }

    /// Format an optional value the way it appears on the status board
    pub fn format_value<T: fmt::Display>(value: Option<&T>) -> String {
        match value {
            Some(val) => val.to_string(),
            None => UNKNOWN.to_string(),
        }
    }
}
