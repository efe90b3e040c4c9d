// src/display/mod.rs
//! Display targets for the status board

pub mod memory;
pub mod terminal;

use crate::{error::Result, gps::GpsStatus};
use std::fmt;

/// Named elements of the status board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Time,
    Latitude,
    Longitude,
    Elevation,
    Speed,
    Track,
    Siv,
    Pdop,
    Hdop,
    Vdop,
    Fix,
}

impl Field {
    /// Every field, in board order
    pub const ALL: [Field; 12] = [
        Field::Date,
        Field::Time,
        Field::Latitude,
        Field::Longitude,
        Field::Elevation,
        Field::Speed,
        Field::Track,
        Field::Siv,
        Field::Pdop,
        Field::Hdop,
        Field::Vdop,
        Field::Fix,
    ];

    /// Element id, identical to the JSON key
    pub fn id(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Elevation => "elevation",
            Field::Speed => "speed",
            Field::Track => "track",
            Field::Siv => "siv",
            Field::Pdop => "pdop",
            Field::Hdop => "hdop",
            Field::Vdop => "vdop",
            Field::Fix => "fix",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
            Field::Elevation => "Elevation (m)",
            Field::Speed => "Speed",
            Field::Track => "Track (deg)",
            Field::Siv => "Satellites",
            Field::Pdop => "PDOP",
            Field::Hdop => "HDOP",
            Field::Vdop => "VDOP",
            Field::Fix => "Fix",
        }
    }

    /// Text this field shows for `status`
    pub fn text(&self, status: &GpsStatus) -> String {
        match self {
            Field::Date => GpsStatus::format_value(status.date.as_ref()),
            Field::Time => GpsStatus::format_value(status.time.as_ref()),
            Field::Latitude => GpsStatus::format_value(status.latitude.as_ref()),
            Field::Longitude => GpsStatus::format_value(status.longitude.as_ref()),
            Field::Elevation => GpsStatus::format_value(status.elevation.as_ref()),
            Field::Speed => GpsStatus::format_value(status.speed.as_ref()),
            Field::Track => GpsStatus::format_value(status.track.as_ref()),
            Field::Siv => GpsStatus::format_value(status.siv.as_ref()),
            Field::Pdop => GpsStatus::format_value(status.pdop.as_ref()),
            Field::Hdop => GpsStatus::format_value(status.hdop.as_ref()),
            Field::Vdop => GpsStatus::format_value(status.vdop.as_ref()),
            Field::Fix => status.fix_description().to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A surface the poller writes into
pub trait StatusDisplay {
    /// Overwrite the text of one field
    fn set_field(&mut self, field: Field, text: &str) -> Result<()>;

    /// Surface a user-facing alert
    fn alert(&mut self, message: &str) -> Result<()>;

    /// Push pending changes to the output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Write every field of `status` into `display`
pub fn refresh_page<D: StatusDisplay + ?Sized>(display: &mut D, status: &GpsStatus) -> Result<()> {
    for field in Field::ALL {
        display.set_field(field, &field.text(status))?;
    }
    Ok(())
}
