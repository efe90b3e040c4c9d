// src/gps/simulated.rs
//! Random status records for the demo server

use super::status::GpsStatus;
use chrono::Local;
use rand::Rng;

/// Produces a fresh random record on every call, stamped with local time
#[derive(Debug, Clone, Default)]
pub struct SimulatedGps;

impl SimulatedGps {
    pub fn new() -> Self {
        Self
    }

    pub fn sample(&self) -> GpsStatus {
        let mut rng = rand::rng();
        let now = Local::now();

        GpsStatus {
            date: Some(now.format("%Y-%m-%d").to_string()),
            time: Some(now.format("%H:%M:%S").to_string()),
            latitude: Some(round_to(rng.random_range(-90.0..=90.0), 5)),
            longitude: Some(round_to(rng.random_range(-180.0..=180.0), 5)),
            elevation: Some(round_to(rng.random_range(-50.0..=100.0), 2)),
            speed: Some(round_to(rng.random_range(0.0..=100.0), 2)),
            track: Some(round_to(rng.random_range(0.0..=360.0), 2)),
            siv: Some(rng.random_range(0..33)),
            pdop: Some(round_to(rng.random_range(0.0..=99.0), 2)),
            hdop: Some(round_to(rng.random_range(0.0..=99.0), 2)),
            vdop: Some(round_to(rng.random_range(0.0..=99.0), 2)),
            fix: Some(rng.random_range(1..4)),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
