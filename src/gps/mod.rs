// src/gps/mod.rs
//! GPS status records and the sources that produce them

pub mod http;
pub mod simulated;
pub mod status;

pub use http::{FetchOutcome, HttpStatusSource, StatusSource};
pub use status::{FixType, GpsStatus};
