// src/lib.rs
//! GPS Status Monitor Library
//!
//! Polls a GPS demo server's `/gps` REST endpoint on a fixed interval and
//! projects each status record onto a display. Also ships the stub server
//! that produces simulated records.

pub mod config;
pub mod display;
pub mod error;
pub mod gps;
pub mod monitor;
pub mod poller;
pub mod server;

// Re-export main types for convenience
pub use config::MonitorConfig;
pub use display::{Field, StatusDisplay};
pub use error::{GpsError, Result};
pub use gps::{FetchOutcome, FixType, GpsStatus, HttpStatusSource, StatusSource};
pub use monitor::GpsMonitor;
pub use poller::StatusPoller;
