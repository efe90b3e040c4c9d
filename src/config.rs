// src/config.rs
//! Configuration management

use crate::error::{GpsError, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub server_url: String,
    pub endpoint: String,
    pub interval_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub serve_address: String,
    pub serve_port: u16,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            endpoint: "/gps".to_string(),
            interval_ms: 5000,
            request_timeout_ms: Some(10_000),
            serve_address: "127.0.0.1".to_string(),
            serve_port: 8080,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| GpsError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| GpsError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GpsError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents)
            .map_err(|e| GpsError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Config file path, `$HOME/.config/gps-status-monitor/config.json`
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| GpsError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("gps-status-monitor")
            .join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(GpsError::Config(
                "interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(GpsError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if !self.endpoint.starts_with('/') {
            return Err(GpsError::Config(format!(
                "endpoint must start with '/': {}",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Full URL that is polled
    pub fn status_url(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), self.endpoint)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Update the server that is polled
    pub fn update_server(&mut self, url: String) {
        self.server_url = url;
    }

    pub fn update_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Update the demo server bind address
    pub fn update_serve(&mut self, address: String, port: u16) {
        self.serve_address = address;
        self.serve_port = port;
    }
}
