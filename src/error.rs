// src/error.rs
//! Error types for the GPS status monitor

use std::fmt;

pub type Result<T> = std::result::Result<T, GpsError>;

#[derive(Debug)]
pub enum GpsError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Config(String),
    Server(String),
    Other(String),
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::Io(e) => write!(f, "IO error: {}", e),
            GpsError::Http(e) => write!(f, "HTTP error: {}", e),
            GpsError::Json(e) => write!(f, "JSON error: {}", e),
            GpsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GpsError::Server(msg) => write!(f, "Server error: {}", msg),
            GpsError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpsError::Io(e) => Some(e),
            GpsError::Http(e) => Some(e),
            GpsError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GpsError {
    fn from(error: std::io::Error) -> Self {
        GpsError::Io(error)
    }
}

impl From<reqwest::Error> for GpsError {
    fn from(error: reqwest::Error) -> Self {
        GpsError::Http(error)
    }
}

impl From<serde_json::Error> for GpsError {
    fn from(error: serde_json::Error) -> Self {
        GpsError::Json(error)
    }
}

impl From<rocket::Error> for GpsError {
    fn from(error: rocket::Error) -> Self {
        GpsError::Server(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GpsError::Config("interval must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: interval must be greater than zero"
        );

        let err: GpsError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.to_string(), "IO error: boom");
    }

    #[test]
    fn test_json_source_is_kept() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GpsError::from(parse_err);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
