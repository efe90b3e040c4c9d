// src/gps/http.rs
//! REST client for the `/gps` endpoint

use super::status::GpsStatus;
use crate::{
    config::MonitorConfig,
    error::{GpsError, Result},
};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Result of a single request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 200 with a parsed status record
    Status(GpsStatus),
    /// Any other HTTP status code
    Rejected(u16),
}

/// Anything that can produce the current GPS status on demand
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<FetchOutcome>;
}

/// Fetches status records with `GET <server>/gps`
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpStatusSource {
    /// Build a source that polls `url`
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| GpsError::Config(format!("Invalid status URL {}: {}", url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        Self::new(&config.status_url(), config.request_timeout())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<FetchOutcome> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", self.url, status);

        if status != StatusCode::OK {
            return Ok(FetchOutcome::Rejected(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(FetchOutcome::Status(GpsStatus::from_json(&body)?))
    }
}
