// src/monitor.rs
//! Main GPS status monitor coordination

use crate::{
    config::MonitorConfig,
    display::terminal::TerminalDisplay,
    error::Result,
    gps::HttpStatusSource,
    poller::StatusPoller,
};
use std::sync::PoisonError;
use tracing::info;

/// Polls the configured server and renders into the terminal until Ctrl+C
pub struct GpsMonitor {
    config: MonitorConfig,
}

impl GpsMonitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub async fn run(&self) -> Result<()> {
        let source = HttpStatusSource::from_config(&self.config)?;
        info!("Polling {} every {:?}", source.url(), self.config.interval());

        let mut display = TerminalDisplay::stdout(source.url().as_str());
        display.enter()?;

        let mut poller = StatusPoller::new(source, display, self.config.interval())?;
        poller.start().await;

        let signal = tokio::signal::ctrl_c().await;
        poller.stop();

        let display = poller.display();
        let mut display = display.lock().unwrap_or_else(PoisonError::into_inner);
        display.leave()?;

        signal?;
        Ok(())
    }
}
