// src/poller.rs
//! Fetch-and-render cycle and the repeating poll timer

use crate::{
    display::{refresh_page, StatusDisplay},
    error::{GpsError, Result},
    gps::{FetchOutcome, StatusSource},
};
use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

/// Default time between polls
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Alert text for a non-200 response
pub fn failure_message(status: u16) -> String {
    format!("Request failed.  Returned status of {}", status)
}

/// Fetch the current status once and project it onto `display`.
///
/// A non-200 response raises one alert and leaves every field untouched.
/// Transport and parse errors are returned to the caller without touching the
/// display.
pub async fn get_gps<S, D>(source: &S, display: &Mutex<D>) -> Result<()>
where
    S: StatusSource + ?Sized,
    D: StatusDisplay,
{
    let outcome = source.fetch().await?;

    let mut display = display.lock().unwrap_or_else(PoisonError::into_inner);
    match outcome {
        FetchOutcome::Status(status) => refresh_page(&mut *display, &status)?,
        FetchOutcome::Rejected(code) => display.alert(&failure_message(code))?,
    }
    display.flush()
}

/// Owns the status source, the shared display and at most one poll timer
pub struct StatusPoller<S, D> {
    source: Arc<S>,
    display: Arc<Mutex<D>>,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl<S, D> StatusPoller<S, D>
where
    S: StatusSource + 'static,
    D: StatusDisplay + Send + 'static,
{
    pub fn new(source: S, display: D, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(GpsError::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            source: Arc::new(source),
            display: Arc::new(Mutex::new(display)),
            interval,
            timer: None,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shared handle to the display
    pub fn display(&self) -> Arc<Mutex<D>> {
        Arc::clone(&self.display)
    }

    /// Run a single fetch-and-render cycle
    pub async fn poll(&self) -> Result<()> {
        get_gps(self.source.as_ref(), self.display.as_ref()).await
    }

    /// Cancel any pending timer and arm a new repeating one.
    ///
    /// The first tick fires one full interval after arming.
    pub fn set_timer(&mut self) {
        self.cancel_timer();

        let source = Arc::clone(&self.source);
        let display = Arc::clone(&self.display);
        let period = self.interval;

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!("Poll timer fired");
                if let Err(e) = get_gps(source.as_ref(), display.as_ref()).await {
                    warn!("Failed to refresh GPS status: {}", e);
                }
            }
        }));
        debug!("Poll timer armed every {:?}", period);
    }

    /// Poll once, then arm the timer
    pub async fn start(&mut self) {
        info!("Polling every {:?}", self.interval);
        if let Err(e) = self.poll().await {
            warn!("Failed to refresh GPS status: {}", e);
        }
        self.set_timer();
    }

    /// Cancel the timer
    pub fn stop(&mut self) {
        if self.cancel_timer() {
            info!("Polling stopped");
        }
    }

    /// Whether a repeating timer is currently armed
    pub fn is_timer_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_timer(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl<S, D> Drop for StatusPoller<S, D> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::{memory::MemoryDisplay, Field},
        gps::GpsStatus,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a canned outcome and counts requests
    struct ScriptedSource {
        outcome: FetchOutcome,
        requests: Arc<AtomicUsize>,
    }

    impl ScriptedSource {
        fn new(outcome: FetchOutcome) -> (Self, Arc<AtomicUsize>) {
            let requests = Arc::new(AtomicUsize::new(0));
            let source = Self {
                outcome,
                requests: Arc::clone(&requests),
            };
            (source, requests)
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch(&self) -> Result<FetchOutcome> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(self.outcome.clone())
        }
    }

    struct UnreachableSource;

    #[async_trait]
    impl StatusSource for UnreachableSource {
        async fn fetch(&self) -> Result<FetchOutcome> {
            Err(GpsError::Other("connection refused".to_string()))
        }
    }

    fn status() -> GpsStatus {
        GpsStatus {
            latitude: Some(48.117),
            longitude: Some(11.517),
            siv: Some(9),
            fix: Some(3),
            ..GpsStatus::default()
        }
    }

    #[tokio::test]
    async fn test_success_refreshes_fields() {
        let (source, _) = ScriptedSource::new(FetchOutcome::Status(status()));
        let display = Mutex::new(MemoryDisplay::new());

        get_gps(&source, &display).await.unwrap();

        let display = display.lock().unwrap();
        assert_eq!(display.field(Field::Latitude), Some("48.117"));
        assert_eq!(display.field(Field::Fix), Some("3D"));
        assert_eq!(display.field(Field::Track), Some("Unknown"));
        assert!(display.alerts().is_empty());
        assert_eq!(display.flushes(), 1);
    }

    #[tokio::test]
    async fn test_rejected_raises_single_alert() {
        let (source, _) = ScriptedSource::new(FetchOutcome::Rejected(404));
        let display = Mutex::new(MemoryDisplay::new());

        get_gps(&source, &display).await.unwrap();

        let display = display.lock().unwrap();
        assert_eq!(display.alerts(), ["Request failed.  Returned status of 404"]);
        assert_eq!(display.field_writes(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_leaves_display_alone() {
        let display = Mutex::new(MemoryDisplay::new());

        assert!(get_gps(&UnreachableSource, &display).await.is_err());

        let display = display.lock().unwrap();
        assert!(display.alerts().is_empty());
        assert_eq!(display.field_writes(), 0);
        assert_eq!(display.flushes(), 0);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let (source, _) = ScriptedSource::new(FetchOutcome::Rejected(500));
        let result = StatusPoller::new(source, MemoryDisplay::new(), Duration::ZERO);
        assert!(matches!(result, Err(GpsError::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_polls_then_ticks_each_interval() {
        let (source, requests) = ScriptedSource::new(FetchOutcome::Status(status()));
        let mut poller = StatusPoller::new(source, MemoryDisplay::new(), DEFAULT_INTERVAL).unwrap();

        poller.start().await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);

        tokio::time::sleep(DEFAULT_INTERVAL / 2).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);

        tokio::time::sleep(DEFAULT_INTERVAL).await;
        assert_eq!(requests.load(Ordering::SeqCst), 2);

        tokio::time::sleep(DEFAULT_INTERVAL * 2).await;
        assert_eq!(requests.load(Ordering::SeqCst), 4);
        assert!(poller.is_timer_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_keeps_single_timer() {
        let (source, requests) = ScriptedSource::new(FetchOutcome::Status(status()));
        let interval = Duration::from_secs(2);
        let mut poller = StatusPoller::new(source, MemoryDisplay::new(), interval).unwrap();

        poller.set_timer();
        poller.set_timer();
        assert!(poller.is_timer_armed());

        tokio::time::sleep(interval * 3 + interval / 2).await;
        assert_eq!(requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let (source, requests) = ScriptedSource::new(FetchOutcome::Rejected(503));
        let interval = Duration::from_secs(1);
        let mut poller = StatusPoller::new(source, MemoryDisplay::new(), interval).unwrap();

        poller.set_timer();
        tokio::time::sleep(interval + interval / 2).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);

        poller.stop();
        assert!(!poller.is_timer_armed());

        tokio::time::sleep(interval * 5).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);

        let display = poller.display();
        let display = display.lock().unwrap();
        assert_eq!(display.alerts().len(), 1);
    }
}
