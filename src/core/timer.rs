//! Stopwatch for timing spans of logger activity

use super::error::{LoggerError, Result};
use std::time::{Duration, Instant};

/// Records a start and stop instant and reports the span between them.
///
/// Reading the elapsed time before [`Timer::start`] has ever been called is a
/// usage error and yields [`LoggerError::TimerNotStarted`]. While the timer is
/// running the elapsed time is measured up to the present moment.
///
/// # Example
///
/// ```
/// use fanout_logger::Timer;
///
/// let mut timer = Timer::new();
/// assert!(timer.elapsed_microseconds().is_err());
///
/// timer.start();
/// timer.stop();
/// assert!(timer.elapsed_microseconds().unwrap() >= 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current instant as the start, discarding any earlier stop.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped = None;
    }

    /// Record the current instant as the stop.
    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }

    /// Forget both recorded instants.
    pub fn reset(&mut self) {
        self.started = None;
        self.stopped = None;
    }

    pub fn elapsed(&self) -> Result<Duration> {
        let started = self.started.ok_or(LoggerError::TimerNotStarted)?;
        let end = self.stopped.unwrap_or_else(Instant::now);
        Ok(end.saturating_duration_since(started))
    }

    pub fn elapsed_microseconds(&self) -> Result<f64> {
        Ok(self.elapsed()?.as_secs_f64() * 1_000_000.0)
    }
}
