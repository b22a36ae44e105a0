//! Decorative "live" state machines and the interval guard that drives them.
//!
//! Nothing here reads a clock. Views hand a [`ScopedInterval`] a concrete
//! [`IntervalScheduler`] (the browser one in the app, a manual one in tests)
//! and the guard cancels its timer when stopped or dropped.

use std::time::Duration;

use crate::error::DashboardError;

/// Blinking LIVE chip plus a running tick counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveTick {
    live: bool,
    ticks: u64,
}

impl LiveTick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.live = !self.live;
        self.ticks += 1;
    }

    /// `true` on odd ticks: the chip renders filled.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Uniform samples in `[0, 1)`.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

/// Random-walk for the grid load readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadJitter {
    value: f64,
    min: f64,
    max: f64,
    enabled: bool,
}

impl LoadJitter {
    /// Largest single step in either direction is half of this.
    pub const SPAN: f64 = 5.0;

    /// Starts at `initial` clamped into `[min, max]`. Bounds must be finite
    /// with `min < max`.
    pub fn new(initial: f64, min: f64, max: f64) -> Result<Self, DashboardError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(DashboardError::InvalidConfig(format!(
                "load bounds [{}, {}] are not an increasing finite range",
                min, max
            )));
        }
        if !initial.is_finite() {
            return Err(DashboardError::InvalidConfig(format!(
                "initial load {} is not finite",
                initial
            )));
        }
        Ok(Self {
            value: initial.clamp(min, max),
            min,
            max,
            enabled: true,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Applies one step when enabled and returns the new value.
    pub fn advance<J: JitterSource + ?Sized>(&mut self, source: &mut J) -> f64 {
        if self.enabled {
            let step = (source.next_unit() - 0.5) * Self::SPAN;
            self.value = (self.value + step).clamp(self.min, self.max);
        }
        self.value
    }

    /// Readout colour: red above 90, amber above 75, green otherwise.
    pub fn color(&self) -> &'static str {
        if self.value > 90.0 {
            "#dc2626"
        } else if self.value > 75.0 {
            "#f59e0b"
        } else {
            "#059669"
        }
    }
}

/// Recurring timer facility.
pub trait IntervalScheduler {
    type Handle;

    fn schedule(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<Self::Handle, DashboardError>;

    fn cancel(&self, handle: Self::Handle);
}

/// Owns one recurring timer and cancels it on [`stop`](Self::stop) or drop.
pub struct ScopedInterval<S: IntervalScheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
    period: Duration,
}

impl<S: IntervalScheduler> ScopedInterval<S> {
    pub fn start<F>(scheduler: S, period: Duration, callback: F) -> Result<Self, DashboardError>
    where
        F: Fn() + 'static,
    {
        if period.is_zero() {
            return Err(DashboardError::Scheduler(
                "interval period must be non-zero".to_string(),
            ));
        }
        let handle = scheduler.schedule(period, Box::new(callback))?;
        log::debug!("interval started, period {:?}", period);
        Ok(Self {
            scheduler,
            handle: Some(handle),
            period,
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
            log::debug!("interval stopped, period {:?}", self.period);
        }
    }
}

impl<S: IntervalScheduler> Drop for ScopedInterval<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl JitterSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_tick_flips_and_counts() {
        let mut tick = LiveTick::new();
        assert!(!tick.is_live());
        tick.tick();
        assert!(tick.is_live());
        tick.tick();
        assert!(!tick.is_live());
        assert_eq!(tick.ticks(), 2);
    }

    #[test]
    fn test_jitter_step() {
        let mut load = LoadJitter::new(78.0, 60.0, 95.0).unwrap();
        assert_eq!(load.advance(&mut Fixed(1.0)), 80.5);
        assert_eq!(load.advance(&mut Fixed(0.0)), 78.0);
        assert_eq!(load.advance(&mut Fixed(0.5)), 78.0);
    }

    #[test]
    fn test_disabled_jitter_holds() {
        let mut load = LoadJitter::new(78.0, 60.0, 95.0).unwrap();
        load.set_enabled(false);
        assert_eq!(load.advance(&mut Fixed(1.0)), 78.0);
    }

    #[test]
    fn test_load_colors() {
        assert_eq!(LoadJitter::new(95.0, 60.0, 95.0).unwrap().color(), "#dc2626");
        assert_eq!(LoadJitter::new(78.0, 60.0, 95.0).unwrap().color(), "#f59e0b");
        assert_eq!(LoadJitter::new(60.0, 60.0, 95.0).unwrap().color(), "#059669");
    }
}
