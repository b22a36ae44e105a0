//! Browser timers and randomness behind the demo's live effects.

use std::time::Duration;

use leptos::prelude::*;
use portfolio_common::{DashboardError, IntervalScheduler, JitterSource, ScopedInterval};

/// `setInterval` through Leptos.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn schedule(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<IntervalHandle, DashboardError> {
        set_interval_with_handle(move || callback(), period)
            .map_err(|e| DashboardError::Scheduler(format!("{:?}", e)))
    }

    fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
    }
}

/// `Math.random()`.
pub struct MathRandom;

impl JitterSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Runs `callback` every `period` until the owning view is torn down.
pub fn use_interval(period: Duration, callback: impl Fn() + 'static) {
    match ScopedInterval::start(BrowserScheduler, period, callback) {
        Ok(guard) => on_cleanup(move || drop(guard)),
        Err(e) => log::error!("Failed to start interval: {}", e),
    }
}

/// Value of `f`, recomputed each time `tick` moves.
pub fn per_tick<T, F>(tick: Signal<u64>, f: F) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Memo::new(move |_| {
        tick.track();
        f()
    })
}

/// Decorative fill level for metric tiles, 0 to 100.
pub fn demo_fill(enabled: bool) -> f64 {
    if enabled {
        js_sys::Math::random() * 100.0
    } else {
        0.0
    }
}

/// Wall-clock time for alert source lines.
pub fn local_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_else(|| "??:??:??".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_per_tick_recomputes_only_on_tick() {
        let owner = Owner::new();
        owner.set();
        let tick = RwSignal::new(0u64);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = per_tick(tick.into(), move || counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(value.get(), 0);
        assert_eq!(value.get(), 0);
        tick.set(1);
        assert_eq!(value.get(), 1);
        tick.set(2);
        assert_eq!(value.get(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
