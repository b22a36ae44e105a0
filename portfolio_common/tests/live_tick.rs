use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use portfolio_common::{
    DashboardConfig, DashboardError, IntervalScheduler, JitterSource, LiveTick, LoadJitter,
    ScopedInterval,
};

/// In-memory timer wheel: tests fire every live timer by hand.
#[derive(Clone, Default)]
struct ManualScheduler {
    timers: Rc<RefCell<Vec<Option<Box<dyn Fn()>>>>>,
}

impl ManualScheduler {
    fn fire(&self) {
        for timer in self.timers.borrow().iter().flatten() {
            timer();
        }
    }

    fn active(&self) -> usize {
        self.timers.borrow().iter().filter(|t| t.is_some()).count()
    }
}

impl IntervalScheduler for ManualScheduler {
    type Handle = usize;

    fn schedule(
        &self,
        _period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<usize, DashboardError> {
        let mut timers = self.timers.borrow_mut();
        timers.push(Some(callback));
        Ok(timers.len() - 1)
    }

    fn cancel(&self, handle: usize) {
        if let Some(slot) = self.timers.borrow_mut().get_mut(handle) {
            *slot = None;
        }
    }
}

struct Sequence(Vec<f64>, usize);

impl JitterSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        let value = self.0[self.1 % self.0.len()];
        self.1 += 1;
        value
    }
}

fn ticking(scheduler: &ManualScheduler) -> (Rc<Cell<LiveTick>>, ScopedInterval<ManualScheduler>) {
    let state = Rc::new(Cell::new(LiveTick::new()));
    let target = Rc::clone(&state);
    let guard = ScopedInterval::start(scheduler.clone(), Duration::from_secs(3), move || {
        let mut tick = target.get();
        tick.tick();
        target.set(tick);
    })
    .unwrap();
    (state, guard)
}

#[test]
fn test_live_flag_flips_every_tick() {
    let scheduler = ManualScheduler::default();
    let (state, _guard) = ticking(&scheduler);

    let mut seen = Vec::new();
    for _ in 0..4 {
        scheduler.fire();
        seen.push(state.get().is_live());
    }
    assert_eq!(seen, vec![true, false, true, false]);
    assert_eq!(state.get().ticks(), 4);
}

#[test]
fn test_no_callback_after_stop() {
    let scheduler = ManualScheduler::default();
    let (state, mut guard) = ticking(&scheduler);
    scheduler.fire();
    guard.stop();
    assert!(!guard.is_running());
    scheduler.fire();
    scheduler.fire();
    assert_eq!(state.get().ticks(), 1);
}

#[test]
fn test_no_callback_after_drop() {
    let scheduler = ManualScheduler::default();
    let (state, guard) = ticking(&scheduler);
    assert_eq!(scheduler.active(), 1);
    drop(guard);
    assert_eq!(scheduler.active(), 0);
    scheduler.fire();
    assert_eq!(state.get().ticks(), 0);
}

#[test]
fn test_stop_then_drop_cancels_once() {
    let scheduler = ManualScheduler::default();
    let (_state, mut guard) = ticking(&scheduler);
    guard.stop();
    guard.stop();
    drop(guard);
    assert_eq!(scheduler.active(), 0);
}

#[test]
fn test_zero_period_is_rejected() {
    let scheduler = ManualScheduler::default();
    let result = ScopedInterval::start(scheduler.clone(), Duration::ZERO, || {});
    assert!(matches!(result, Err(DashboardError::Scheduler(_))));
    assert_eq!(scheduler.active(), 0);
}

#[test]
fn test_jitter_stays_in_bounds() {
    let config = DashboardConfig::default();
    let sources = [
        vec![1.0],
        vec![0.0],
        vec![0.99, 0.98, 0.97],
        vec![0.5, 0.01, 0.73, 0.2, 0.99, 0.41],
    ];
    for values in sources {
        let mut load = config.load_jitter().unwrap();
        let mut source = Sequence(values, 0);
        for _ in 0..200 {
            let value = load.advance(&mut source);
            assert!((config.load_min..=config.load_max).contains(&value), "{}", value);
        }
    }
}

#[test]
fn test_jitter_saturates_at_bounds() {
    let mut load = LoadJitter::new(78.0, 60.0, 95.0).unwrap();
    let mut up = Sequence(vec![1.0], 0);
    for _ in 0..20 {
        load.advance(&mut up);
    }
    assert_eq!(load.value(), 95.0);
    let mut down = Sequence(vec![0.0], 0);
    for _ in 0..40 {
        load.advance(&mut down);
    }
    assert_eq!(load.value(), 60.0);
}

#[test]
fn test_jitter_driven_by_interval() {
    let scheduler = ManualScheduler::default();
    let load = Rc::new(RefCell::new(LoadJitter::new(78.0, 60.0, 95.0).unwrap()));
    let source = Rc::new(RefCell::new(Sequence(vec![1.0], 0)));
    let (target, rng) = (Rc::clone(&load), Rc::clone(&source));
    let guard = ScopedInterval::start(scheduler.clone(), Duration::from_secs(2), move || {
        target.borrow_mut().advance(&mut *rng.borrow_mut());
    })
    .unwrap();

    scheduler.fire();
    assert_eq!(load.borrow().value(), 80.5);
    load.borrow_mut().set_enabled(false);
    scheduler.fire();
    assert_eq!(load.borrow().value(), 80.5);
    drop(guard);
}

#[test]
fn test_jitter_rejects_inverted_bounds() {
    let err = LoadJitter::new(78.0, 95.0, 60.0).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
    assert!(LoadJitter::new(78.0, 60.0, f64::NAN).is_err());
    assert!(LoadJitter::new(78.0, 60.0, 60.0).is_err());
    assert!(LoadJitter::new(f64::NAN, 60.0, 95.0).is_err());
}

#[test]
fn test_unvalidated_config_jitter_is_an_error() {
    let config = DashboardConfig {
        load_min: 95.0,
        load_max: 60.0,
        ..Default::default()
    };
    let err = config.load_jitter().unwrap_err();
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}
