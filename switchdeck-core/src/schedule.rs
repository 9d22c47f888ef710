//! Deferred-execution capability — schedule a cancellable timer, drain due ones.
//!
//! The router arms at most one timer at a time, so implementations stay
//! small. [`ManualScheduler`] is a fake clock for deterministic tests;
//! [`WallClockScheduler`] compares against the monotonic clock and fits a
//! polling tick loop.

use std::time::{Duration, Instant};

/// Handle to a scheduled deferred transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Cancellable deferred execution. A timer either comes due through
/// [`Scheduler::next_due`] or is cancelled; it never expires on its own.
pub trait Scheduler {
    /// Arm a timer that comes due after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a timer. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Pop the next timer whose deadline has passed, in arming order.
    fn next_due(&mut self) -> Option<TimerHandle>;
}

/// Fake-clock scheduler: time only moves when [`ManualScheduler::advance`]
/// is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    armed: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers (due or not).
    pub fn armed(&self) -> usize {
        self.armed.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.armed.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|(h, _)| *h != handle);
    }

    fn next_due(&mut self) -> Option<TimerHandle> {
        let idx = self.armed.iter().position(|(_, deadline)| *deadline <= self.now)?;
        Some(self.armed.remove(idx).0)
    }
}

/// Monotonic-clock scheduler for real hosts. Due-ness is observed whenever
/// the host polls, matching a render-tick event loop.
#[derive(Debug, Default)]
pub struct WallClockScheduler {
    next_id: u64,
    armed: Vec<(TimerHandle, Instant)>,
}

impl WallClockScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WallClockScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.armed.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|(h, _)| *h != handle);
    }

    fn next_due(&mut self) -> Option<TimerHandle> {
        let now = Instant::now();
        let idx = self.armed.iter().position(|(_, deadline)| *deadline <= now)?;
        Some(self.armed.remove(idx).0)
    }
}
