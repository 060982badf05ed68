//! Repeating timers.
//!
//! Components never touch a clock directly. They ask a [`Scheduler`] for a
//! repeating interval and get back a [`TimerHandle`]; the host later delivers
//! ticks tagged with that handle. A tick carrying a handle that is no longer
//! live is stale and must be ignored by the receiver.
//!
//! [`IntervalTimers`] is the in-process implementation: a virtual clock that
//! the host advances by wall-clock deltas (or tests advance by hand).

use std::time::Duration;

/// Shortest period an interval may have. Guards `advance` against a zero
/// period spinning forever.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Opaque identity of one scheduled interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw id. Schedulers other than [`IntervalTimers`] mint their
    /// handles with this.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Schedules and cancels repeating intervals.
pub trait Scheduler {
    /// Start a repeating interval whose first tick is one `period` from now.
    fn start_interval(&mut self, period: Duration) -> TimerHandle;

    /// Cancel an interval. Cancelling an unknown or already-cancelled handle
    /// is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Interval {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
}

/// Virtual-clock interval scheduler.
#[derive(Debug, Default)]
pub struct IntervalTimers {
    now: Duration,
    next_id: u64,
    intervals: Vec<Interval>,
}

impl IntervalTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.intervals.iter().any(|i| i.handle == handle)
    }

    pub fn live_count(&self) -> usize {
        self.intervals.len()
    }

    /// Time until the earliest pending tick, if any interval is live.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.intervals
            .iter()
            .map(|i| i.next_due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward by `dt` and return every tick that came due,
    /// in due-time order. An interval that missed several periods yields one
    /// tick per period.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        self.now += dt;

        let mut fired: Vec<(Duration, TimerHandle)> = Vec::new();
        for interval in &mut self.intervals {
            while interval.next_due <= self.now {
                fired.push((interval.next_due, interval.handle));
                interval.next_due += interval.period;
            }
        }
        fired.sort_by_key(|(due, handle)| (*due, *handle));
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Scheduler for IntervalTimers {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.intervals.push(Interval {
            handle,
            period,
            next_due: self.now + period,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}
