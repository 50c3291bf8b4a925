use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Fixed time budget for one quiz.
pub const QUIZ_MINUTES: i64 = 10;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock for simulating a quiz that runs
/// past its deadline.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
            step: Duration::zero(),
        }
    }

    /// Every read of the clock advances it by `step` afterwards.
    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.now.get();
        self.now.set(current + self.step);
        current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Deadline {
    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            ends_at: started_at + Duration::minutes(QUIZ_MINUTES),
        }
    }

    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.ends_at
    }
}

/// Whole minutes elapsed, rounded down.
pub fn elapsed_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    to.signed_duration_since(from).num_minutes().max(0)
}

pub fn format_minutes(minutes: i64) -> String {
    format!("{} minute(s)", minutes)
}
