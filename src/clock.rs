use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use time::{Duration, OffsetDateTime};

/// Source of the current wall-clock instant.
///
/// The cache compares expiry times against `now()` at every read, so the
/// clock is injected rather than read ambiently. Production code uses
/// [`SystemClock`]; tests use [`ManualClock`] to pin the expiry boundary.
pub trait Clock: Debug {
    fn now(&self) -> OffsetDateTime;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to. Intended for tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<OffsetDateTime>>,
}

impl ManualClock {
    pub fn starting_at(now: OffsetDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: OffsetDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use assertr::prelude::*;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn manual_clock_advances_only_when_told() {
        let clock = ManualClock::starting_at(datetime!(2024-03-01 12:00:00 UTC));
        assert_that(clock.now()).is_equal_to(datetime!(2024-03-01 12:00:00 UTC));

        clock.advance(Duration::seconds(30));
        assert_that(clock.now()).is_equal_to(datetime!(2024-03-01 12:00:30 UTC));
    }

    #[test]
    fn manual_clock_clones_share_state() {
        let clock = ManualClock::starting_at(datetime!(2024-03-01 12:00:00 UTC));
        let other = clock.clone();

        clock.advance(Duration::minutes(5));
        assert_that(other.now()).is_equal_to(datetime!(2024-03-01 12:05:00 UTC));
    }
}
