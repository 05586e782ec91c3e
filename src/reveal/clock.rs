use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use once_cell::sync::Lazy;

// Reference point for `SystemClock`.
static START: Lazy<Instant> = Lazy::new(Instant::now);

/// Time source driving a reveal.
pub trait Clock {
    /// Monotonic time since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Block until `now() >= deadline`.
    fn sleep_until(&self, deadline: Duration);
}

/// Wall-clock time, measured from the first use in the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        START.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Clock that only moves when told to. Sleeping jumps straight to the deadline.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_sleeps_forward_only() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(300));
        clock.sleep_until(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(300));
        clock.sleep_until(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn manual_clock_set_jumps_either_way() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(5));
        assert_eq!(clock.now(), Duration::from_secs(5));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(1_250));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        clock.sleep_until(a + Duration::from_millis(5));
        assert!(clock.now() >= a + Duration::from_millis(5));
    }
}
