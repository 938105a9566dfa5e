use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared animation clock.
///
/// All animations of one overview sample the same clock, so that they advance in lockstep within
/// a frame. The clock can be slowed down (or sped up) with [`Clock::set_rate`], and it can be
/// driven manually with [`Clock::set_unadjusted`], which is what tests do.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    inner: Rc<RefCell<AdjustableClock>>,
}

#[derive(Debug)]
struct AdjustableClock {
    epoch: Instant,
    /// Manually set time; when `None`, monotonic time since `epoch` is used.
    unadjusted_override: Option<Duration>,
    /// Unadjusted time seen on the last query.
    last_seen_time: Duration,
    /// Accumulated adjusted time.
    current_time: Duration,
    rate: f64,
    complete_instantly: bool,
}

impl Default for AdjustableClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
            unadjusted_override: None,
            last_seen_time: Duration::ZERO,
            current_time: Duration::ZERO,
            rate: 1.,
            complete_instantly: false,
        }
    }
}

impl Clock {
    /// Creates a clock frozen at `time` until it is moved with [`Clock::set_unadjusted`].
    pub fn with_time(time: Duration) -> Self {
        let clock = AdjustableClock {
            unadjusted_override: Some(time),
            last_seen_time: time,
            current_time: time,
            ..AdjustableClock::default()
        };
        Self {
            inner: Rc::new(RefCell::new(clock)),
        }
    }

    /// Returns the current adjusted time.
    pub fn now(&self) -> Duration {
        self.inner.borrow_mut().now()
    }

    /// Returns the current time, ignoring the rate.
    pub fn now_unadjusted(&self) -> Duration {
        self.inner.borrow().unadjusted()
    }

    pub fn set_unadjusted(&mut self, time: Duration) {
        let mut inner = self.inner.borrow_mut();
        // Accumulate what passed at the old rate first.
        inner.now();
        inner.unadjusted_override = Some(time);
    }

    pub fn rate(&self) -> f64 {
        self.inner.borrow().rate
    }

    pub fn set_rate(&mut self, rate: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.now();
        inner.rate = rate.clamp(0., 1000.);
    }

    pub fn should_complete_instantly(&self) -> bool {
        self.inner.borrow().complete_instantly
    }

    pub fn set_complete_instantly(&mut self, value: bool) {
        self.inner.borrow_mut().complete_instantly = value;
    }
}

impl AdjustableClock {
    fn unadjusted(&self) -> Duration {
        self.unadjusted_override
            .unwrap_or_else(|| self.epoch.elapsed())
    }

    fn now(&mut self) -> Duration {
        let time = self.unadjusted();
        let delta = time.saturating_sub(self.last_seen_time);
        self.last_seen_time = time;

        if self.rate == 1. {
            self.current_time += delta;
        } else {
            self.current_time += delta.mul_f64(self.rate);
        }
        self.current_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_clock_moves_only_when_set() {
        let mut clock = Clock::with_time(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));

        clock.set_unadjusted(Duration::from_millis(30));
        assert_eq!(clock.now(), Duration::from_millis(30));
    }

    #[test]
    fn rate_scales_elapsed_time() {
        let mut clock = Clock::with_time(Duration::ZERO);
        clock.set_rate(0.5);
        clock.set_unadjusted(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(50));
        assert_eq!(clock.now_unadjusted(), Duration::from_millis(100));
    }

    #[test]
    fn clones_share_time() {
        let mut clock = Clock::with_time(Duration::ZERO);
        let other = clock.clone();
        clock.set_unadjusted(Duration::from_millis(5));
        assert_eq!(other.now(), Duration::from_millis(5));
    }
}
