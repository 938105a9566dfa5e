use std::time::Duration;

use keyframe::functions::{EaseOutCubic, EaseOutQuad, Linear};
use keyframe::EasingFunction;
use overview_config::Curve as CurveConfig;

mod clock;

pub use clock::Clock;

/// Eased transition of a single value.
///
/// An animation has no callbacks. Its owner samples [`Animation::value`] when it needs the
/// current value and checks [`Animation::is_done`] once per frame to finish the transition.
/// Replacing the animation stored in a slot is how an in-flight transition gets cancelled.
#[derive(Debug, Clone)]
pub struct Animation {
    from: f64,
    to: f64,
    duration: Duration,
    start_time: Duration,
    curve: Curve,
    clock: Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseOutExpo,
}

impl Animation {
    pub fn new(clock: Clock, from: f64, to: f64, config: overview_config::Animation) -> Self {
        let duration = if config.off || clock.should_complete_instantly() {
            Duration::ZERO
        } else {
            Duration::from_millis(u64::from(config.duration_ms))
        };

        Self {
            from,
            to,
            duration,
            start_time: clock.now(),
            curve: Curve::from(config.curve),
            clock,
        }
    }

    /// Restarts the animation toward new values, keeping the timing parameters.
    pub fn restarted(&self, from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            start_time: self.clock.now(),
            clock: self.clock.clone(),
            ..*self
        }
    }

    pub fn is_done(&self) -> bool {
        self.clock.now() >= self.start_time + self.duration
    }

    pub fn value(&self) -> f64 {
        let passed = self.clock.now().saturating_sub(self.start_time);
        if passed >= self.duration {
            return self.to;
        }

        let x = passed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.curve.y(x)
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shifts both ends of the animation.
    pub fn offset(&mut self, delta: f64) {
        self.from += delta;
        self.to += delta;
    }
}

impl Curve {
    pub fn y(self, x: f64) -> f64 {
        match self {
            Curve::Linear => Linear.y(x),
            Curve::EaseOutQuad => EaseOutQuad.y(x),
            Curve::EaseOutCubic => EaseOutCubic.y(x),
            Curve::EaseOutExpo => 1. - 2f64.powf(-10. * x),
        }
    }
}

impl From<CurveConfig> for Curve {
    fn from(value: CurveConfig) -> Self {
        match value {
            CurveConfig::Linear => Curve::Linear,
            CurveConfig::EaseOutQuad => Curve::EaseOutQuad,
            CurveConfig::EaseOutCubic => Curve::EaseOutCubic,
            CurveConfig::EaseOutExpo => Curve::EaseOutExpo,
        }
    }
}
