//! Values that are either static or animating toward a target.

use crate::animation::Animation;

#[derive(Debug, Clone)]
pub enum AnimatedValue {
    /// The value is static.
    Static(f64),
    /// The value is animating toward a target.
    Animation(Animation),
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self::Static(value)
    }

    /// Returns the current value.
    pub fn current(&self) -> f64 {
        match self {
            AnimatedValue::Static(value) => *value,
            AnimatedValue::Animation(anim) => anim.value(),
        }
    }

    /// Returns the value once any ongoing animation completes.
    pub fn target(&self) -> f64 {
        match self {
            AnimatedValue::Static(value) => *value,
            AnimatedValue::Animation(anim) => anim.to(),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    pub fn is_animation_ongoing(&self) -> bool {
        matches!(self, Self::Animation(_))
    }

    /// Offsets the value by the given delta, retargeting an ongoing animation.
    pub fn offset(&mut self, delta: f64) {
        match self {
            AnimatedValue::Static(value) => *value += delta,
            AnimatedValue::Animation(anim) => anim.offset(delta),
        }
    }

    /// Replaces any ongoing animation with `anim`.
    pub fn animate_to(&mut self, anim: Animation) {
        *self = AnimatedValue::Animation(anim);
    }

    /// Collapses a finished animation into its final value.
    ///
    /// Returns `true` exactly once per animation, on the call that observes it done.
    pub fn settle(&mut self) -> bool {
        let AnimatedValue::Animation(anim) = self else {
            return false;
        };

        if !anim.is_done() {
            return false;
        }

        let to = anim.to();
        *self = AnimatedValue::Static(to);
        true
    }

    /// Stops any animation, keeping the current value.
    pub fn stop_anim(&mut self) {
        *self = AnimatedValue::Static(self.current());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::Clock;

    #[test]
    fn static_value() {
        let v = AnimatedValue::new(42.0);
        assert!(v.is_static());
        assert!(!v.is_animation_ongoing());
        assert_eq!(v.current(), 42.0);
        assert_eq!(v.target(), 42.0);
    }

    #[test]
    fn offset_static() {
        let mut v = AnimatedValue::new(10.0);
        v.offset(5.0);
        assert_eq!(v.current(), 15.0);
    }

    #[test]
    fn settle_reports_completion_once() {
        let mut clock = Clock::with_time(Duration::ZERO);
        let anim = Animation::new(clock.clone(), 0., 1., overview_config::Animation::default());
        let mut v = AnimatedValue::new(0.);
        v.animate_to(anim);

        assert!(!v.settle());
        clock.set_unadjusted(Duration::from_millis(250));
        assert!(v.settle());
        assert!(!v.settle());
        assert_eq!(v.current(), 1.);
        assert!(v.is_static());
    }
}
