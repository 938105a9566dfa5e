//! Continuous scroll position across workspaces.

use crate::animation::{Animation, Clock};
use crate::layout::animated_value::AnimatedValue;

/// Scroll model of one workspaces view.
///
/// The value is a fractional workspace index in `[lower, upper - page_size]`. The range is
/// `[0, workspace_count]` with a page size of one workspace, so the largest reachable value is the
/// index of the last workspace.
#[derive(Debug)]
pub struct ScrollAdjustment {
    value: AnimatedValue,
    upper: AnimatedValue,
    lower: f64,
    page_size: f64,
}

impl ScrollAdjustment {
    pub fn new(value: f64, upper: f64) -> Self {
        let mut adj = Self {
            value: AnimatedValue::new(0.),
            upper: AnimatedValue::new(upper),
            lower: 0.,
            page_size: 1.,
        };
        adj.set_value(value);
        adj
    }

    pub fn value(&self) -> f64 {
        self.value.current()
    }

    pub fn target_value(&self) -> f64 {
        self.value.target()
    }

    pub fn upper(&self) -> f64 {
        self.upper.current()
    }

    pub fn target_upper(&self) -> f64 {
        self.upper.target()
    }

    /// Whether the value is being tweened programmatically.
    pub fn is_animating_value(&self) -> bool {
        self.value.is_animation_ongoing()
    }

    pub fn is_animation_ongoing(&self) -> bool {
        self.value.is_animation_ongoing() || self.upper.is_animation_ongoing()
    }

    /// Sets the value directly, cancelling any value tween.
    pub fn set_value(&mut self, value: f64) {
        self.value = AnimatedValue::new(self.clamp(value));
    }

    pub fn animate_value(&mut self, to: f64, clock: Clock, config: overview_config::Animation) {
        let to = self.clamp(to);
        let from = self.value.current();
        self.value
            .animate_to(Animation::new(clock, from, to, config));
    }

    pub fn animate_upper(&mut self, to: f64, clock: Clock, config: overview_config::Animation) {
        let from = self.upper.current();
        self.upper
            .animate_to(Animation::new(clock, from, to, config));
    }

    /// Finishes completed tweens.
    ///
    /// Returns `true` if the value tween completed on this call.
    pub fn advance_animations(&mut self) -> bool {
        self.upper.settle();
        self.value.settle()
    }

    fn clamp(&self, value: f64) -> f64 {
        let max = (self.upper.target() - self.page_size).max(self.lower);
        value.clamp(self.lower, max)
    }
}
