use smithay::utils::{Logical, Point};

use crate::layout::types::{OverviewRequest, SwipeScrollResult};
use crate::layout::view::{Motion, ViewRole, WorkspacesView};
use crate::layout::workspace::OverviewWorkspace;

/// Offsets closer than this are considered equal.
const POSITION_EPSILON: f64 = 0.001;

impl<W: OverviewWorkspace> WorkspacesView<W> {
    /// Reacts to the window manager switching the active desktop.
    pub fn active_workspace_changed(&mut self, idx: usize) {
        self.set_active_workspace_idx(idx);
        self.pending_activation = None;

        if self.motion == Motion::Scrolling {
            return;
        }

        self.scroll_to_active();
    }

    /// Slides to the active workspace and tweens the adjustment after it.
    ///
    /// The primary value only ever changes through a tween here, so the display mirrors every step
    /// of it from `advance_animations()`.
    pub(super) fn scroll_to_active(&mut self) {
        self.activate(true);
        self.update_scroll_adjustment(self.active_workspace_idx);
    }

    fn update_scroll_adjustment(&mut self, idx: usize) {
        if self.motion == Motion::Scrolling {
            return;
        }

        // Secondary adjustments only ever receive the primary value.
        if self.role == ViewRole::Secondary {
            return;
        }

        // The tween is not a user change, so it can't turn into an activation request.
        let config = self.options.animations.workspace_switch;
        self.adjustment
            .animate_value(idx as f64, self.clock.clone(), config);
    }

    /// Sets the scroll value as if the user moved it, and reacts to the change.
    pub fn set_scroll_value(&mut self, value: f64) {
        self.adjustment.set_value(value);
        self.scroll_adjustment_changed();
    }

    /// Copies the primary view's scroll value into this view.
    pub fn mirror_scroll_value(&mut self, value: f64) {
        if !self.adjustment.is_animating_value()
            && (self.adjustment.value() - value).abs() < f64::EPSILON
        {
            return;
        }

        self.set_scroll_value(value);
    }

    /// Reacts to the adjustment value changing for any reason.
    pub(super) fn scroll_adjustment_changed(&mut self) {
        if self.workspaces.is_empty() {
            return;
        }

        let value = self.adjustment.value();
        let last = self.workspaces.len() - 1;
        let current = (value.round().max(0.) as usize).min(last);

        if !self.adjustment.is_animating_value()
            && current != self.active_workspace_idx
            && self.pending_activation != Some(current)
        {
            match self.role {
                ViewRole::Primary => {
                    trace!(
                        "monitor {}: scroll value {value} requests desktop {current}",
                        self.monitor_idx
                    );
                    self.pending_activation = Some(current);
                    self.requests
                        .push(OverviewRequest::ActivateWorkspace(current));
                }
                ViewRole::Secondary if self.motion == Motion::Scrolling => {
                    self.pending_activation = Some(current);
                }
                ViewRole::Secondary => (),
            }
        }

        if self.motion != Motion::Scrolling {
            return;
        }

        let upper = self.adjustment.upper();
        // A single workspace has nowhere to scroll to.
        if upper <= 1. {
            return;
        }

        let first_y = self.workspaces[0].y.current();
        let last_y = self.workspaces[last].y.current();
        let workspaces_height = last_y - first_y;

        let new_y = -value / (upper - 1.) * workspaces_height;
        let dy = new_y - first_y;

        for (idx, slot) in self.workspaces.iter_mut().enumerate() {
            slot.visible = (idx as f64 - value).abs() <= 1.;
            slot.y.offset(dy);
        }
    }

    pub fn start_swipe_scroll(&mut self) {
        for slot in &mut self.workspaces {
            slot.y.stop_anim();
        }

        self.motion = Motion::Scrolling;
        self.pending_activation = None;
        self.update_visibility();
    }

    /// Ends a swipe.
    ///
    /// `pointer` is the pointer position in stage coordinates, used to tell whether a click landed
    /// on this view.
    pub fn end_swipe_scroll(
        &mut self,
        result: SwipeScrollResult,
        pointer: Option<Point<f64, Logical>>,
    ) {
        if self.motion == Motion::Scrolling {
            self.motion = Motion::Idle;
        }

        if result == SwipeScrollResult::Click {
            // Only close the overview from an empty workspace: with windows around, it is too easy
            // to miss one and end up with the wrong window focused.
            let is_empty = self.active_workspace().is_some_and(|ws| ws.is_empty());
            if is_empty && pointer.is_some_and(|pos| self.area.contains(pos)) {
                debug!("monitor {}: click on empty workspace", self.monitor_idx);
                self.requests.push(OverviewRequest::HideOverview);
            }
        }

        self.update_visibility();

        // If an activation is in flight, its confirmation will move the workspaces.
        if self.pending_activation.is_none() && !self.is_at_active_position() {
            self.scroll_to_active();
        }
    }

    fn is_at_active_position(&self) -> bool {
        let Some(first) = self.workspaces.first() else {
            return true;
        };

        let expected = -(self.active_workspace_idx as f64) * self.workspace_step();
        (first.y.current() - expected).abs() < POSITION_EPSILON
    }

    pub(in crate::layout) fn set_active_workspace_idx(&mut self, idx: usize) {
        self.active_workspace_idx = idx.min(self.workspaces.len().saturating_sub(1));
    }
}
