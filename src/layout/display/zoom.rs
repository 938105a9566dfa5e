use crate::animation::Animation;
use crate::layout::animated_value::AnimatedValue;
use crate::layout::display::WorkspacesDisplay;
use crate::layout::workspace::{OverviewWorkspace, Thumbnails};

/// Desktop count above which the panel stays revealed.
const ALWAYS_ZOOM_OUT_DESKTOPS: usize = 2;

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    pub fn zoom_fraction(&self) -> f64 {
        self.zoom_fraction.current()
    }

    /// Sets the reveal progress of the panel, cancelling any reveal animation.
    pub fn set_zoom_fraction(&mut self, fraction: f64) {
        self.zoom_fraction = AnimatedValue::new(fraction.clamp(0., 1.));
        self.update_geometry();
    }

    pub fn is_zoomed_out(&self) -> bool {
        self.zoom_out
    }

    pub fn always_zoom_out(&self) -> bool {
        self.always_zoom_out
    }

    pub fn controls_hovered(&self) -> bool {
        self.controls_hovered
    }

    /// Updates the hover state of the panel.
    pub fn set_controls_hovered(&mut self, hovered: bool) {
        if self.controls_hovered == hovered {
            return;
        }

        self.controls_hovered = hovered;

        if !hovered {
            self.controls_initially_hovered = false;
        }

        if !self.controls_initially_hovered {
            self.update_zoom();
        }
    }

    pub fn xdnd_drag_begin(&mut self) {
        self.xdnd_active = true;
        self.update_always_zoom();
        self.update_zoom();
    }

    pub fn xdnd_drag_end(&mut self) {
        self.xdnd_active = false;
        self.update_always_zoom();
        self.update_zoom();
    }

    /// Keeps the panel revealed when there are many desktops, or when a monitor to the right of
    /// the primary one makes the panel edge hard to reach.
    pub(super) fn update_always_zoom(&mut self) {
        let screen = &self.screen;

        let mut always = self.xdnd_active || screen.desktops.len() > ALWAYS_ZOOM_OUT_DESKTOPS;
        if !always {
            if let Some(primary) = screen.primary_monitor() {
                let right_edge = primary.loc.x + primary.size.w;
                always = screen.monitors.iter().any(|m| m.loc.x >= right_edge);
            }
        }

        if self.always_zoom_out != always {
            debug!("always zoom out: {always}");
            self.always_zoom_out = always;
        }
    }

    pub(super) fn update_zoom(&mut self) {
        if self.overview_animating {
            return;
        }

        let zoom_out = self.always_zoom_out || self.controls_hovered;
        if zoom_out == self.zoom_out {
            return;
        }

        debug!("zoom out: {zoom_out}");
        self.zoom_out = zoom_out;
        self.update_geometry();

        if self.shown.is_none() {
            return;
        }

        let from = self.zoom_fraction.current();
        let to = if zoom_out { 1. } else { 0. };
        let config = self.options.animations.controls_reveal;
        self.zoom_fraction
            .animate_to(Animation::new(self.clock.clone(), from, to, config));
    }
}
