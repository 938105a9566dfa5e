use smithay::utils::{Logical, Point, Rectangle, Size};

use crate::layout::display::WorkspacesDisplay;
use crate::layout::view::ViewRole;
use crate::layout::workspace::{OverviewWorkspace, Thumbnails};

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    pub fn allocation(&self) -> Rectangle<f64, Logical> {
        self.allocation
    }

    /// Sets the area of the display, e.g. after a resize.
    pub fn set_allocation(&mut self, allocation: Rectangle<f64, Logical>) {
        if self.allocation == allocation {
            return;
        }

        self.allocation = allocation;
        self.update_geometry();
    }

    /// Width of the panel when fully revealed.
    pub fn controls_natural_width(&self) -> f64 {
        let visible = self.options.controls_visible_width;
        self.thumbnails
            .preferred_width(self.allocation.size.h)
            .unwrap_or(self.options.controls_width)
            .max(visible)
    }

    /// Width the panel currently claims from the primary monitor.
    pub fn controls_reserved_width(&self) -> f64 {
        let visible = self.options.controls_visible_width;
        let natural = self.controls_natural_width();
        let f = self.zoom_fraction.current();
        visible * (1. - f) + natural * f
    }

    /// Rectangle of the panel at its natural width; the part past the display edge is off screen.
    pub fn controls_area(&self) -> Rectangle<f64, Logical> {
        let full = self.allocation;
        let natural = self.controls_natural_width();
        let reserved = self.controls_reserved_width();

        let x = if self.options.is_rtl() {
            full.loc.x + reserved - natural
        } else {
            full.loc.x + full.size.w - reserved
        };

        Rectangle::new(Point::from((x, full.loc.y)), Size::from((natural, full.size.h)))
    }

    /// The part of the panel that is on screen while collapsed.
    pub(super) fn controls_strip(&self) -> Rectangle<f64, Logical> {
        let controls = self.controls_area();
        let visible = self.options.controls_visible_width;

        let x = if self.options.is_rtl() {
            controls.loc.x + controls.size.w - visible
        } else {
            controls.loc.x
        };

        Rectangle::new(
            Point::from((x, controls.loc.y)),
            Size::from((visible, controls.size.h)),
        )
    }

    /// Pushes areas and clips into every view.
    ///
    /// The primary view gets what the panel leaves of the display, scaled down to the display's
    /// aspect ratio and centered vertically. Its clip is sized the same way for a collapsed panel,
    /// so it keeps the display's aspect ratio while the panel is revealed. Other views cover their
    /// whole monitor.
    pub(super) fn update_geometry(&mut self) {
        let full = self.allocation;
        if full.size.w <= 0. || full.size.h <= 0. {
            trace!("ignoring geometry update for empty allocation {full:?}");
            return;
        }

        let rtl = self.options.is_rtl();
        let visible = self.options.controls_visible_width;
        let reserved = self.controls_reserved_width();
        let ratio = full.size.h / full.size.w;

        let width = full.size.w - reserved;
        let height = ratio * width;
        let difference = full.size.h - height;
        let x = if rtl { full.loc.x + reserved } else { full.loc.x };
        let y = full.loc.y + difference / 2.;
        let area = Rectangle::new(Point::from((x, y)), Size::from((width, height)));

        let clip_width = full.size.w - visible;
        let clip_height = ratio * clip_width;
        let clip_x = if rtl { full.loc.x + visible } else { full.loc.x };
        let clip_y = full.loc.y + (full.size.h - clip_height) / 2.;
        let clip = Rectangle::new(
            Point::from((clip_x, clip_y)),
            Size::from((clip_width, clip_height)),
        );

        let Some(shown) = &mut self.shown else {
            return;
        };

        for view in &mut shown.views {
            let changed = match view.role() {
                ViewRole::Primary => {
                    view.set_clip_rect(clip);
                    view.set_geometry(area, difference)
                }
                ViewRole::Secondary => {
                    let Some(bounds) = self.screen.monitors.get(view.monitor_idx()) else {
                        continue;
                    };
                    view.set_clip_rect(*bounds);
                    view.set_geometry(*bounds, 0.)
                }
            };

            if changed {
                view.relayout();
            }
        }
    }
}
