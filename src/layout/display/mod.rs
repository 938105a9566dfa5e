//! All workspaces views of the overview, and the side panel next to the primary one.
//!
//! The panel sits at the right edge of the primary monitor (the left edge for right-to-left text).
//! Collapsed, only a strip of `controls_visible_width` of it is on screen; revealed, it takes its
//! natural width. The reveal is driven by the zoom fraction, which also shrinks the primary view
//! so that panel and workspaces move together.

use std::rc::Rc;

use smithay::utils::{Logical, Point, Rectangle};

use crate::animation::Clock;
use crate::layout::animated_value::AnimatedValue;
use crate::layout::types::OverviewRequest;
use crate::layout::view::{ViewRole, WorkspacesView};
use crate::layout::workspace::{OverviewWorkspace, Thumbnails};
use crate::layout::Options;

mod drag;
mod geometry;
mod scroll;
mod types;
mod workspace_ops;
mod zoom;


pub use types::Screen;
use types::{DisplayDragState, Shown};

/// Tolerance around the panel strip when checking whether the pointer rests on it.
const INITIAL_HOVER_TOLERANCE: f64 = 0.5;

#[derive(Debug)]
pub struct WorkspacesDisplay<W: OverviewWorkspace, T: Thumbnails> {
    thumbnails: T,
    /// Last known window manager state.
    screen: Screen,
    /// Area of the display in stage coordinates.
    ///
    /// Reset to the primary monitor on show and on monitor changes.
    allocation: Rectangle<f64, Logical>,
    /// Views, while the overview is shown.
    shown: Option<Shown<W>>,
    workspaces_only_on_primary: bool,
    /// Whether the panel stays revealed regardless of hover.
    always_zoom_out: bool,
    /// Whether a drag from outside the shell is in progress.
    xdnd_active: bool,
    /// Whether the panel is, or is becoming, revealed.
    zoom_out: bool,
    /// Reveal progress of the panel, from 0 (collapsed) to 1 (revealed).
    zoom_fraction: AnimatedValue,
    controls_visible: bool,
    controls_hovered: bool,
    /// The pointer already rested on the panel when the overview was shown.
    ///
    /// Hover does not reveal the panel until the pointer leaves it once.
    controls_initially_hovered: bool,
    drag: DisplayDragState,
    /// Zoom needs re-evaluating on the next frame.
    pending_zoom_update: bool,
    /// Whether the overview itself is animating in or out.
    overview_animating: bool,
    parent_opacity: f64,
    requests: Vec<OverviewRequest>,
    clock: Clock,
    options: Rc<Options>,
}

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    pub fn new(screen: Screen, thumbnails: T, clock: Clock, options: Options) -> Self {
        let allocation = screen.primary_monitor().unwrap_or_default();

        let mut display = Self {
            thumbnails,
            screen,
            allocation,
            shown: None,
            workspaces_only_on_primary: options.workspaces_only_on_primary,
            always_zoom_out: false,
            xdnd_active: false,
            zoom_out: false,
            zoom_fraction: AnimatedValue::new(0.),
            controls_visible: false,
            controls_hovered: false,
            controls_initially_hovered: false,
            drag: DisplayDragState::Idle,
            pending_zoom_update: false,
            overview_animating: false,
            parent_opacity: 1.,
            requests: Vec::new(),
            clock,
            options: Rc::new(options),
        };
        display.apply_slowdown();
        display.update_always_zoom();
        display
    }

    fn apply_slowdown(&mut self) {
        let slowdown = self.options.animations.slowdown;
        if slowdown == 0. {
            self.clock.set_complete_instantly(true);
        } else {
            self.clock.set_complete_instantly(false);
            self.clock.set_rate(1. / slowdown);
        }
    }

    pub fn update_config(&mut self, options: Options) {
        let only_on_primary_changed =
            options.workspaces_only_on_primary != self.options.workspaces_only_on_primary;

        let options = Rc::new(options);
        self.options = options.clone();
        self.apply_slowdown();

        if let Some(shown) = &mut self.shown {
            for view in &mut shown.views {
                view.update_options(options.clone());
            }
        }

        if only_on_primary_changed {
            let value = self.options.workspaces_only_on_primary;
            self.set_workspaces_only_on_primary(value);
        } else {
            self.update_geometry();
        }
    }

    pub fn options(&self) -> &Rc<Options> {
        &self.options
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn thumbnails(&self) -> &T {
        &self.thumbnails
    }

    pub fn is_shown(&self) -> bool {
        self.shown.is_some()
    }

    pub fn views(&self) -> &[WorkspacesView<W>] {
        match &self.shown {
            Some(shown) => &shown.views,
            None => &[],
        }
    }

    pub fn views_mut(&mut self) -> &mut [WorkspacesView<W>] {
        match &mut self.shown {
            Some(shown) => &mut shown.views,
            None => &mut [],
        }
    }

    pub fn primary_view(&self) -> Option<&WorkspacesView<W>> {
        self.views().iter().find(|view| view.role() == ViewRole::Primary)
    }

    fn primary_view_mut(&mut self) -> Option<&mut WorkspacesView<W>> {
        self.views_mut()
            .iter_mut()
            .find(|view| view.role() == ViewRole::Primary)
    }

    /// Active workspace of the primary view.
    pub fn active_workspace(&self) -> Option<&W> {
        self.primary_view()?.active_workspace()
    }

    pub fn active_workspace_has_maximized_windows(&self) -> bool {
        self.active_workspace()
            .is_some_and(|ws| ws.has_maximized_windows())
    }

    pub fn are_controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn take_requests(&mut self) -> Vec<OverviewRequest> {
        let mut requests = std::mem::take(&mut self.requests);
        for view in self.views_mut() {
            requests.extend(view.take_requests());
        }
        requests
    }

    /// Shows the overview for the given window manager state.
    ///
    /// `pointer` is the current pointer position in stage coordinates, if known.
    pub fn show(&mut self, screen: Screen, pointer: Option<Point<f64, Logical>>) {
        if self.shown.is_some() {
            warn!("overview shown twice, rebuilding");
            self.hide();
        }

        self.screen = screen;
        self.allocation = self.screen.primary_monitor().unwrap_or_default();
        self.update_always_zoom();
        self.controls_hovered = false;
        self.controls_initially_hovered = false;

        // The strip check needs the panel where this session starts, not where the last one
        // left it.
        self.zoom_out = self.always_zoom_out;
        self.zoom_fraction = AnimatedValue::new(if self.always_zoom_out { 1. } else { 0. });

        if !self.always_zoom_out {
            if let Some(pos) = pointer {
                self.controls_initially_hovered = self.is_on_controls_strip(pos);
            }
        }

        self.update_zoom();

        self.controls_visible = true;
        self.thumbnails.show();

        self.shown = Some(Shown::new());
        self.update_workspaces_views();

        let stack = self.screen.window_stack.clone();
        self.on_restacked(&stack);

        debug!(
            "overview shown with {} views, zoom out: {}",
            self.views().len(),
            self.zoom_out
        );
    }

    /// Hides the overview, releasing every view and workspace.
    pub fn hide(&mut self) {
        self.controls_visible = false;
        self.thumbnails.hide();

        if !self.always_zoom_out {
            self.set_zoom_fraction(0.);
        }

        self.controls_hovered = false;
        self.controls_initially_hovered = false;
        self.drag = DisplayDragState::Idle;
        self.pending_zoom_update = false;

        if self.shown.take().is_some() {
            debug!("overview hidden");
        }
    }

    /// Tracks whether the overview itself is animating in or out.
    ///
    /// Zoom changes are held back while it is.
    pub fn set_overview_animating(&mut self, animating: bool) {
        self.overview_animating = animating;
    }

    /// The overview started animating in.
    pub fn zoom_to_overview(&mut self) {
        for view in self.views_mut() {
            view.zoom_to_overview();
        }
    }

    /// The overview finished animating in.
    pub fn overview_shown(&mut self) {
        for view in self.views_mut() {
            view.overview_shown();
        }
    }

    /// The overview started animating out.
    pub fn zoom_from_overview(&mut self) {
        for view in self.views_mut() {
            view.zoom_from_overview();
        }
    }

    /// Relays the opacity of the overview container to the primary view.
    pub fn set_parent_opacity(&mut self, opacity: f64) {
        self.parent_opacity = opacity;
        if let Some(view) = self.primary_view_mut() {
            view.set_opacity(opacity);
        }
    }

    pub fn set_workspaces_only_on_primary(&mut self, value: bool) {
        if self.workspaces_only_on_primary == value {
            return;
        }

        debug!("workspaces only on primary: {value}");
        self.workspaces_only_on_primary = value;

        if self.shown.is_none() {
            return;
        }

        self.update_workspaces_views();
    }

    pub fn monitors_changed(
        &mut self,
        monitors: Vec<Rectangle<f64, Logical>>,
        primary_monitor_idx: usize,
    ) {
        self.screen.monitors = monitors;
        self.screen.primary_monitor_idx = primary_monitor_idx;
        self.allocation = self.screen.primary_monitor().unwrap_or_default();

        self.update_always_zoom();

        if self.shown.is_some() {
            self.update_workspaces_views();
        }
    }

    /// Rebuilds the views for the current monitors and desktops.
    fn update_workspaces_views(&mut self) {
        let Some(shown) = &mut self.shown else {
            return;
        };

        // Old views and their workspaces go before new ones are created.
        shown.views.clear();

        let screen = &self.screen;
        let count = screen.desktops.len();

        for monitor_idx in 0..screen.monitors.len() {
            let is_primary = monitor_idx == screen.primary_monitor_idx;
            if self.workspaces_only_on_primary && !is_primary {
                continue;
            }

            let role = if is_primary {
                ViewRole::Primary
            } else {
                ViewRole::Secondary
            };

            let workspaces = screen
                .desktops
                .iter()
                .map(|desktop| W::new(Some(*desktop), monitor_idx))
                .collect();
            let mut view = WorkspacesView::new(
                monitor_idx,
                role,
                workspaces,
                screen.active_workspace_idx,
                self.clock.clone(),
                self.options.clone(),
            );

            if self.workspaces_only_on_primary {
                let extra = screen
                    .monitors
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != monitor_idx)
                    .map(|(idx, bounds)| {
                        let mut ws = W::new(None, idx);
                        ws.set_geometry(*bounds);
                        ws
                    })
                    .collect();
                view.set_extra_workspaces(extra);
            }

            shown.views.push(view);
        }

        debug!(
            "rebuilt {} views with {count} workspaces each",
            shown.views.len()
        );

        self.update_geometry();
        self.set_parent_opacity(self.parent_opacity);
    }

    /// Finishes completed transitions and settles deferred state.
    ///
    /// Call once per frame before redrawing.
    pub fn advance_animations(&mut self) {
        if self.pending_zoom_update {
            self.pending_zoom_update = false;
            self.update_zoom();
        }

        if self.zoom_fraction.is_animation_ongoing() {
            self.update_geometry();

            if self.zoom_fraction.settle() {
                trace!("zoom fraction settled at {}", self.zoom_fraction.current());
                for view in self.views_mut() {
                    view.update_window_positions();
                }
            }
        }

        let mut primary_value = None;
        for view in self.views_mut() {
            let changed = view.advance_animations();
            if changed && view.is_primary() {
                primary_value = Some(view.scroll_adjustment().value());
            }
        }

        if let Some(value) = primary_value {
            self.mirror_primary_scroll(value);
        }
    }

    pub fn are_animations_ongoing(&self) -> bool {
        self.zoom_fraction.is_animation_ongoing()
            || self.pending_zoom_update
            || self.views().iter().any(|view| view.are_animations_ongoing())
    }

    fn is_on_controls_strip(&self, pos: Point<f64, Logical>) -> bool {
        let strip = self.controls_strip();
        let tol = INITIAL_HOVER_TOLERANCE;

        pos.x > strip.loc.x - tol
            && pos.x < strip.loc.x + strip.size.w + tol
            && pos.y > strip.loc.y - tol
            && pos.y < strip.loc.y + strip.size.h + tol
    }
}
