//! Workspaces of one monitor, stacked vertically.
//!
//! Workspace `i` sits at `(i - active) * (height + spacing + ratio_spacing)` below the view's
//! origin, so the active workspace is at 0 and others are off the clip rectangle. Which workspaces
//! are shown depends on the [`Motion`] and the drag state:
//!
//! - while sliding or swiping, all of them;
//! - during a drag, the active workspace and its immediate neighbors;
//! - otherwise, only the active workspace.

use std::rc::Rc;

use smithay::utils::{Logical, Rectangle};

use crate::animation::{Animation, Clock};
use crate::layout::adjustment::ScrollAdjustment;
use crate::layout::animated_value::AnimatedValue;
use crate::layout::types::OverviewRequest;
use crate::layout::workspace::OverviewWorkspace;
use crate::layout::Options;

mod drag;
mod scroll;
mod types;
mod workspace_ops;

#[cfg(test)]
mod tests;

pub use types::{DragState, Motion, ViewRole, WorkspaceSlot};

#[derive(Debug)]
pub struct WorkspacesView<W: OverviewWorkspace> {
    /// Index of the monitor this view is on.
    monitor_idx: usize,
    role: ViewRole,
    /// Workspaces, index-aligned with the window manager's desktops.
    workspaces: Vec<WorkspaceSlot<W>>,
    /// Static workspaces of the other monitors, when workspaces are on the primary monitor only.
    extra_workspaces: Vec<W>,
    /// Area of one workspace.
    area: Rectangle<f64, Logical>,
    /// Extra gap between stacked workspaces, from shrinking the area to the screen aspect ratio.
    ratio_spacing: f64,
    /// Gap between stacked workspaces.
    spacing: f64,
    clip: Rectangle<f64, Logical>,
    /// Whether the clip is in effect; it is only while the overview is fully shown.
    clip_applied: bool,
    opacity: f64,
    active_workspace_idx: usize,
    motion: Motion,
    drag: DragState,
    adjustment: ScrollAdjustment,
    /// Last desktop activation asked for and not yet confirmed.
    ///
    /// Secondary views never ask, but track what the primary view asks for during a swipe.
    pending_activation: Option<usize>,
    requests: Vec<OverviewRequest>,
    clock: Clock,
    options: Rc<Options>,
}

impl<W: OverviewWorkspace> WorkspacesView<W> {
    pub fn new(
        monitor_idx: usize,
        role: ViewRole,
        workspaces: Vec<W>,
        active_workspace_idx: usize,
        clock: Clock,
        options: Rc<Options>,
    ) -> Self {
        let active_workspace_idx = active_workspace_idx.min(workspaces.len().saturating_sub(1));
        let adjustment =
            ScrollAdjustment::new(active_workspace_idx as f64, workspaces.len() as f64);

        let mut view = Self {
            monitor_idx,
            role,
            workspaces: workspaces.into_iter().map(WorkspaceSlot::new).collect(),
            extra_workspaces: Vec::new(),
            area: Rectangle::default(),
            ratio_spacing: 0.,
            spacing: options.workspace_spacing,
            clip: Rectangle::default(),
            clip_applied: false,
            opacity: 1.,
            active_workspace_idx,
            motion: Motion::Idle,
            drag: DragState::Idle,
            adjustment,
            pending_activation: None,
            requests: Vec::new(),
            clock,
            options,
        };
        view.activate(false);
        view
    }

    pub fn monitor_idx(&self) -> usize {
        self.monitor_idx
    }

    pub fn role(&self) -> ViewRole {
        self.role
    }

    pub fn is_primary(&self) -> bool {
        self.role == ViewRole::Primary
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn workspaces(&self) -> impl Iterator<Item = &W> + '_ {
        self.workspaces.iter().map(|slot| &slot.workspace)
    }

    pub fn workspace(&self, idx: usize) -> Option<&W> {
        self.workspaces.get(idx).map(|slot| &slot.workspace)
    }

    pub fn workspace_mut(&mut self, idx: usize) -> Option<&mut W> {
        self.workspaces.get_mut(idx).map(|slot| &mut slot.workspace)
    }

    pub fn extra_workspaces(&self) -> &[W] {
        &self.extra_workspaces
    }

    pub fn active_workspace_idx(&self) -> usize {
        self.active_workspace_idx
    }

    pub fn active_workspace(&self) -> Option<&W> {
        self.workspace(self.active_workspace_idx)
    }

    pub fn area(&self) -> Rectangle<f64, Logical> {
        self.area
    }

    pub fn clip(&self) -> Rectangle<f64, Logical> {
        self.clip
    }

    /// Clip in effect on the view's root container, if any.
    pub fn applied_clip(&self) -> Option<Rectangle<f64, Logical>> {
        self.clip_applied.then_some(self.clip)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Whether the view's root container is hidden because its opacity dropped to zero.
    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_in_drag(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn scroll_adjustment(&self) -> &ScrollAdjustment {
        &self.adjustment
    }

    /// Distance between the tops of two consecutive workspaces.
    pub fn workspace_step(&self) -> f64 {
        self.area.size.h + self.spacing + self.ratio_spacing
    }

    /// Current vertical offset of every workspace.
    pub fn workspace_offsets(&self) -> Vec<f64> {
        self.workspaces.iter().map(|slot| slot.y.current()).collect()
    }

    pub fn is_workspace_visible(&self, idx: usize) -> bool {
        self.workspaces.get(idx).is_some_and(|slot| slot.visible)
    }

    pub fn visible_workspaces(&self) -> Vec<usize> {
        self.workspaces
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.visible)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn take_requests(&mut self) -> Vec<OverviewRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Sets the area of one workspace.
    ///
    /// Returns `false` and does nothing if the area did not change. Workspaces are not moved;
    /// call [`Self::activate`] for that.
    pub fn set_geometry(&mut self, area: Rectangle<f64, Logical>, extra_spacing: f64) -> bool {
        if self.area == area {
            return false;
        }

        self.area = area;
        self.ratio_spacing = extra_spacing;

        for slot in &mut self.workspaces {
            slot.workspace.set_geometry(area);
        }

        true
    }

    pub fn set_clip_rect(&mut self, clip: Rectangle<f64, Logical>) {
        self.clip = clip;
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        if self.spacing == spacing {
            return;
        }

        self.spacing = spacing;
        self.activate(false);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0., 1.);
    }

    pub fn update_options(&mut self, options: Rc<Options>) {
        let spacing = options.workspace_spacing;
        self.options = options;
        self.set_spacing(spacing);
    }

    /// Moves every workspace to its offset around the active workspace.
    pub fn activate(&mut self, animate: bool) {
        // Swipes position workspaces directly.
        let animate = animate && self.motion != Motion::Scrolling;

        let active = self.active_workspace_idx as f64;
        let step = self.workspace_step();
        let config = self.options.animations.workspace_switch;

        for (idx, slot) in self.workspaces.iter_mut().enumerate() {
            let y = (idx as f64 - active) * step;

            if animate {
                let from = slot.y.current();
                slot.y
                    .animate_to(Animation::new(self.clock.clone(), from, y, config));
            } else {
                slot.y = AnimatedValue::new(y);
            }
        }

        if animate {
            self.motion = Motion::Animating;
        } else if self.motion == Motion::Animating {
            self.motion = Motion::Idle;
        }

        self.update_visibility();
    }

    /// Repositions workspaces after the geometry changed, unless something else drives them.
    pub fn relayout(&mut self) {
        if self.motion == Motion::Idle {
            self.activate(false);
        }
    }

    fn update_visibility(&mut self) {
        let active = self.active_workspace_idx;
        let motion = self.motion;
        let drag = self.drag;

        for (idx, slot) in self.workspaces.iter_mut().enumerate() {
            slot.visible = match (motion, drag) {
                (Motion::Animating | Motion::Scrolling, _) => true,
                (Motion::Idle, DragState::Dragging { .. }) => idx.abs_diff(active) <= 1,
                (Motion::Idle, DragState::Idle) => idx == active,
            };
        }
    }

    /// Finishes completed transitions.
    ///
    /// Returns `true` if the scroll adjustment value changed since the last call.
    pub fn advance_animations(&mut self) -> bool {
        for slot in &mut self.workspaces {
            slot.y.settle();
        }

        if self.motion == Motion::Animating
            && self.workspaces.first().map_or(true, |slot| slot.y.is_static())
        {
            // Snap in case the geometry changed during the slide.
            self.activate(false);
        }

        // The value changes every frame while it is tweened, up to and including the frame the
        // tween completes on.
        let value_changed = self.adjustment.is_animating_value();
        if value_changed {
            self.scroll_adjustment_changed();
        }
        self.adjustment.advance_animations();

        value_changed
    }

    pub fn are_animations_ongoing(&self) -> bool {
        self.motion == Motion::Animating
            || self.adjustment.is_animation_ongoing()
            || self
                .workspaces
                .iter()
                .any(|slot| slot.y.is_animation_ongoing())
    }
}

impl<W: OverviewWorkspace> Drop for WorkspacesView<W> {
    fn drop(&mut self) {
        // End the drag first so that workspaces release their reserved slots.
        if self.is_in_drag() {
            self.drag_end();
        }
    }
}
