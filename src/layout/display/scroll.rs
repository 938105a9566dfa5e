use smithay::utils::{Logical, Point};

use crate::layout::display::WorkspacesDisplay;
use crate::layout::types::{OverviewRequest, SwipeScrollResult, WorkspaceDirection};
use crate::layout::workspace::{OverviewWorkspace, Thumbnails};

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    pub fn active_workspace_changed(&mut self, idx: usize) {
        self.screen.active_workspace_idx = idx;

        for view in self.views_mut() {
            view.active_workspace_changed(idx);
        }
    }

    pub fn swipe_scroll_begin(&mut self) {
        for view in self.views_mut() {
            view.start_swipe_scroll();
        }
    }

    /// Moves the primary scroll adjustment during a swipe.
    pub fn swipe_scroll_update(&mut self, value: f64) {
        let Some(primary) = self.primary_view_mut() else {
            return;
        };

        primary.set_scroll_value(value);
        let value = primary.scroll_adjustment().value();
        self.mirror_primary_scroll(value);
    }

    pub fn swipe_scroll_end(
        &mut self,
        result: SwipeScrollResult,
        pointer: Option<Point<f64, Logical>>,
    ) {
        for view in self.views_mut() {
            view.end_swipe_scroll(result, pointer);
        }
    }

    /// Scroll wheel over the panel.
    pub fn controls_scroll(&mut self, direction: WorkspaceDirection) {
        self.requests.push(OverviewRequest::MoveWorkspace(direction));
    }

    /// Copies the primary scroll value into every other view.
    pub(super) fn mirror_primary_scroll(&mut self, value: f64) {
        if self.workspaces_only_on_primary {
            return;
        }

        for view in self.views_mut() {
            if !view.is_primary() {
                view.mirror_scroll_value(value);
            }
        }
    }
}
