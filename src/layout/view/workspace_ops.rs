use std::ops::Range;

use crate::layout::view::{WorkspaceSlot, WorkspacesView};
use crate::layout::workspace::{OverviewWorkspace, StackIndices, WindowPositionFlags};

impl<W: OverviewWorkspace> WorkspacesView<W> {
    /// Appends a workspace for a newly added desktop.
    ///
    /// It only shows up after [`Self::update_workspace_count`].
    pub fn push_workspace(&mut self, ws: W) {
        self.workspaces.push(WorkspaceSlot::new(ws));
    }

    /// Removes the workspaces of removed desktops, returning them for destruction.
    pub fn remove_workspaces(&mut self, range: Range<usize>) -> Vec<W> {
        let len = self.workspaces.len();
        let range = range.start.min(len)..range.end.min(len);

        let removed = self
            .workspaces
            .drain(range)
            .map(|slot| slot.workspace)
            .collect();

        self.set_active_workspace_idx(self.active_workspace_idx);
        removed
    }

    /// Settles the view after desktops were added or removed.
    ///
    /// Workspaces must already be appended or removed to match `new_count`.
    pub fn update_workspace_count(&mut self, old_count: usize, new_count: usize) {
        debug_assert_eq!(self.workspaces.len(), new_count);

        let config = self.options.animations.workspace_switch;
        self.adjustment
            .animate_upper(new_count as f64, self.clock.clone(), config);

        if new_count > old_count {
            let area = self.area;
            for slot in self.workspaces.iter_mut().skip(old_count) {
                slot.workspace.set_geometry(area);
            }

            // Place the new workspaces without sliding them in.
            self.activate(false);
        }

        self.scroll_to_active();
    }

    pub fn update_window_positions(&mut self) {
        for slot in &mut self.workspaces {
            slot.workspace.position_windows(WindowPositionFlags::ANIMATE);
        }
    }

    pub fn sync_stacking(&mut self, stack: &StackIndices) {
        for slot in &mut self.workspaces {
            slot.workspace.sync_stacking(stack);
        }
        for ws in &mut self.extra_workspaces {
            ws.sync_stacking(stack);
        }
    }

    pub fn set_extra_workspaces(&mut self, workspaces: Vec<W>) {
        self.extra_workspaces = workspaces;
    }

    /// The overview started showing.
    pub fn zoom_to_overview(&mut self) {
        for slot in &mut self.workspaces {
            slot.workspace.zoom_to_overview();
        }
        for ws in &mut self.extra_workspaces {
            ws.zoom_to_overview();
        }
    }

    /// The overview finished showing.
    pub fn overview_shown(&mut self) {
        self.clip_applied = true;
    }

    /// The overview started hiding.
    pub fn zoom_from_overview(&mut self) {
        self.clip_applied = false;

        for slot in &mut self.workspaces {
            slot.workspace.zoom_from_overview();
        }
        for ws in &mut self.extra_workspaces {
            ws.zoom_from_overview();
        }
    }
}
