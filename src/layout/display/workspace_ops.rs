use crate::layout::display::WorkspacesDisplay;
use crate::layout::workspace::{DesktopId, OverviewWorkspace, StackIndices, Thumbnails, WindowId};

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    /// Reconciles the views with a new desktop list.
    ///
    /// Desktops must only be appended at the end, or removed as one contiguous run. Anything else
    /// (insertion in the middle, reordering, several separate removals) leaves workspaces bound to
    /// the wrong desktops.
    pub fn workspaces_changed(&mut self, desktops: Vec<DesktopId>, active_workspace_idx: usize) {
        let old_count = self.screen.desktops.len();
        let new_count = desktops.len();

        self.screen.desktops = desktops;
        self.screen.active_workspace_idx = active_workspace_idx;

        if old_count == new_count {
            return;
        }

        self.update_always_zoom();

        if !self.is_shown() {
            return;
        }

        self.update_zoom();

        debug!("desktop count changed from {old_count} to {new_count}");

        if new_count > old_count {
            self.append_workspaces(old_count);
            self.thumbnails
                .add_thumbnails(old_count, new_count - old_count);
        } else {
            let removed_num = old_count - new_count;
            let removed_idx = self.first_removed_idx(old_count);
            debug!("removing desktops {removed_idx}..{}", removed_idx + removed_num);

            for view in self.views_mut() {
                view.remove_workspaces(removed_idx..removed_idx + removed_num);
            }
            self.thumbnails.remove_thumbnails(removed_idx, removed_num);
        }

        for view in self.views_mut() {
            view.set_active_workspace_idx(active_workspace_idx);
            view.update_workspace_count(old_count, new_count);
        }
    }

    fn append_workspaces(&mut self, old_count: usize) {
        let Some(shown) = &mut self.shown else {
            return;
        };

        for view in &mut shown.views {
            let monitor_idx = view.monitor_idx();
            for desktop in &self.screen.desktops[old_count..] {
                view.push_workspace(W::new(Some(*desktop), monitor_idx));
            }
        }
    }

    /// Index of the first workspace no longer bound to the desktop at its position.
    fn first_removed_idx(&self, old_count: usize) -> usize {
        let Some(view) = self.views().first() else {
            return self.screen.desktops.len();
        };

        let desktops = &self.screen.desktops;
        view.workspaces()
            .take(old_count)
            .enumerate()
            .position(|(idx, ws)| ws.desktop() != desktops.get(idx).copied())
            .unwrap_or(desktops.len())
    }

    /// Relays a new stacking order, bottom-most window first, to every view and the thumbnails.
    pub fn on_restacked(&mut self, stack: &[WindowId]) {
        self.screen.window_stack = stack.to_vec();

        if !self.is_shown() {
            return;
        }

        let indices: StackIndices = stack
            .iter()
            .enumerate()
            .map(|(idx, window)| (*window, idx))
            .collect();

        for view in self.views_mut() {
            view.sync_stacking(&indices);
        }
        self.thumbnails.sync_stacking(&indices);
    }
}
