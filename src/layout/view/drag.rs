use crate::layout::types::DragMotionResult;
use crate::layout::view::{DragState, Motion, WorkspacesView};
use crate::layout::workspace::{DragPayload, OverviewWorkspace};

impl<W: OverviewWorkspace> WorkspacesView<W> {
    pub fn drag_begin(&mut self) {
        if self.motion == Motion::Scrolling {
            return;
        }

        self.drag = DragState::Dragging {
            slot_reserved: false,
        };
        self.update_visibility();
    }

    /// Handles a drag motion event.
    ///
    /// Workspaces are told to make room for the payload on the first motion of a drag only;
    /// reserving again on every motion would keep reflowing their windows.
    pub fn drag_motion(
        &mut self,
        payload: &DragPayload,
        overview_animating: bool,
    ) -> DragMotionResult {
        if overview_animating {
            return DragMotionResult::Continue;
        }

        let DragState::Dragging { slot_reserved } = &mut self.drag else {
            return DragMotionResult::Continue;
        };

        if !*slot_reserved {
            *slot_reserved = true;

            for slot in &mut self.workspaces {
                slot.workspace.set_reserved_slot(Some(payload));
            }
            for ws in &mut self.extra_workspaces {
                ws.set_reserved_slot(Some(payload));
            }
        }

        DragMotionResult::Continue
    }

    pub fn drag_end(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }

        self.drag = DragState::Idle;

        for slot in &mut self.workspaces {
            slot.workspace.set_reserved_slot(None);
        }
        for ws in &mut self.extra_workspaces {
            ws.set_reserved_slot(None);
        }

        self.update_visibility();
    }
}
