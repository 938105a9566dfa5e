use crate::layout::display::{DisplayDragState, WorkspacesDisplay};
use crate::layout::types::{DragEvent, DragKind, DragMotionResult};
use crate::layout::workspace::{OverviewWorkspace, Thumbnails};

impl<W: OverviewWorkspace, T: Thumbnails> WorkspacesDisplay<W, T> {
    pub fn is_in_drag(&self) -> bool {
        matches!(self.drag, DisplayDragState::Dragging { .. })
    }

    /// Whether drag motion is tracked for panel hover.
    pub fn is_drag_monitor_installed(&self) -> bool {
        matches!(
            self.drag,
            DisplayDragState::Dragging {
                cancelled: false,
                ..
            }
        )
    }

    pub fn drag_begin(&mut self, kind: DragKind) {
        if !self.is_shown() {
            return;
        }

        debug!("{kind:?} drag begin");
        self.drag = DisplayDragState::Dragging {
            kind,
            cancelled: false,
        };

        for view in self.views_mut() {
            view.drag_begin();
        }
    }

    pub fn drag_cancelled(&mut self, kind: DragKind) {
        if !self.is_shown() || self.is_other_drag(kind) {
            return;
        }

        debug!("{kind:?} drag cancelled");
        if let DisplayDragState::Dragging { cancelled, .. } = &mut self.drag {
            *cancelled = true;
        }
    }

    pub fn drag_motion(&mut self, event: &DragEvent) -> DragMotionResult {
        if self.is_drag_monitor_installed() {
            let hovered = self.controls_area().contains(event.pos);
            self.set_controls_hovered(hovered);
        }

        let overview_animating = self.overview_animating;
        for view in self.views_mut() {
            view.drag_motion(&event.payload, overview_animating);
        }

        DragMotionResult::Continue
    }

    pub fn drag_end(&mut self, kind: DragKind) {
        if !self.is_shown() || self.is_other_drag(kind) {
            return;
        }

        debug!("{kind:?} drag end");
        self.drag = DisplayDragState::Idle;

        // Tearing the drag down replays the hover events it held back; re-evaluating zoom right
        // away would reveal and collapse the panel within one frame.
        self.pending_zoom_update = true;

        for view in self.views_mut() {
            view.drag_end();
        }
    }

    /// Whether a drag of a different kind than `kind` is in progress.
    fn is_other_drag(&self, kind: DragKind) -> bool {
        match self.drag {
            DisplayDragState::Dragging { kind: current, .. } if current != kind => {
                debug!("ignoring {kind:?} drag event during {current:?} drag");
                true
            }
            _ => false,
        }
    }
}
