use smithay::utils::{Logical, Rectangle};

use crate::layout::types::DragKind;
use crate::layout::view::WorkspacesView;
use crate::layout::workspace::{DesktopId, OverviewWorkspace, WindowId};

/// The window manager's state the overview is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    /// Desktops in window manager order.
    pub desktops: Vec<DesktopId>,
    pub active_workspace_idx: usize,
    /// Monitor rectangles in window manager order.
    pub monitors: Vec<Rectangle<f64, Logical>>,
    pub primary_monitor_idx: usize,
    /// Windows from bottom-most to top-most.
    pub window_stack: Vec<WindowId>,
}

impl Screen {
    pub fn primary_monitor(&self) -> Option<Rectangle<f64, Logical>> {
        self.monitors.get(self.primary_monitor_idx).copied()
    }
}

/// State that only exists while the overview is shown.
///
/// Notifications are handled only while this exists; dropping it on hide releases every view and
/// workspace.
#[derive(Debug)]
pub(super) struct Shown<W: OverviewWorkspace> {
    pub views: Vec<WorkspacesView<W>>,
}

impl<W: OverviewWorkspace> Shown<W> {
    pub fn new() -> Self {
        trace!("listening to overview notifications");
        Self { views: Vec::new() }
    }
}

impl<W: OverviewWorkspace> Drop for Shown<W> {
    fn drop(&mut self) {
        trace!("releasing {} views", self.views.len());
    }
}

/// Drag-and-drop session as seen by the display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) enum DisplayDragState {
    #[default]
    Idle,
    Dragging {
        kind: DragKind,
        /// The drag was cancelled and is snapping back; motion is no longer tracked.
        cancelled: bool,
    },
}
