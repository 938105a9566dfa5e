//! Types shared between the workspaces view and the display.

use smithay::utils::{Logical, Point};

use super::workspace::DragPayload;

/// Something the overview asks its host (the window manager side) to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewRequest {
    /// Activate the desktop at this index.
    ActivateWorkspace(usize),
    /// Close the overview.
    HideOverview,
    /// Switch to the neighboring desktop.
    MoveWorkspace(WorkspaceDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceDirection {
    Up,
    Down,
}

/// How a swipe scroll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeScrollResult {
    /// The pointer moved and the swipe scrolled.
    Swipe,
    /// The swipe had no net movement and degenerated into a click.
    Click,
}

/// Flavor of an overview drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// An application item, e.g. from the dash or the app grid.
    Item,
    /// A window thumbnail.
    Window,
}

/// A motion event of an ongoing drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent {
    /// Position of the drag target in stage coordinates.
    pub pos: Point<f64, Logical>,
    pub payload: DragPayload,
}

/// What a drag monitor tells the drag machinery after handling a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMotionResult {
    /// Keep delivering motion events.
    Continue,
}
