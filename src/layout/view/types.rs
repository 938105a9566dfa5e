use crate::layout::animated_value::AnimatedValue;

/// What currently drives the workspace positions of a view.
///
/// Transitions:
/// - `Idle` -> `Animating`: a workspace is activated with an animation.
/// - `Animating` -> `Idle`: the slide of the first workspace completes, or a workspace is
///   activated without an animation.
/// - `Idle` | `Animating` -> `Scrolling`: a swipe starts; ongoing slides stop where they are.
/// - `Scrolling` -> `Idle`: the swipe ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    /// Workspaces slide toward their positions around the active workspace.
    Animating,
    /// Positions follow the scroll adjustment of an ongoing swipe.
    Scrolling,
}

/// Drag-and-drop state of a view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Whether the workspaces were already told to make room for the payload.
        ///
        /// Reserving happens on the first motion event only.
        slot_reserved: bool,
    },
}

/// Whether a view's scroll adjustment is authoritative or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRole {
    /// View on the primary monitor. Its adjustment is driven by swipes and tweens.
    Primary,
    /// View on any other monitor. Its adjustment is a copy of the primary one.
    Secondary,
}

/// A workspace together with the position and visibility of its root container.
#[derive(Debug)]
pub struct WorkspaceSlot<W> {
    pub workspace: W,
    /// Vertical offset relative to the view's area.
    pub y: AnimatedValue,
    pub visible: bool,
}

impl<W> WorkspaceSlot<W> {
    pub fn new(workspace: W) -> Self {
        Self {
            workspace,
            y: AnimatedValue::new(0.),
            visible: false,
        }
    }
}
