//! Collaborators owned by the overview: per-monitor workspaces and the thumbnail strip.

use std::collections::HashMap;

use bitflags::bitflags;
use smithay::utils::{Logical, Rectangle};

/// Identity of a desktop in the window manager's desktop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesktopId(pub u64);

/// Stable sequence number of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

/// Position of every window in the stacking order, bottom-most window at 0.
pub type StackIndices = HashMap<WindowId, usize>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowPositionFlags: u8 {
        /// Move windows to their new slots with an animation.
        const ANIMATE = 1 << 0;
    }
}

/// What is being dragged across the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A window thumbnail.
    Window(WindowId),
    /// An application launcher item, identified by its app id.
    Item(String),
}

/// One desktop's window thumbnails on one monitor.
///
/// The overview positions and shows or hides the workspace as a whole; how windows are laid out
/// inside it is up to the implementation. Dropping the value destroys the workspace.
pub trait OverviewWorkspace {
    /// Creates the workspace for `desktop` on monitor `monitor_idx`.
    ///
    /// `desktop` is `None` for the static workspace shown on a secondary monitor when workspaces
    /// are restricted to the primary monitor.
    fn new(desktop: Option<DesktopId>, monitor_idx: usize) -> Self;

    fn desktop(&self) -> Option<DesktopId>;

    /// Sets the area that window thumbnails are laid out in.
    fn set_geometry(&mut self, area: Rectangle<f64, Logical>);

    /// Makes (or, with `None`, stops making) room for a dragged payload.
    fn set_reserved_slot(&mut self, payload: Option<&DragPayload>);

    fn sync_stacking(&mut self, stack: &StackIndices);

    fn position_windows(&mut self, flags: WindowPositionFlags);

    /// Animates windows from their desktop positions into the overview.
    fn zoom_to_overview(&mut self);

    /// Animates windows back to their desktop positions.
    fn zoom_from_overview(&mut self);

    /// Whether the workspace has no windows.
    fn is_empty(&self) -> bool;

    fn has_maximized_windows(&self) -> bool;
}

/// The strip of workspace thumbnails inside the side panel.
pub trait Thumbnails {
    fn show(&mut self);

    fn hide(&mut self);

    fn add_thumbnails(&mut self, start: usize, count: usize);

    fn remove_thumbnails(&mut self, start: usize, count: usize);

    fn sync_stacking(&mut self, stack: &StackIndices);

    /// Natural width of the strip at the given height, if it has one.
    fn preferred_width(&self, for_height: f64) -> Option<f64>;
}
