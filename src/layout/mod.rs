//! Workspace overview layout.
//!
//! The overview shows every desktop as a workspace, stacked vertically with only the active one
//! on screen, next to a side panel with workspace thumbnails. Each monitor gets its own
//! [`WorkspacesView`]; the [`WorkspacesDisplay`] owns the views of all monitors, drives the
//! reveal of the side panel and tracks drag-and-drop across monitors.
//!
//! One monitor is *primary*. Its view owns the authoritative [`ScrollAdjustment`]: swipes drive
//! it, and its value is copied into the adjustments of all other views, never the other way.
//!
//! Nothing here talks to the window manager directly. The host passes the window manager's
//! state in (see [`Screen`]) and forwards notifications as method calls, and the overview answers
//! with [`OverviewRequest`]s collected by [`WorkspacesDisplay::take_requests`].
//!
//! All animations sample a shared [`Clock`](crate::animation::Clock). The host calls
//! [`WorkspacesDisplay::advance_animations`] once per frame, before redrawing; this is where
//! finished transitions get their bookkeeping done.

use std::path::Path;

use anyhow::Context as _;
use overview_config::{Config, TextDirection};

pub mod adjustment;
pub mod animated_value;
pub mod display;
pub mod types;
pub mod view;
pub mod workspace;

pub use self::adjustment::ScrollAdjustment;
pub use self::display::{Screen, WorkspacesDisplay};
pub use self::types::{
    DragEvent, DragKind, DragMotionResult, OverviewRequest, SwipeScrollResult,
    WorkspaceDirection,
};
pub use self::view::{Motion, ViewRole, WorkspacesView};
pub use self::workspace::{
    DesktopId, DragPayload, OverviewWorkspace, StackIndices, Thumbnails, WindowId,
    WindowPositionFlags,
};


/// Resolved overview options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub workspaces_only_on_primary: bool,
    pub workspace_spacing: f64,
    pub controls_visible_width: f64,
    pub controls_width: f64,
    pub text_direction: TextDirection,
    pub animations: AnimationOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationOptions {
    pub slowdown: f64,
    pub workspace_switch: overview_config::Animation,
    pub controls_reveal: overview_config::Animation,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        let overview = &config.overview;
        let animations = &config.animations;

        Self {
            workspaces_only_on_primary: overview.workspaces_only_on_primary,
            workspace_spacing: overview.workspace_spacing.0,
            controls_visible_width: overview.controls_visible_width.0,
            controls_width: overview.controls_width.0,
            text_direction: overview.text_direction,
            animations: AnimationOptions {
                slowdown: animations.slowdown.0,
                workspace_switch: animations.workspace_switch(),
                controls_reveal: animations.controls_reveal(),
            },
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = Config::load(path)
            .map_err(|err| anyhow::anyhow!("{err:?}"))
            .with_context(|| format!("error loading overview options from {path:?}"))?;
        Ok(Self::from_config(&config))
    }

    pub fn is_rtl(&self) -> bool {
        self.text_direction == TextDirection::Rtl
    }
}
