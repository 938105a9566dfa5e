//! Configuration for the workspaces overview.
//!
//! The config is a KDL document with two top-level sections, `overview` and `animations`. Every
//! node is optional; an empty document yields [`Config::default()`].

use std::ffi::OsStr;
use std::path::Path;

use miette::{Context, IntoDiagnostic};
use tracing::debug;

pub mod animations;
pub mod utils;

pub use crate::animations::{Animation, AnimationPart, Animations, Curve};
pub use crate::utils::FloatOrInt;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub overview: Overview,
    #[knuffel(child, default)]
    pub animations: Animations,
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Overview {
    /// Show the workspace stack on the primary monitor only.
    ///
    /// Other monitors then get a single static workspace each.
    #[knuffel(child)]
    pub workspaces_only_on_primary: bool,
    /// Gap between vertically stacked workspaces.
    #[knuffel(child, unwrap(argument), default)]
    pub workspace_spacing: FloatOrInt<0, 65535>,
    /// Width of the strip of the side panel that stays visible while collapsed.
    #[knuffel(child, unwrap(argument), default = FloatOrInt(32.))]
    pub controls_visible_width: FloatOrInt<0, 65535>,
    /// Natural width of the side panel when the thumbnail strip does not report one.
    #[knuffel(child, unwrap(argument), default)]
    pub controls_width: FloatOrInt<0, 65535>,
    #[knuffel(child, unwrap(argument), default)]
    pub text_direction: TextDirection,
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            workspaces_only_on_primary: false,
            workspace_spacing: FloatOrInt(0.),
            controls_visible_width: FloatOrInt(32.),
            controls_width: FloatOrInt(0.),
            text_direction: TextDirection::default(),
        }
    }
}

/// Which screen edge the side panel sits on: right for `ltr`, left for `rtl`.
#[derive(knuffel::DecodeScalar, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let config = Self::parse(
            path.file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("config.kdl"),
            &contents,
        )
        .context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        knuffel::parse(filename, text)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[track_caller]
    fn do_parse(text: &str) -> Config {
        Config::parse("test.kdl", text)
            .map_err(miette::Report::new)
            .unwrap()
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(do_parse(""), Config::default());
    }

    #[test]
    fn parse_overview() {
        let config = do_parse(
            r#"
            overview {
                workspaces-only-on-primary
                workspace-spacing 12
                controls-visible-width 24.5
                controls-width 180
                text-direction "rtl"
            }
            "#,
        );

        assert_debug_snapshot!(config.overview, @r#"
        Overview {
            workspaces_only_on_primary: true,
            workspace_spacing: FloatOrInt(
                12.0,
            ),
            controls_visible_width: FloatOrInt(
                24.5,
            ),
            controls_width: FloatOrInt(
                180.0,
            ),
            text_direction: Rtl,
        }
        "#);
    }

    #[test]
    fn parse_animations() {
        let config = do_parse(
            r#"
            animations {
                slowdown 2
                workspace-switch {
                    duration-ms 100
                    curve "ease-out-cubic"
                }
                controls-reveal {
                    off
                }
            }
            "#,
        );

        let anims = &config.animations;
        assert_eq!(anims.slowdown, FloatOrInt(2.));
        assert_eq!(
            anims.workspace_switch(),
            Animation {
                off: false,
                duration_ms: 100,
                curve: Curve::EaseOutCubic,
            }
        );
        assert_eq!(
            anims.controls_reveal(),
            Animation {
                off: true,
                duration_ms: 250,
                curve: Curve::EaseOutQuad,
            }
        );
    }

    #[test]
    fn global_off_disables_everything() {
        let config = do_parse("animations { off; }");
        assert!(config.animations.workspace_switch().off);
        assert!(config.animations.controls_reveal().off);
    }

    #[test]
    fn negative_spacing_is_rejected() {
        assert!(Config::parse("test.kdl", "overview { workspace-spacing -4; }").is_err());
    }

    #[test]
    fn unknown_curve_is_rejected() {
        let text = r#"animations { workspace-switch { curve "bounce"; } }"#;
        assert!(Config::parse("test.kdl", text).is_err());
    }
}
