use crate::utils::FloatOrInt;

/// Default duration of workspace switch and controls reveal animations.
pub const DEFAULT_DURATION_MS: u32 = 250;

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Animations {
    #[knuffel(child)]
    pub off: bool,
    #[knuffel(child, unwrap(argument), default = FloatOrInt(1.))]
    pub slowdown: FloatOrInt<0, { i32::MAX }>,
    #[knuffel(child)]
    pub workspace_switch: Option<AnimationPart>,
    #[knuffel(child)]
    pub controls_reveal: Option<AnimationPart>,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            off: false,
            slowdown: FloatOrInt(1.),
            workspace_switch: None,
            controls_reveal: None,
        }
    }
}

impl Animations {
    /// Workspace slide between stacked positions, and the scroll adjustment tween.
    pub fn workspace_switch(&self) -> Animation {
        self.resolve(self.workspace_switch.as_ref())
    }

    /// Zoom fraction tween driving the side panel reveal.
    pub fn controls_reveal(&self) -> Animation {
        self.resolve(self.controls_reveal.as_ref())
    }

    fn resolve(&self, part: Option<&AnimationPart>) -> Animation {
        let mut anim = Animation::default();
        if let Some(part) = part {
            anim.off = part.off;
            if let Some(duration_ms) = part.duration_ms {
                anim.duration_ms = duration_ms;
            }
            if let Some(curve) = part.curve {
                anim.curve = curve;
            }
        }
        anim.off |= self.off;
        anim
    }
}

/// Animation block as written in the config; unset fields fall back to the defaults.
#[derive(knuffel::Decode, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationPart {
    #[knuffel(child)]
    pub off: bool,
    #[knuffel(child, unwrap(argument))]
    pub duration_ms: Option<u32>,
    #[knuffel(child, unwrap(argument))]
    pub curve: Option<Curve>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub off: bool,
    pub duration_ms: u32,
    pub curve: Curve,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            off: false,
            duration_ms: DEFAULT_DURATION_MS,
            curve: Curve::EaseOutQuad,
        }
    }
}

#[derive(knuffel::DecodeScalar, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    #[default]
    EaseOutQuad,
    EaseOutCubic,
    EaseOutExpo,
}
