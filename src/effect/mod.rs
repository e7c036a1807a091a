//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod fade_all;
mod hue_rotate;
mod moving_pixel;

pub use fade_all::FadeAllEffect;
pub use hue_rotate::HueRotateEffect;
pub use moving_pixel::{MovingPixelEffect, PaintStyle, pixel_at};

use crate::{animation::AnimationParam, color::Rgbw, shared::SharedState};

const EFFECT_NAME_FADE_ALL: &str = "fade_all";
const EFFECT_NAME_MOVING_PIXEL: &str = "moving_pixel";
const EFFECT_NAME_HUE_ROTATE: &str = "hue_rotate";

const EFFECT_ID_FADE_ALL: u8 = 0;
const EFFECT_ID_MOVING_PIXEL: u8 = 1;
const EFFECT_ID_HUE_ROTATE: u8 = 2;

/// What a channel does once its cycle completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEnd {
    /// Start the next cycle from zero
    Restart,
    /// Stay completed; the channel is no longer invoked
    Stop,
}

pub trait Effect {
    /// Called exactly once per tick while the channel is active
    fn update(&mut self, _param: AnimationParam, _shared: &mut SharedState, _leds: &mut [Rgbw]) {}

    /// Called after `update` on the tick the cycle completes
    ///
    /// Applies the effect's per-cycle side effects and decides what the
    /// channel clock does next.
    fn complete(&mut self, _shared: &mut SharedState, _leds: &mut [Rgbw]) -> CycleEnd {
        CycleEnd::Restart
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    /// Periodic darkening of the whole strip
    FadeAll(FadeAllEffect),
    /// Pixel bouncing between the strip ends
    MovingPixel(MovingPixelEffect),
    /// Slow rotation of the shared base hue
    HueRotate(HueRotateEffect),
}

/// Known effect ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    FadeAll = EFFECT_ID_FADE_ALL,
    MovingPixel = EFFECT_ID_MOVING_PIXEL,
    HueRotate = EFFECT_ID_HUE_ROTATE,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FADE_ALL => Self::FadeAll,
            EFFECT_ID_MOVING_PIXEL => Self::MovingPixel,
            EFFECT_ID_HUE_ROTATE => Self::HueRotate,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeAll => EFFECT_NAME_FADE_ALL,
            Self::MovingPixel => EFFECT_NAME_MOVING_PIXEL,
            Self::HueRotate => EFFECT_NAME_HUE_ROTATE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FADE_ALL => Some(Self::FadeAll),
            EFFECT_NAME_MOVING_PIXEL => Some(Self::MovingPixel),
            EFFECT_NAME_HUE_ROTATE => Some(Self::HueRotate),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::FadeAll(_) => EffectId::FadeAll,
            Self::MovingPixel(_) => EffectId::MovingPixel,
            Self::HueRotate(_) => EffectId::HueRotate,
        }
    }

    /// Run the current effect for one tick
    pub fn update(&mut self, param: AnimationParam, shared: &mut SharedState, leds: &mut [Rgbw]) {
        match self {
            Self::FadeAll(effect) => effect.update(param, shared, leds),
            Self::MovingPixel(effect) => effect.update(param, shared, leds),
            Self::HueRotate(effect) => effect.update(param, shared, leds),
        }
    }

    /// Apply the cycle end policy of the current effect
    pub fn complete(&mut self, shared: &mut SharedState, leds: &mut [Rgbw]) -> CycleEnd {
        match self {
            Self::FadeAll(effect) => effect.complete(shared, leds),
            Self::MovingPixel(effect) => effect.complete(shared, leds),
            Self::HueRotate(effect) => effect.complete(shared, leds),
        }
    }
}

impl From<FadeAllEffect> for EffectSlot {
    fn from(effect: FadeAllEffect) -> Self {
        Self::FadeAll(effect)
    }
}

impl From<MovingPixelEffect> for EffectSlot {
    fn from(effect: MovingPixelEffect) -> Self {
        Self::MovingPixel(effect)
    }
}

impl From<HueRotateEffect> for EffectSlot {
    fn from(effect: HueRotateEffect) -> Self {
        Self::HueRotate(effect)
    }
}
