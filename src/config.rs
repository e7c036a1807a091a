//! Startup configuration of the sweep animation
//!
//! Everything here is fixed when the animator is built; nothing is
//! reconfigured while it runs.

use crate::{
    animator::{Animator, AnimatorError},
    color::Rgbw,
    easing::Easing,
    effect::{FadeAllEffect, HueRotateEffect, MovingPixelEffect, PaintStyle},
    shared::{SharedState, SweepDirection},
};

/// Accent color of the dot preset: a touch of blue on the white LED
pub const DOT_COLOR: Rgbw = Rgbw::new(0, 0, 10, 90);

/// Timing of a single channel
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Ticks per cycle
    pub duration: u32,
    pub easing: Easing,
}

/// Configuration of the fade channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeConfig {
    /// Ticks between two darkening steps
    pub duration: u32,
    /// Amount subtracted from every color channel per step
    pub darken_by: u8,
}

/// Configuration of the whole sweep animation
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    pub fade: FadeConfig,
    pub sweep: ChannelConfig,
    /// Ticks per hue rotation, `None` for a fixed position hue
    pub hue: Option<u32>,
    /// Initial sweep direction
    pub direction: SweepDirection,
    pub paint: PaintStyle,
}

impl SweepConfig {
    /// Rainbow sweep: the moving pixel slowly cycles through all hues
    pub const fn rainbow() -> Self {
        Self {
            fade: FadeConfig {
                duration: 6,
                darken_by: 5,
            },
            sweep: ChannelConfig {
                duration: 300,
                easing: Easing::QuinticInOut,
            },
            hue: Some(10_000),
            direction: SweepDirection::Forward,
            paint: PaintStyle::Hue,
        }
    }

    /// Slow dot sweep with the white LED accent
    pub const fn dot() -> Self {
        Self {
            fade: FadeConfig {
                duration: 4,
                darken_by: 5,
            },
            sweep: ChannelConfig {
                duration: 1000,
                easing: Easing::ExponentialInOut,
            },
            hue: None,
            direction: SweepDirection::Forward,
            paint: PaintStyle::Accent {
                color: DOT_COLOR,
                mix: 128,
            },
        }
    }

    /// Number of channels this configuration registers
    pub const fn channel_count(&self) -> usize {
        if self.hue.is_some() { 3 } else { 2 }
    }

    /// Build the animator
    ///
    /// Channels are registered as fade, sweep, then hue rotation. The sweep
    /// therefore always paints with the base hue of the previous tick.
    pub fn build<const K: usize>(&self) -> Result<Animator<K>, AnimatorError> {
        let mut animator = Animator::new(SharedState::new(self.direction));
        animator.add(self.fade.duration, FadeAllEffect::new(self.fade.darken_by))?;
        animator.add(
            self.sweep.duration,
            MovingPixelEffect::new(self.sweep.easing, self.paint),
        )?;
        if let Some(duration) = self.hue {
            animator.add(duration, HueRotateEffect::default())?;
        }
        Ok(animator)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::rainbow()
    }
}
