#![no_std]

pub mod animation;
pub mod animator;
pub mod color;
pub mod config;
pub mod easing;
pub mod effect;
pub mod math8;
pub mod pixel_buffer;
pub mod player;
pub mod shared;

pub use animation::{AnimationParam, AnimationState, AnimationTimer};
pub use animator::{AnimationChannel, Animator, AnimatorError};
pub use config::{ChannelConfig, FadeConfig, SweepConfig};
pub use easing::{Easing, EasingFn};
pub use effect::{CycleEnd, EffectId, EffectSlot};
pub use pixel_buffer::PixelBuffer;
pub use player::{FrameResult, StripPlayer};
pub use shared::{SharedState, SweepDirection};

pub use color::{Hsl, Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The player is generic over this trait.
pub trait OutputDriver {
    /// Write the full frame to the LED strip
    fn write(&mut self, pixels: &[Rgbw]);
}
