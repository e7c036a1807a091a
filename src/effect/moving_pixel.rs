//! Moving pixel sweep
//!
//! A single lit pixel bounces between the strip ends following an easing
//! curve. Every pixel it passes over on a tick is painted too, so a fast
//! sweep leaves a continuous streak instead of isolated dots.

use libm::floorf;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{CycleEnd, Effect};
use crate::{
    animation::AnimationParam,
    color::{Hsl, Rgbw, blend_rgbw, hsl2rgb},
    easing::Easing,
    shared::{SharedState, SweepDirection},
};

const SWEEP_SATURATION: f32 = 1.0;
const SWEEP_LIGHTNESS: f32 = 0.3;

/// How a swept pixel gets its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Hue follows the pixel position plus the shared base hue, white off
    #[default]
    Hue,
    /// Position hue blended towards a fixed accent color
    Accent {
        color: Rgbw,
        /// Blend factor (0 = pure hue, 255 = pure accent)
        mix: u8,
    },
}

impl PaintStyle {
    /// Color of the pixel at `position` on a strip of `count` pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn color_at(self, position: usize, count: usize, base_hue: f32) -> Rgbw {
        let hue = position as f32 / count.max(1) as f32 + base_hue;
        let color = Rgbw::from(hsl2rgb(Hsl::new(hue, SWEEP_SATURATION, SWEEP_LIGHTNESS)));
        match self {
            Self::Hue => color,
            Self::Accent { color: accent, mix } => blend_rgbw(color, accent, mix),
        }
    }
}

/// Pixel index for eased progress on a strip of `count` pixels
///
/// Rounds half up and clamps to the last pixel. `count` must not be zero.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn pixel_at(eased: f32, direction: SweepDirection, count: usize) -> usize {
    let position = match direction {
        SweepDirection::Forward => eased,
        SweepDirection::Backward => 1.0 - eased,
    };
    let index = floorf(position * count as f32 + 0.5).max(0.0) as usize;
    index.min(count.saturating_sub(1))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MovingPixelEffect {
    easing: Easing,
    paint: PaintStyle,
}

impl MovingPixelEffect {
    pub const fn new(easing: Easing, paint: PaintStyle) -> Self {
        Self { easing, paint }
    }

    pub const fn easing(&self) -> Easing {
        self.easing
    }

    pub const fn paint(&self) -> PaintStyle {
        self.paint
    }

    fn paint_pixel(&self, leds: &mut [Rgbw], index: usize, base_hue: f32) {
        let count = leds.len();
        leds[index] = self.paint.color_at(index, count, base_hue);
    }
}

impl Effect for MovingPixelEffect {
    fn update(&mut self, param: AnimationParam, shared: &mut SharedState, leds: &mut [Rgbw]) {
        let count = leds.len();
        if count == 0 {
            return;
        }

        let eased = self.easing.apply(param.progress);
        let next = pixel_at(eased, shared.direction, count);
        let last = shared.last_pixel.min(count - 1);

        // Fill the streak between the previous and the new position,
        // stepping towards `next` so odd easing curves never wrap around
        if next > last {
            for index in last + 1..next {
                self.paint_pixel(leds, index, shared.base_hue);
            }
        } else if next < last {
            for index in (next + 1..last).rev() {
                self.paint_pixel(leds, index, shared.base_hue);
            }
        }
        self.paint_pixel(leds, next, shared.base_hue);

        shared.last_pixel = next;
    }

    fn complete(&mut self, shared: &mut SharedState, _leds: &mut [Rgbw]) -> CycleEnd {
        shared.direction = shared.direction.flipped();
        #[cfg(feature = "esp32-log")]
        println!(
            "[MovingPixelEffect.complete] bounce at {}, now {:?}",
            shared.last_pixel, shared.direction
        );
        CycleEnd::Restart
    }
}
