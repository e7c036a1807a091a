//! Afterglow trail
//!
//! Darkens the whole strip a little every time its (short) cycle completes.
//! Brighter effects repaint on top of it, leaving fading trails behind.

use super::{CycleEnd, Effect};
use crate::{color::Rgbw, pixel_buffer::darken_all, shared::SharedState};

const DEFAULT_DARKEN_BY: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeAllEffect {
    darken_by: u8,
}

impl Default for FadeAllEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DARKEN_BY)
    }
}

impl FadeAllEffect {
    pub const fn new(darken_by: u8) -> Self {
        Self { darken_by }
    }

    pub const fn darken_by(&self) -> u8 {
        self.darken_by
    }
}

impl Effect for FadeAllEffect {
    fn complete(&mut self, _shared: &mut SharedState, leds: &mut [Rgbw]) -> CycleEnd {
        darken_all(leds, self.darken_by);
        CycleEnd::Restart
    }
}
