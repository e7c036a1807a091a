//! Rainbow rotation of the sweep color
//!
//! Has no pixels of its own: it only writes the shared base hue, which the
//! moving pixel adds to its position hue.

use super::{CycleEnd, Effect};
use crate::{animation::AnimationParam, color::Rgbw, shared::SharedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueRotateEffect {
    looping: bool,
}

impl Default for HueRotateEffect {
    fn default() -> Self {
        Self { looping: true }
    }
}

impl HueRotateEffect {
    /// Rotate once, then hold the base hue at zero
    #[must_use]
    pub fn once() -> Self {
        Self { looping: false }
    }
}

impl Effect for HueRotateEffect {
    fn update(&mut self, param: AnimationParam, shared: &mut SharedState, _leds: &mut [Rgbw]) {
        shared.base_hue = param.progress;
    }

    fn complete(&mut self, shared: &mut SharedState, _leds: &mut [Rgbw]) -> CycleEnd {
        shared.base_hue = 0.0;
        if self.looping {
            CycleEnd::Restart
        } else {
            CycleEnd::Stop
        }
    }
}
