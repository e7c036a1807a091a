//! Hue, saturation, lightness to RGB conversion
//!
//! Float based; all components live in `0.0..=1.0`. The hue is a position on
//! the color wheel and wraps, so `1.25` and `0.25` are the same hue.

use libm::floorf;

use crate::{color::Rgb, math8::unit_to_u8};

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub sat: f32,
    pub light: f32,
}

impl Hsl {
    pub const fn new(hue: f32, sat: f32, light: f32) -> Self {
        Self { hue, sat, light }
    }
}

/// Wrap a hue into `0.0..1.0`
#[inline]
fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue - floorf(hue);
    // floorf can leave exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = wrap_hue(t);
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to 8-bit RGB
pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let sat = hsl.sat.clamp(0.0, 1.0);
    let light = hsl.light.clamp(0.0, 1.0);

    if sat <= 0.0 {
        let v = unit_to_u8(light);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if light < 0.5 {
        light * (1.0 + sat)
    } else {
        light + sat - light * sat
    };
    let p = 2.0 * light - q;
    let hue = wrap_hue(hsl.hue);

    Rgb {
        r: unit_to_u8(hue_to_channel(p, q, hue + ONE_THIRD)),
        g: unit_to_u8(hue_to_channel(p, q, hue)),
        b: unit_to_u8(hue_to_channel(p, q, hue - ONE_THIRD)),
    }
}
