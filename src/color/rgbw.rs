use crate::{color::Rgb, math8::blend8};

/// Color of a single RGBW strip pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Dedicated white LED
    pub w: u8,
}

impl Rgbw {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Lift an RGB color onto the strip, leaving the white LED off
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 0)
    }

    /// Color channels without the white LED
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Darken every channel by `amount`, stopping at zero
    #[must_use]
    pub const fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            w: self.w.saturating_sub(amount),
        }
    }

    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.w == 0
    }
}

impl From<Rgb> for Rgbw {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// Blend two RGBW colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_rgbw(a: Rgbw, b: Rgbw, amount_of_b: u8) -> Rgbw {
    Rgbw {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
        w: blend8(a.w, b.w, amount_of_b),
    }
}
