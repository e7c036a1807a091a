mod hsl;
mod rgbw;

pub use hsl::{Hsl, hsl2rgb};
pub use rgbw::{Rgbw, blend_rgbw};
use smart_leds::RGB8;

pub type Rgb = RGB8;
