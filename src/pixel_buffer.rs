use crate::color::Rgbw;

/// Darken every pixel by `amount`, clamping each channel at zero
pub fn darken_all(pixels: &mut [Rgbw], amount: u8) {
    for pixel in pixels.iter_mut() {
        *pixel = pixel.darken(amount);
    }
}

/// In-memory frame of the whole strip
///
/// N is the number of pixels on the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgbw; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            pixels: [Rgbw::BLACK; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the color of a pixel, `None` if out of range
    pub fn get(&self, index: usize) -> Option<Rgbw> {
        self.pixels.get(index).copied()
    }

    /// Set the color of a pixel
    ///
    /// Out of range writes are ignored and return `false`.
    pub fn set(&mut self, index: usize, color: Rgbw) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgbw) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(Rgbw::BLACK);
    }

    pub fn darken_all(&mut self, amount: u8) {
        darken_all(&mut self.pixels, amount);
    }

    pub fn as_slice(&self) -> &[Rgbw] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgbw] {
        &mut self.pixels
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
