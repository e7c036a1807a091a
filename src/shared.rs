//! State shared between effect channels
//!
//! Only one effect runs at a time and each gets `&mut SharedState` for the
//! duration of its call, so writes are never concurrent. Channels run in
//! registration order: a value written by channel `i` is seen by channels
//! after `i` in the same tick and by channels before `i` on the next tick.

/// Direction of the moving pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepDirection {
    /// From the first pixel towards the last one
    #[default]
    Forward,
    /// From the last pixel towards the first one
    Backward,
}

impl SweepDirection {
    /// Opposite direction
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Step as a sign, `1` or `-1`
    pub const fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedState {
    /// Current sweep direction, flipped on every completed sweep
    pub direction: SweepDirection,
    /// Pixel painted last by the moving pixel
    pub last_pixel: usize,
    /// Hue offset added to every painted pixel, wraps in `0.0..1.0`
    pub base_hue: f32,
}

impl SharedState {
    pub const fn new(direction: SweepDirection) -> Self {
        Self {
            direction,
            last_pixel: 0,
            base_hue: 0.0,
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(SweepDirection::Forward)
    }
}
