//! Easing curves for animation progress
//!
//! An easing maps linear progress in `0.0..=1.0` to eased progress. Curves are
//! pure functions of progress and never look at the clock, so any channel can
//! swap its curve without touching the scheduler.
//!
//! Every named curve is pinned to `0.0` at the start and `1.0` at the end.
//! In between a curve is free to do what it likes; callers must not assume
//! the result is monotonic.

use core::f32::consts::PI;

use libm::{cosf, powf, sqrtf};

/// Plain function easing, used by [`Easing::Custom`]
pub type EasingFn = fn(progress: f32) -> f32;

/// Exponent of the gamma curve
const GAMMA: f32 = 1.0 / 0.45;

/// Known easing curves
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    QuadraticCenter,
    CubicIn,
    CubicOut,
    CubicInOut,
    CubicCenter,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuarticCenter,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    QuinticCenter,
    SinusoidalIn,
    SinusoidalOut,
    SinusoidalInOut,
    SinusoidalCenter,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    ExponentialCenter,
    CircularIn,
    CircularOut,
    CircularInOut,
    CircularCenter,
    Gamma,
    /// User supplied curve
    Custom(EasingFn),
}

/// Shape family of a curve
#[derive(Clone, Copy)]
enum Family {
    Power(i32),
    Sinusoidal,
    Exponential,
    Circular,
}

/// Which part of the family curve is used
#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
    /// Fast at both ends, slow in the middle
    Center,
}

impl Family {
    fn ease_in(self, p: f32) -> f32 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Power(exp) => powf(p, exp as f32),
            Self::Sinusoidal => 1.0 - cosf(p * PI / 2.0),
            Self::Exponential => {
                if p <= 0.0 {
                    0.0
                } else {
                    powf(2.0, 10.0 * p - 10.0)
                }
            }
            Self::Circular => 1.0 - sqrtf((1.0 - p * p).max(0.0)),
        }
    }

    fn ease_out(self, p: f32) -> f32 {
        1.0 - self.ease_in(1.0 - p)
    }

    fn ease(self, shape: Shape, p: f32) -> f32 {
        match shape {
            Shape::In => self.ease_in(p),
            Shape::Out => self.ease_out(p),
            Shape::InOut => {
                if p < 0.5 {
                    self.ease_in(2.0 * p) / 2.0
                } else {
                    1.0 - self.ease_in(2.0 - 2.0 * p) / 2.0
                }
            }
            Shape::Center => {
                if p < 0.5 {
                    self.ease_out(2.0 * p) / 2.0
                } else {
                    0.5 + self.ease_in(2.0 * p - 1.0) / 2.0
                }
            }
        }
    }
}

impl Easing {
    /// Every named curve, in declaration order
    pub const ALL: [Self; 30] = [
        Self::Linear,
        Self::QuadraticIn,
        Self::QuadraticOut,
        Self::QuadraticInOut,
        Self::QuadraticCenter,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::CubicCenter,
        Self::QuarticIn,
        Self::QuarticOut,
        Self::QuarticInOut,
        Self::QuarticCenter,
        Self::QuinticIn,
        Self::QuinticOut,
        Self::QuinticInOut,
        Self::QuinticCenter,
        Self::SinusoidalIn,
        Self::SinusoidalOut,
        Self::SinusoidalInOut,
        Self::SinusoidalCenter,
        Self::ExponentialIn,
        Self::ExponentialOut,
        Self::ExponentialInOut,
        Self::ExponentialCenter,
        Self::CircularIn,
        Self::CircularOut,
        Self::CircularInOut,
        Self::CircularCenter,
        Self::Gamma,
    ];

    /// Apply the curve to linear progress
    ///
    /// Named curves return exactly `0.0` for progress `<= 0.0` and exactly
    /// `1.0` for progress `>= 1.0`. Custom curves are called as is.
    pub fn apply(self, progress: f32) -> f32 {
        let curve = match self {
            Self::Custom(ease) => return ease(progress),
            Self::Linear => return progress.clamp(0.0, 1.0),
            Self::Gamma => None,
            named => named.curve(),
        };
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        match curve {
            Some((family, shape)) => family.ease(shape, progress),
            None => powf(progress, GAMMA),
        }
    }

    fn curve(self) -> Option<(Family, Shape)> {
        use Family::{Circular, Exponential, Power, Sinusoidal};
        use Shape::{Center, In, InOut, Out};

        Some(match self {
            Self::QuadraticIn => (Power(2), In),
            Self::QuadraticOut => (Power(2), Out),
            Self::QuadraticInOut => (Power(2), InOut),
            Self::QuadraticCenter => (Power(2), Center),
            Self::CubicIn => (Power(3), In),
            Self::CubicOut => (Power(3), Out),
            Self::CubicInOut => (Power(3), InOut),
            Self::CubicCenter => (Power(3), Center),
            Self::QuarticIn => (Power(4), In),
            Self::QuarticOut => (Power(4), Out),
            Self::QuarticInOut => (Power(4), InOut),
            Self::QuarticCenter => (Power(4), Center),
            Self::QuinticIn => (Power(5), In),
            Self::QuinticOut => (Power(5), Out),
            Self::QuinticInOut => (Power(5), InOut),
            Self::QuinticCenter => (Power(5), Center),
            Self::SinusoidalIn => (Sinusoidal, In),
            Self::SinusoidalOut => (Sinusoidal, Out),
            Self::SinusoidalInOut => (Sinusoidal, InOut),
            Self::SinusoidalCenter => (Sinusoidal, Center),
            Self::ExponentialIn => (Exponential, In),
            Self::ExponentialOut => (Exponential, Out),
            Self::ExponentialInOut => (Exponential, InOut),
            Self::ExponentialCenter => (Exponential, Center),
            Self::CircularIn => (Circular, In),
            Self::CircularOut => (Circular, Out),
            Self::CircularInOut => (Circular, InOut),
            Self::CircularCenter => (Circular, Center),
            Self::Linear | Self::Gamma | Self::Custom(_) => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadraticIn => "quadratic_in",
            Self::QuadraticOut => "quadratic_out",
            Self::QuadraticInOut => "quadratic_in_out",
            Self::QuadraticCenter => "quadratic_center",
            Self::CubicIn => "cubic_in",
            Self::CubicOut => "cubic_out",
            Self::CubicInOut => "cubic_in_out",
            Self::CubicCenter => "cubic_center",
            Self::QuarticIn => "quartic_in",
            Self::QuarticOut => "quartic_out",
            Self::QuarticInOut => "quartic_in_out",
            Self::QuarticCenter => "quartic_center",
            Self::QuinticIn => "quintic_in",
            Self::QuinticOut => "quintic_out",
            Self::QuinticInOut => "quintic_in_out",
            Self::QuinticCenter => "quintic_center",
            Self::SinusoidalIn => "sinusoidal_in",
            Self::SinusoidalOut => "sinusoidal_out",
            Self::SinusoidalInOut => "sinusoidal_in_out",
            Self::SinusoidalCenter => "sinusoidal_center",
            Self::ExponentialIn => "exponential_in",
            Self::ExponentialOut => "exponential_out",
            Self::ExponentialInOut => "exponential_in_out",
            Self::ExponentialCenter => "exponential_center",
            Self::CircularIn => "circular_in",
            Self::CircularOut => "circular_out",
            Self::CircularInOut => "circular_in_out",
            Self::CircularCenter => "circular_center",
            Self::Gamma => "gamma",
            Self::Custom(_) => "custom",
        }
    }

    /// Look up a named curve. Custom curves have no name to parse.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|easing| easing.as_str() == s)
    }
}
