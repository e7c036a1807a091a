//! Main loop driver
//!
//! Ticks the animator and flushes the frame to the output driver. Portable:
//! no async and no platform timers, the caller does the waiting.

use embassy_time::{Duration, Instant};

use crate::{
    OutputDriver,
    animator::{Animator, AnimatorError},
    pixel_buffer::PixelBuffer,
};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero when free running or behind).
    pub sleep_duration: Duration,
}

/// Portable strip player
///
/// Animation durations are in ticks, so the strip plays as fast as frames
/// are produced. Without a frame duration the player free runs and the flush
/// latency sets the pace. With one, the caller is told how long to sleep to
/// hold that frame rate.
///
/// # Usage
///
/// ```ignore
/// let animator = SweepConfig::rainbow().build::<3>()?;
/// let mut player = StripPlayer::<_, 125, 3>::new(animator, driver)?;
///
/// loop {
///     player.frame();
/// }
/// ```
pub struct StripPlayer<D: OutputDriver, const N: usize, const K: usize> {
    driver: D,
    animator: Animator<K>,
    pixels: PixelBuffer<N>,
    next_frame: Instant,
    frame_duration: Option<Duration>,
}

impl<D: OutputDriver, const N: usize, const K: usize> StripPlayer<D, N, K> {
    /// Create a free running player
    pub fn new(animator: Animator<K>, driver: D) -> Result<Self, AnimatorError> {
        if N == 0 {
            return Err(AnimatorError::EmptyStrip);
        }
        Ok(Self {
            driver,
            animator,
            pixels: PixelBuffer::new(),
            next_frame: Instant::from_millis(0),
            frame_duration: None,
        })
    }

    /// Create a player paced to `frame_duration` per frame
    pub fn with_frame_duration(
        animator: Animator<K>,
        driver: D,
        frame_duration: Duration,
    ) -> Result<Self, AnimatorError> {
        let mut player = Self::new(animator, driver)?;
        player.frame_duration = Some(frame_duration);
        Ok(player)
    }

    /// Run one tick and flush the frame
    ///
    /// All channels finish before the flush starts.
    pub fn frame(&mut self) {
        self.animator.update(self.pixels.as_mut_slice());
        self.driver.write(self.pixels.as_slice());
    }

    /// Run one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.frame();

        let Some(frame_duration) = self.frame_duration else {
            return FrameResult {
                next_deadline: now,
                sleep_duration: Duration::from_millis(0),
            };
        };

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = Duration::from_millis(frame_duration.as_millis() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }
        self.next_frame += frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.pixels
    }

    pub fn animator(&self) -> &Animator<K> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator<K> {
        &mut self.animator
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
