//! Per-channel animation clock
//!
//! Durations are counted in ticks, not wall-clock time. How fast an animation
//! plays on the strip depends on how often the main loop ticks.

/// State reported to a channel's effect on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    /// The clock reached its duration on this tick
    Completed,
}

/// Parameters passed to an effect once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParam {
    /// Linear progress of the current cycle, `0.0..=1.0`
    pub progress: f32,
    pub state: AnimationState,
    /// Registration index of the channel
    pub index: usize,
}

/// Tick counter of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimer {
    duration: u32,
    elapsed: u32,
    active: bool,
}

impl AnimationTimer {
    /// Create a running timer at the start of its cycle
    pub const fn new(duration: u32) -> Self {
        Self {
            duration,
            elapsed: 0,
            active: true,
        }
    }

    pub const fn duration(&self) -> u32 {
        self.duration
    }

    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Progress of the current cycle, clamped to `0.0..=1.0`
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.elapsed as f32 / self.duration as f32).min(1.0)
    }

    /// Move the clock forward by `delta` ticks
    ///
    /// The clock never passes its duration. Returns `Completed` when the
    /// duration is reached; the caller must then restart or stop the timer.
    pub fn advance(&mut self, delta: u32) -> AnimationState {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        if self.elapsed >= self.duration {
            AnimationState::Completed
        } else {
            AnimationState::Running
        }
    }

    /// Begin a new cycle
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.active = true;
    }

    /// Freeze the timer; it is no longer advanced
    pub fn stop(&mut self) {
        self.active = false;
    }
}
