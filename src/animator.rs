//! Multi-channel animation scheduler
//!
//! The animator owns a fixed set of channels, each pairing a tick clock with
//! an effect. One call to [`Animator::update`] is one tick: every active
//! channel is advanced and its effect invoked exactly once, in registration
//! order. The animator only keeps time; what happens when a cycle ends is
//! decided by each effect's [`Effect::complete`](crate::effect::Effect).

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    animation::{AnimationParam, AnimationState, AnimationTimer},
    color::Rgbw,
    effect::{CycleEnd, EffectSlot},
    shared::SharedState,
};

/// Errors returned while setting up or controlling channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorError {
    /// All channel slots are taken
    CapacityExceeded,
    /// A channel needs at least one tick per cycle
    ZeroDuration,
    /// No channel with this index
    UnknownChannel(usize),
    /// The strip has no pixels
    EmptyStrip,
}

/// A scheduled effect with its own clock
#[derive(Debug, Clone, Copy)]
pub struct AnimationChannel {
    timer: AnimationTimer,
    effect: EffectSlot,
}

impl AnimationChannel {
    pub const fn timer(&self) -> &AnimationTimer {
        &self.timer
    }

    pub const fn effect(&self) -> &EffectSlot {
        &self.effect
    }
}

/// Animation scheduler
///
/// K is the maximum number of channels
#[derive(Debug, Clone)]
pub struct Animator<const K: usize> {
    channels: Vec<AnimationChannel, K>,
    shared: SharedState,
}

impl<const K: usize> Animator<K> {
    pub const fn new(shared: SharedState) -> Self {
        Self {
            channels: Vec::new(),
            shared,
        }
    }

    /// Register a channel and start its clock
    ///
    /// Returns the channel index. Channels run in the order they were added.
    pub fn add(
        &mut self,
        duration: u32,
        effect: impl Into<EffectSlot>,
    ) -> Result<usize, AnimatorError> {
        if duration == 0 {
            return Err(AnimatorError::ZeroDuration);
        }
        let effect = effect.into();
        let index = self.channels.len();
        self.channels
            .push(AnimationChannel {
                timer: AnimationTimer::new(duration),
                effect,
            })
            .map_err(|_| AnimatorError::CapacityExceeded)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Animator.add] channel {} = {} every {} ticks",
            index,
            effect.id().as_str(),
            duration
        );
        Ok(index)
    }

    /// Advance every channel by one tick
    pub fn update(&mut self, leds: &mut [Rgbw]) {
        self.advance(1, leds);
    }

    /// Advance every channel by `delta` ticks at once
    ///
    /// Each active channel still sees exactly one effect invocation.
    pub fn advance(&mut self, delta: u32, leds: &mut [Rgbw]) {
        for (index, channel) in self.channels.iter_mut().enumerate() {
            if !channel.timer.is_active() {
                continue;
            }

            let state = channel.timer.advance(delta);
            let param = AnimationParam {
                progress: channel.timer.progress(),
                state,
                index,
            };
            channel.effect.update(param, &mut self.shared, leds);

            if state == AnimationState::Completed {
                let end = channel.effect.complete(&mut self.shared, leds);
                #[cfg(feature = "esp32-log")]
                println!("[Animator.advance] channel {} completed: {:?}", index, end);
                match end {
                    CycleEnd::Restart => channel.timer.restart(),
                    CycleEnd::Stop => channel.timer.stop(),
                }
            }
        }
    }

    /// Start the channel's cycle over, reactivating it if stopped
    pub fn restart(&mut self, index: usize) -> Result<(), AnimatorError> {
        self.channel_mut(index)?.timer.restart();
        Ok(())
    }

    /// Stop invoking the channel
    pub fn stop(&mut self, index: usize) -> Result<(), AnimatorError> {
        self.channel_mut(index)?.timer.stop();
        Ok(())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.channels
            .get(index)
            .is_some_and(|channel| channel.timer.is_active())
    }

    /// Check if any channel is still running
    pub fn is_animating(&self) -> bool {
        self.channels.iter().any(|channel| channel.timer.is_active())
    }

    pub fn channel(&self, index: usize) -> Option<&AnimationChannel> {
        self.channels.get(index)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub const fn shared(&self) -> &SharedState {
        &self.shared
    }

    pub fn shared_mut(&mut self) -> &mut SharedState {
        &mut self.shared
    }

    fn channel_mut(&mut self, index: usize) -> Result<&mut AnimationChannel, AnimatorError> {
        self.channels
            .get_mut(index)
            .ok_or(AnimatorError::UnknownChannel(index))
    }
}

impl<const K: usize> Default for Animator<K> {
    fn default() -> Self {
        Self::new(SharedState::default())
    }
}
