//! Sprite-sheet animation descriptor.
//!
//! A [`SpriteAnimation`] holds the playback parameters of an animation (frame
//! rate, looping, ping-pong) and its ordered frames. The playback driver reads
//! the derived [`AnimationTiming`] to pick the frame for a given elapsed time.
//!
//! Timing is cached. Every mutation that affects it marks the descriptor
//! dirty, and the cached values can only be read through
//! [`SpriteAnimation::prepare_for_use`] (which recomputes when needed) or
//! [`SpriteAnimation::timing`] (which returns `None` while dirty).

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::sprite::Sprite;

pub const DEFAULT_FPS: f32 = 10.0;
pub const DEFAULT_LOOP: bool = true;
pub const DEFAULT_PING_PONG: bool = false;

/// What the renderer should show once a non-looping animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCompletionBehavior {
    #[default]
    RemainOnFinalFrame,
    RevertToFirstFrame,
    HideSprite,
}

impl AnimationCompletionBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationCompletionBehavior::RemainOnFinalFrame => "remain_on_final_frame",
            AnimationCompletionBehavior::RevertToFirstFrame => "revert_to_first_frame",
            AnimationCompletionBehavior::HideSprite => "hide_sprite",
        }
    }
}

impl fmt::Display for AnimationCompletionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationCompletionBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remain_on_final_frame" => Ok(AnimationCompletionBehavior::RemainOnFinalFrame),
            "revert_to_first_frame" => Ok(AnimationCompletionBehavior::RevertToFirstFrame),
            "hide_sprite" => Ok(AnimationCompletionBehavior::HideSprite),
            other => Err(format!("Unknown completion behavior: '{}'", other)),
        }
    }
}

/// Derived timing values of a prepared animation, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    pub seconds_per_frame: f32,
    /// Time to play every frame once, forward.
    pub iteration_duration: f32,
    /// Full playback length; infinite when looping.
    pub total_duration: f32,
}

impl AnimationTiming {
    /// No validation: a zero `fps` yields infinite durations.
    pub fn compute(fps: f32, looped: bool, ping_pong: bool, frame_count: usize) -> Self {
        let seconds_per_frame = 1.0 / fps;
        let iteration_duration = seconds_per_frame * frame_count as f32;
        let total_duration = if looped {
            f32::INFINITY
        } else if ping_pong {
            iteration_duration * 2.0
        } else {
            iteration_duration
        };
        Self {
            seconds_per_frame,
            iteration_duration,
            total_duration,
        }
    }

    pub fn is_endless(&self) -> bool {
        self.total_duration.is_infinite()
    }
}

/// Playback parameters and frames of a sprite-sheet animation.
#[derive(Debug, Clone, Component)]
pub struct SpriteAnimation {
    fps: f32,
    looped: bool,
    ping_pong: bool,
    /// Seconds to wait before playback begins.
    pub delay: f32,
    pub completion_behavior: AnimationCompletionBehavior,
    frames: Vec<Sprite>,
    timing: AnimationTiming,
    dirty: bool,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteAnimation {
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            looped: DEFAULT_LOOP,
            ping_pong: DEFAULT_PING_PONG,
            delay: 0.0,
            completion_behavior: AnimationCompletionBehavior::default(),
            frames: Vec::new(),
            timing: AnimationTiming {
                seconds_per_frame: 0.0,
                iteration_duration: 0.0,
                total_duration: 0.0,
            },
            dirty: true,
        }
    }

    pub fn with_frame(frame: Sprite) -> Self {
        let mut anim = Self::new();
        anim.add_frame(frame);
        anim
    }

    pub fn with_frames(frames: impl IntoIterator<Item = Sprite>) -> Self {
        let mut anim = Self::new();
        anim.add_frames(frames);
        anim
    }

    pub fn builder() -> SpriteAnimationBuilder {
        SpriteAnimationBuilder::new()
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn looped(&self) -> bool {
        self.looped
    }

    pub fn ping_pong(&self) -> bool {
        self.ping_pong
    }

    pub fn frames(&self) -> &[Sprite] {
        &self.frames
    }

    /// Frames can be edited in place; the count cannot change through this.
    pub fn frames_mut(&mut self) -> &mut [Sprite] {
        &mut self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Cached timing, or `None` if an edit happened since the last
    /// [`prepare_for_use`](Self::prepare_for_use).
    pub fn timing(&self) -> Option<AnimationTiming> {
        if self.dirty { None } else { Some(self.timing) }
    }

    pub fn set_fps(&mut self, fps: f32) -> &mut Self {
        self.fps = fps;
        self.dirty = true;
        self
    }

    pub fn set_loop(&mut self, looped: bool) -> &mut Self {
        self.looped = looped;
        self.dirty = true;
        self
    }

    pub fn set_ping_pong(&mut self, ping_pong: bool) -> &mut Self {
        self.ping_pong = ping_pong;
        self.dirty = true;
        self
    }

    pub fn set_delay(&mut self, delay: f32) -> &mut Self {
        self.delay = delay;
        self
    }

    pub fn set_completion_behavior(&mut self, behavior: AnimationCompletionBehavior) -> &mut Self {
        self.completion_behavior = behavior;
        self
    }

    /// Appends a frame. The frame count feeds the durations, so this marks
    /// the animation dirty.
    pub fn add_frame(&mut self, frame: Sprite) -> &mut Self {
        self.frames.push(frame);
        self.dirty = true;
        self
    }

    pub fn add_frames(&mut self, frames: impl IntoIterator<Item = Sprite>) -> &mut Self {
        for frame in frames {
            self.add_frame(frame);
        }
        self
    }

    /// Sets the origin of every frame currently in the animation.
    pub fn set_origin(&mut self, origin: Vec2) -> &mut Self {
        for frame in &mut self.frames {
            frame.set_origin(origin);
        }
        self
    }

    /// Recomputes the cached timing if anything changed and returns it.
    /// Calling it again without edits is a no-op.
    pub fn prepare_for_use(&mut self) -> AnimationTiming {
        if self.dirty {
            self.timing =
                AnimationTiming::compute(self.fps, self.looped, self.ping_pong, self.frames.len());
            self.dirty = false;
        }
        self.timing
    }
}

/// Consuming builder that yields an already prepared [`SpriteAnimation`].
#[derive(Debug, Clone)]
pub struct SpriteAnimationBuilder {
    anim: SpriteAnimation,
    origin: Option<Vec2>,
}

impl Default for SpriteAnimationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteAnimationBuilder {
    pub fn new() -> Self {
        Self {
            anim: SpriteAnimation::new(),
            origin: None,
        }
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.anim.set_fps(fps);
        self
    }

    pub fn with_loop(mut self, looped: bool) -> Self {
        self.anim.set_loop(looped);
        self
    }

    pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
        self.anim.set_ping_pong(ping_pong);
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.anim.set_delay(delay);
        self
    }

    pub fn with_completion_behavior(mut self, behavior: AnimationCompletionBehavior) -> Self {
        self.anim.set_completion_behavior(behavior);
        self
    }

    pub fn with_frame(mut self, frame: Sprite) -> Self {
        self.anim.add_frame(frame);
        self
    }

    pub fn with_frames(mut self, frames: impl IntoIterator<Item = Sprite>) -> Self {
        self.anim.add_frames(frames);
        self
    }

    /// Origin applied to all frames at build time, whenever they were added.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn build(self) -> SpriteAnimation {
        let mut anim = self.anim;
        if let Some(origin) = self.origin {
            anim.set_origin(origin);
        }
        anim.prepare_for_use();
        anim
    }
}
