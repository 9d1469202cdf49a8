//! Animation resource registry.
//!
//! Central store of [`SpriteAnimation`] definitions keyed by string IDs, so a
//! single definition can be shared by every entity that plays it. Definitions
//! can be registered in code or loaded from a JSON file:
//!
//! ```json
//! { "animations": {
//!     "walk": {
//!         "fps": 12, "loop": false, "ping_pong": true, "delay": 0.25,
//!         "completion_behavior": "hide_sprite", "origin": [8, 8],
//!         "grid": { "tex_key": "hero", "width": 16, "height": 16, "columns": 4, "count": 8 }
//!     }
//! } }
//! ```
//!
//! Settings missing from an entry fall back to [`AnimationConfig`].

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::components::animation::{AnimationCompletionBehavior, SpriteAnimation};
use crate::components::sprite::Sprite;
use crate::resources::animationconfig::AnimationConfig;

#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, SpriteAnimation>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an animation, returning the one previously stored under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        animation: SpriteAnimation,
    ) -> Option<SpriteAnimation> {
        self.animations.insert(key.into(), animation)
    }

    pub fn get(&self, key: &str) -> Option<&SpriteAnimation> {
        self.animations.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SpriteAnimation> {
        self.animations.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<SpriteAnimation> {
        self.animations.remove(key)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn has_dirty(&self) -> bool {
        self.animations.values().any(SpriteAnimation::is_dirty)
    }

    /// Prepares every dirty animation. Returns how many were recomputed.
    pub fn prepare_all(&mut self) -> usize {
        let mut prepared = 0;
        for (key, animation) in self.animations.iter_mut() {
            if animation.is_dirty() {
                let timing = animation.prepare_for_use();
                debug!(
                    "Prepared animation '{}': {} frames, {:.4}s/frame, total {}s",
                    key,
                    animation.frame_count(),
                    timing.seconds_per_frame,
                    timing.total_duration
                );
                prepared += 1;
            }
        }
        prepared
    }

    /// Load animations from a JSON file into a new store.
    pub fn load_from_file(path: &Path, config: &AnimationConfig) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read animation file {}: {e}", path.display()))?;
        let store = Self::load_from_str(&raw, config)
            .map_err(|e| format!("Failed to load animation file {}: {e}", path.display()))?;
        info!(
            "Loaded {} animations from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load animations from JSON text. Every returned animation is prepared.
    pub fn load_from_str(text: &str, config: &AnimationConfig) -> Result<Self, String> {
        let json: AnimationFileJson =
            serde_json::from_str(text).map_err(|e| format!("Invalid animation JSON: {e}"))?;

        let mut store = Self::new();
        for (key, entry) in json.animations {
            let animation = build_animation(&key, entry, config)?;
            store.insert(key, animation);
        }
        Ok(store)
    }
}

// --- JSON deserialization types (private) ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnimationFileJson {
    animations: FxHashMap<String, AnimationJson>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnimationJson {
    fps: Option<f32>,
    #[serde(rename = "loop")]
    looped: Option<bool>,
    ping_pong: Option<bool>,
    delay: Option<f32>,
    completion_behavior: Option<AnimationCompletionBehavior>,
    origin: Option<Vec2>,
    #[serde(default)]
    frames: Vec<Sprite>,
    grid: Option<GridJson>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridJson {
    tex_key: String,
    width: f32,
    height: f32,
    #[serde(default)]
    columns: usize,
    count: usize,
}

fn build_animation(
    key: &str,
    entry: AnimationJson,
    config: &AnimationConfig,
) -> Result<SpriteAnimation, String> {
    let mut builder = config.builder().with_frames(entry.frames);
    if let Some(grid) = entry.grid {
        builder = builder.with_frames(Sprite::from_grid(
            &grid.tex_key,
            grid.width,
            grid.height,
            grid.columns,
            grid.count,
        ));
    }
    if let Some(fps) = entry.fps {
        builder = builder.with_fps(fps);
    }
    if let Some(looped) = entry.looped {
        builder = builder.with_loop(looped);
    }
    if let Some(ping_pong) = entry.ping_pong {
        builder = builder.with_ping_pong(ping_pong);
    }
    if let Some(delay) = entry.delay {
        builder = builder.with_delay(delay);
    }
    if let Some(behavior) = entry.completion_behavior {
        builder = builder.with_completion_behavior(behavior);
    }
    if let Some(origin) = entry.origin {
        builder = builder.with_origin(origin);
    }

    let animation = builder.build();
    if animation.frame_count() == 0 {
        return Err(format!("Animation '{}' has no frames", key));
    }
    Ok(animation)
}
