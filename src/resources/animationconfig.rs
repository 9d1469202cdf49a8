//! Animation defaults resource.
//!
//! Holds the settings applied to animations that do not specify them, loaded
//! from an INI configuration file. Starts from safe defaults so a missing
//! file never blocks loading animations.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! fps = 10
//! loop = true
//! ping_pong = false
//! delay = 0.0
//! completion_behavior = remain_on_final_frame
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::animation::{
    AnimationCompletionBehavior, DEFAULT_FPS, DEFAULT_LOOP, DEFAULT_PING_PONG,
    SpriteAnimationBuilder,
};

const SECTION: &str = "animation";
const DEFAULT_DELAY: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./animation.ini";

/// Default animation settings.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Frames per second.
    pub fps: f32,
    /// Repeat playback forever.
    pub looped: bool,
    /// Reverse direction at each end instead of restarting.
    pub ping_pong: bool,
    /// Seconds before playback begins.
    pub delay: f32,
    /// What to show once a non-looping animation ends.
    pub completion_behavior: AnimationCompletionBehavior,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            looped: DEFAULT_LOOP,
            ping_pong: DEFAULT_PING_PONG,
            delay: DEFAULT_DELAY,
            completion_behavior: AnimationCompletionBehavior::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Returns an error if the
    /// file cannot be read or a value cannot be parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;

        info!(
            "Loaded animation config from {:?}: fps={}, loop={}, ping_pong={}, delay={}, completion={}",
            self.config_path,
            self.fps,
            self.looped,
            self.ping_pong,
            self.delay,
            self.completion_behavior
        );

        Ok(())
    }

    /// Same as [`load_from_file`](Self::load_from_file) but from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        if let Some(fps) = config
            .getfloat(SECTION, "fps")
            .map_err(|e| format!("Invalid fps: {}", e))?
        {
            self.fps = fps as f32;
        }
        if let Some(looped) = config
            .getbool(SECTION, "loop")
            .map_err(|e| format!("Invalid loop: {}", e))?
        {
            self.looped = looped;
        }
        if let Some(ping_pong) = config
            .getbool(SECTION, "ping_pong")
            .map_err(|e| format!("Invalid ping_pong: {}", e))?
        {
            self.ping_pong = ping_pong;
        }
        if let Some(delay) = config
            .getfloat(SECTION, "delay")
            .map_err(|e| format!("Invalid delay: {}", e))?
        {
            self.delay = delay as f32;
        }
        if let Some(behavior) = config.get(SECTION, "completion_behavior") {
            self.completion_behavior = behavior.parse()?;
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(SECTION, "fps", Some(self.fps.to_string()));
        config.set(SECTION, "loop", Some(self.looped.to_string()));
        config.set(SECTION, "ping_pong", Some(self.ping_pong.to_string()));
        config.set(SECTION, "delay", Some(self.delay.to_string()));
        config.set(
            SECTION,
            "completion_behavior",
            Some(self.completion_behavior.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved animation config to {:?}", self.config_path);

        Ok(())
    }

    /// A builder seeded with these defaults.
    pub fn builder(&self) -> SpriteAnimationBuilder {
        SpriteAnimationBuilder::new()
            .with_fps(self.fps)
            .with_loop(self.looped)
            .with_ping_pong(self.ping_pong)
            .with_delay(self.delay)
            .with_completion_behavior(self.completion_behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "spriteanim_config_{}_{}_{}.ini",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_defaults() {
        let c = AnimationConfig::new();
        assert_eq!(c.fps, 10.0);
        assert!(c.looped);
        assert!(!c.ping_pong);
        assert_eq!(c.delay, 0.0);
        assert_eq!(
            c.completion_behavior,
            AnimationCompletionBehavior::RemainOnFinalFrame
        );
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut c = AnimationConfig::new();
        c.load_from_str("[animation]\nfps = 24\nping_pong = true\n")
            .unwrap();
        assert_eq!(c.fps, 24.0);
        assert!(c.ping_pong);
        assert!(c.looped);
        assert_eq!(c.delay, 0.0);
    }

    #[test]
    fn test_load_from_str_completion_behavior() {
        let mut c = AnimationConfig::new();
        c.load_from_str("[animation]\ncompletion_behavior = hide_sprite\n")
            .unwrap();
        assert_eq!(c.completion_behavior, AnimationCompletionBehavior::HideSprite);
    }

    #[test]
    fn test_load_from_str_rejects_bad_values() {
        let mut c = AnimationConfig::new();
        assert!(c.load_from_str("[animation]\nfps = fast\n").is_err());
        assert!(
            c.load_from_str("[animation]\ncompletion_behavior = vanish\n")
                .is_err()
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut c = AnimationConfig::with_path(temp_file_path("missing"));
        assert!(c.load_from_file().is_err());
        assert_eq!(c.fps, 10.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_file_path("roundtrip");
        let mut saved = AnimationConfig::with_path(&path);
        saved.fps = 12.0;
        saved.looped = false;
        saved.delay = 0.5;
        saved.completion_behavior = AnimationCompletionBehavior::RevertToFirstFrame;
        saved.save_to_file().unwrap();

        let mut loaded = AnimationConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_builder_uses_defaults() {
        let mut c = AnimationConfig::new();
        c.fps = 5.0;
        c.looped = false;
        let anim = c
            .builder()
            .with_frame(crate::components::sprite::Sprite::new("a", 1.0, 1.0))
            .build();
        assert_eq!(anim.fps(), 5.0);
        assert!(!anim.looped());
        assert_eq!(anim.timing().unwrap().total_duration, 0.2);
    }
}
