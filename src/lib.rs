//! Sprite-sheet animation definitions.
//!
//! This crate describes sprite-sheet animations (frame rate, looping,
//! ping-pong, ordered frames) and derives the timing values a playback driver
//! needs to pick the frame to show. Definitions are shared through an ECS
//! resource and can be loaded from JSON, with defaults read from an INI file.

pub mod components;
pub mod resources;
pub mod systems;
