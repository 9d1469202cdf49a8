//! Animation preparation system.
//!
//! - [`prepare_animations`] recomputes the cached timing of every edited
//!   animation in the [`AnimationStore`] so the playback side can read
//!   [`SpriteAnimation::timing`](crate::components::animation::SpriteAnimation::timing)
//!   without mutable access.
//!
//! Schedule it before whatever consumes animation timing.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::animationstore::AnimationStore;

/// Prepare every dirty animation in the store.
///
/// Only takes the store mutably when something needs recomputing, so
/// `Res<AnimationStore>::is_changed()` stays false on idle frames.
pub fn prepare_animations(mut store: ResMut<AnimationStore>) {
    if !store.has_dirty() {
        return;
    }
    let prepared = store.prepare_all();
    debug!("prepare_animations: recomputed {} animations", prepared);
}
