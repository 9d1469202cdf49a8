//! Animation data types.
//!
//! Submodules overview:
//! - [`animation`] – sprite-sheet animation descriptor, its builder and derived timing
//! - [`sprite`] – a single frame: texture region and pivot

pub mod animation;
pub mod sprite;
