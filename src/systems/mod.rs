//! ECS systems.
//!
//! Submodules overview
//! - [`animation`] – prepare edited animations before they are consumed

pub mod animation;
