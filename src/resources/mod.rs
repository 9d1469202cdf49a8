//! ECS resources made available to systems.
//!
//! Overview
//! - `animationconfig` – default animation settings loaded from an INI file
//! - `animationstore` – animation definitions reused across entities, loadable from JSON
pub mod animationconfig;
pub mod animationstore;
