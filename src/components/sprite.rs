use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single frame of a sprite-sheet animation.
///
/// Identified by a texture key, its size in pixels and an offset selecting
/// the frame's region inside the sheet. The origin is the pivot point (in
/// pixels) relative to the region's top-left, used by the renderer for
/// placement, rotation and scaling.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default)]
    pub origin: Vec2,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
            origin: Vec2::ZERO,
            flip_h: false,
            flip_v: false,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Slice `count` equally sized frames out of a sheet laid out in rows of
    /// `columns` cells, left to right then top to bottom.
    ///
    /// A `columns` of zero is treated as a single row.
    pub fn from_grid(
        tex_key: &str,
        width: f32,
        height: f32,
        columns: usize,
        count: usize,
    ) -> Vec<Sprite> {
        let columns = if columns == 0 { count.max(1) } else { columns };
        (0..count)
            .map(|i| {
                let col = (i % columns) as f32;
                let row = (i / columns) as f32;
                Sprite::new(tex_key, width, height).with_offset(Vec2::new(col * width, row * height))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let s = Sprite::new("hero", 16.0, 24.0);
        assert_eq!(s.tex_key, "hero");
        assert_eq!(s.width, 16.0);
        assert_eq!(s.height, 24.0);
        assert_eq!(s.offset, Vec2::ZERO);
        assert_eq!(s.origin, Vec2::ZERO);
        assert!(!s.flip_h);
        assert!(!s.flip_v);
    }

    #[test]
    fn test_with_origin_and_offset() {
        let s = Sprite::new("hero", 16.0, 16.0)
            .with_offset(Vec2::new(32.0, 0.0))
            .with_origin(Vec2::new(8.0, 8.0));
        assert_eq!(s.offset, Vec2::new(32.0, 0.0));
        assert_eq!(s.origin, Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_from_grid_wraps_rows() {
        let frames = Sprite::from_grid("sheet", 10.0, 20.0, 3, 5);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].offset, Vec2::new(0.0, 0.0));
        assert_eq!(frames[2].offset, Vec2::new(20.0, 0.0));
        assert_eq!(frames[3].offset, Vec2::new(0.0, 20.0));
        assert_eq!(frames[4].offset, Vec2::new(10.0, 20.0));
        assert!(frames.iter().all(|f| f.tex_key == "sheet"));
    }

    #[test]
    fn test_from_grid_zero_columns_is_single_row() {
        let frames = Sprite::from_grid("sheet", 8.0, 8.0, 0, 4);
        assert_eq!(frames[3].offset, Vec2::new(24.0, 0.0));
    }

    #[test]
    fn test_from_grid_empty() {
        assert!(Sprite::from_grid("sheet", 8.0, 8.0, 4, 0).is_empty());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let s: Sprite =
            serde_json::from_str(r#"{"tex_key":"a","width":4,"height":5,"offset":[1,2]}"#)
                .unwrap();
        assert_eq!(s.offset, Vec2::new(1.0, 2.0));
        assert_eq!(s.origin, Vec2::ZERO);
        assert!(!s.flip_v);
    }
}
