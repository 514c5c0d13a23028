//! Packed sprite records for the host renderer
//!
//! The host reads sprite transforms once per frame; handing them over as a
//! flat `f32` buffer avoids one JS object per sprite.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Sprite role, stored as an `f32` tag inside [`SpriteInstance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Treasure,
    Enemy,
}

impl SpriteKind {
    pub const fn tag(self) -> f32 {
        match self {
            SpriteKind::Player => 0.0,
            SpriteKind::Treasure => 1.0,
            SpriteKind::Enemy => 2.0,
        }
    }

    pub fn from_tag(tag: f32) -> Option<Self> {
        match tag as i32 {
            0 => Some(SpriteKind::Player),
            1 => Some(SpriteKind::Treasure),
            2 => Some(SpriteKind::Enemy),
            _ => None,
        }
    }
}

/// One sprite: kind tag, center position and displayed size
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteInstance {
    /// Number of floats per record in a flattened buffer
    pub const STRIDE: usize = std::mem::size_of::<SpriteInstance>() / std::mem::size_of::<f32>();

    pub fn new(kind: SpriteKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind: kind.tag(),
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
        }
    }

    pub fn kind(&self) -> Option<SpriteKind> {
        SpriteKind::from_tag(self.kind)
    }
}

/// View a slice of records as a flat float buffer (no copy)
pub fn as_floats(instances: &[SpriteInstance]) -> &[f32] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride() {
        assert_eq!(SpriteInstance::STRIDE, 5);
    }

    #[test]
    fn test_flat_layout() {
        let sprites = [
            SpriteInstance::new(SpriteKind::Player, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)),
            SpriteInstance::new(SpriteKind::Enemy, Vec2::new(5.0, 6.0), Vec2::new(7.0, 8.0)),
        ];
        assert_eq!(
            as_floats(&sprites),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 2.0, 5.0, 6.0, 7.0, 8.0]
        );
    }

    #[test]
    fn test_kind_tags() {
        for kind in [SpriteKind::Player, SpriteKind::Treasure, SpriteKind::Enemy] {
            assert_eq!(SpriteKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(SpriteKind::from_tag(7.0), None);
    }
}
