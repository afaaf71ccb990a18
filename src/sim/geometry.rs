//! Hitbox geometry
//!
//! Sprites carry transparent padding, so collision uses the bounding box shrunk
//! per side by a fraction of its own size before the AABB test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::{Entity, Kind};

/// Per-side shrink, as fractions of width (left/right) and height (top/bottom)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Player sprite margins
    pub const PLAYER: Margins = Margins::new(0.15, 0.40, 0.08, 0.06);
    /// Good block sprite margins
    pub const GOOD: Margins = Margins::new(0.14, 0.14, 0.08, 0.18);
    /// Bad block sprite margins
    pub const BAD: Margins = Margins::new(0.08, 0.08, 0.08, 0.07);

    pub fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Good => Self::GOOD,
            Kind::Bad => Self::BAD,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from a top-left anchor and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink each side by a fraction of `size`
    pub fn shrink(pos: Vec2, size: Vec2, margins: Margins) -> Self {
        Self {
            min: Vec2::new(
                pos.x + size.x * margins.left,
                pos.y + size.y * margins.top,
            ),
            max: Vec2::new(
                pos.x + size.x * (1.0 - margins.right),
                pos.y + size.y * (1.0 - margins.bottom),
            ),
        }
    }

    /// Strict AABB test: touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Margin-adjusted hitbox of an entity, or `None` without position and size
pub fn hitbox(entity: &Entity, margins: Margins) -> Option<Rect> {
    let pos = entity.components.position?;
    let size = entity.components.size?;
    Some(Rect::shrink(pos, size, margins))
}

/// Player hitbox
pub fn player_hitbox(player: &Entity) -> Option<Rect> {
    hitbox(player, Margins::PLAYER)
}

/// Block hitbox using the margins for its tag
pub fn block_hitbox(block: &Entity) -> Option<Rect> {
    hitbox(block, Margins::for_kind(block.kind()?))
}
