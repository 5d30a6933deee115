//! Minimal 2D geometry: points, rectangles, rotated sprite bounds.
//!
//! Screen coordinates: x grows to the right, y grows downward, rotation is
//! in degrees clockwise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (left/top corner plus size).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// True when the two rectangles share an area of positive size.
    /// Rectangles that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        left < right && top < bottom
    }

    /// Bounds of a `size` sprite placed at `position` and rotated by
    /// `degrees` around its top-left corner.
    pub fn rotated_bounds(position: Vec2, size: Vec2, degrees: f32) -> Self {
        if degrees == 0.0 {
            return Self::new(position.x, position.y, size.x, size.y);
        }

        let (sin, cos) = degrees.to_radians().sin_cos();
        let corners = [
            (0.0, 0.0),
            (size.x, 0.0),
            (0.0, size.y),
            (size.x, size.y),
        ];

        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (x, y) in corners {
            let rx = x * cos - y * sin;
            let ry = x * sin + y * cos;
            min.x = min.x.min(rx);
            min.y = min.y.min(ry);
            max.x = max.x.max(rx);
            max.y = max.y.max(ry);
        }

        Self::new(
            position.x + min.x,
            position.y + min.y,
            max.x - min.x,
            max.y - min.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
    }

    #[test]
    fn test_unrotated_bounds_match_sprite() {
        let bounds = Rect::rotated_bounds(Vec2::new(3.0, 4.0), Vec2::new(34.0, 24.0), 0.0);
        assert_eq!(bounds, Rect::new(3.0, 4.0, 34.0, 24.0));
    }

    #[test]
    fn test_quarter_turn_swaps_extent() {
        // 90° clockwise about the top-left corner swings the sprite to the left.
        let bounds = Rect::rotated_bounds(Vec2::new(100.0, 100.0), Vec2::new(34.0, 24.0), 90.0);
        assert!((bounds.width - 24.0).abs() < 1e-3);
        assert!((bounds.height - 34.0).abs() < 1e-3);
        assert!((bounds.left - 76.0).abs() < 1e-3);
        assert!((bounds.top - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_grows_bounds() {
        let size = Vec2::new(34.0, 24.0);
        let flat = Rect::rotated_bounds(Vec2::default(), size, 0.0);
        let tilted = Rect::rotated_bounds(Vec2::default(), size, 40.0);
        assert!(tilted.width * tilted.height > flat.width * flat.height);
    }
}
