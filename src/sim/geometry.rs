//! Circle-vs-rectangle collision helpers and scalar utilities
//!
//! Pure functions only: no state, no randomness.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// A circle in arena space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Rectangle side a circle struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Whether the bounce flips the horizontal velocity component
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Side resolution with the overlap along that side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideHit {
    pub side: Side,
    pub overlap: f32,
}

/// True iff the circle strictly overlaps the rectangle.
///
/// The rectangle point nearest the circle center is found by clamping the
/// center into the rectangle bounds. Touching (distance == radius) is not a hit.
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = Vec2::new(
        clamp(circle.center.x, rect.x, rect.right()),
        clamp(circle.center.y, rect.y, rect.bottom()),
    );
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// Pick the side with the smallest overlap.
///
/// Overlaps are measured along each axis between the circle's bounding box
/// and the rectangle. Ties resolve in the order left, right, top, bottom.
pub fn resolve_side(circle: &Circle, rect: &Rect) -> SideHit {
    let ball_left = circle.center.x - circle.radius;
    let ball_right = circle.center.x + circle.radius;
    let ball_top = circle.center.y - circle.radius;
    let ball_bottom = circle.center.y + circle.radius;

    let candidates = [
        (Side::Left, ball_right - rect.x),
        (Side::Right, rect.right() - ball_left),
        (Side::Top, ball_bottom - rect.y),
        (Side::Bottom, rect.bottom() - ball_top),
    ];

    let (side, overlap) = candidates
        .into_iter()
        .fold(candidates[0], |best, candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        });

    SideHit { side, overlap }
}

/// Linear interpolation: `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `min(max(v, lo), hi)`; unlike `f32::clamp` this never panics when lo > hi
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Vec2::new(x, y), r)
    }

    #[test]
    fn test_overlap_inside_and_outside() {
        let rect = Rect::new(100.0, 60.0, 75.0, 20.0);
        assert!(circle_rect_overlap(&circle(120.0, 70.0, 5.0), &rect));
        assert!(circle_rect_overlap(&circle(100.0, 81.0, 15.0), &rect));
        assert!(!circle_rect_overlap(&circle(300.0, 300.0, 15.0), &rect));
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let rect = Rect::new(100.0, 60.0, 75.0, 20.0);
        // Exactly radius away from the bottom edge
        assert!(!circle_rect_overlap(&circle(120.0, 95.0, 15.0), &rect));
        assert!(circle_rect_overlap(&circle(120.0, 94.9, 15.0), &rect));
    }

    #[test]
    fn test_resolve_side_from_below() {
        let rect = Rect::new(100.0, 60.0, 75.0, 20.0);
        let hit = resolve_side(&circle(100.0, 81.0, 15.0), &rect);
        assert_eq!(hit.side, Side::Bottom);
        assert!((hit.overlap - 14.0).abs() < 1e-5);
    }

    #[test]
    fn test_resolve_side_each_direction() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(resolve_side(&circle(-5.0, 50.0, 10.0), &rect).side, Side::Left);
        assert_eq!(resolve_side(&circle(105.0, 50.0, 10.0), &rect).side, Side::Right);
        assert_eq!(resolve_side(&circle(50.0, -5.0, 10.0), &rect).side, Side::Top);
        assert_eq!(resolve_side(&circle(50.0, 105.0, 10.0), &rect).side, Side::Bottom);
    }

    #[test]
    fn test_corner_ties_follow_priority() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        // Top-left corner: left and top tie
        assert_eq!(resolve_side(&circle(0.0, 0.0, 10.0), &rect).side, Side::Left);
        // Bottom-right corner: right and bottom tie
        assert_eq!(resolve_side(&circle(100.0, 50.0, 10.0), &rect).side, Side::Right);
        // Bottom-left corner: left and bottom tie
        assert_eq!(resolve_side(&circle(0.0, 50.0, 10.0), &rect).side, Side::Left);
        // Top-right corner: right and top tie
        assert_eq!(resolve_side(&circle(100.0, 0.0, 10.0), &rect).side, Side::Right);
    }

    #[test]
    fn test_lerp_and_clamp() {
        assert_eq!(lerp(0.0, 10.0, 0.3), 3.0);
        assert_eq!(lerp(5.0, 5.0, 0.7), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 700.0), 0.0);
        assert_eq!(clamp(900.0, 0.0, 700.0), 700.0);
        assert_eq!(clamp(350.0, 0.0, 700.0), 350.0);
    }
}
