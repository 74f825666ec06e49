//! Planar (x/y only) helpers.

/// A point or direction in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dot product of two planar vectors.
#[inline]
pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Straight-line distance between two planar points.
#[inline]
pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}
