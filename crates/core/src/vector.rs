//! Three-component vector type and the free-function algebra built on it.
//!
//! The free functions take references and always return a new value, so a
//! caller's vectors are never modified behind its back.

use std::ops::{Add, Mul, Neg, Sub};

/// A point, a free direction, or a unit direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// East.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// North.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Up.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        add(&self, &rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        sub(&self, &rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        negate(&self)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        scale(rhs, &self)
    }
}

/// Dot product of two vectors.
#[inline]
pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Vector addition.
#[inline]
pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Sum any number of vectors. An empty slice sums to the zero vector.
pub fn add_all(vectors: &[Vector3]) -> Vector3 {
    vectors.iter().fold(Vector3::ZERO, |acc, v| add(&acc, v))
}

/// Vector subtraction `a - b`.
#[inline]
pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Point the vector the opposite way.
#[inline]
pub fn negate(v: &Vector3) -> Vector3 {
    Vector3::new(-v.x, -v.y, -v.z)
}

/// Scale a vector by a scalar. The scalar comes first.
#[inline]
pub fn scale(s: f64, v: &Vector3) -> Vector3 {
    Vector3::new(s * v.x, s * v.y, s * v.z)
}

/// Euclidean norm of a vector.
#[inline]
pub fn norm(v: &Vector3) -> f64 {
    dot(v, v).sqrt()
}

/// True unless every component is exactly zero.
#[inline]
pub fn has_magnitude(v: &Vector3) -> bool {
    v.x != 0.0 || v.y != 0.0 || v.z != 0.0
}

/// Scale a vector to unit length.
///
/// The zero vector has no direction and is returned unchanged instead of
/// producing NaN components.
pub fn unitize(v: &Vector3) -> Vector3 {
    if has_magnitude(v) {
        scale(1.0 / norm(v), v)
    } else {
        Vector3::ZERO
    }
}

/// Alias of [`unitize`] for callers used to the conventional name.
#[inline]
pub fn normalize(v: &Vector3) -> Vector3 {
    unitize(v)
}

/// Exact orthogonality test: the dot product must be exactly zero.
///
/// Rounding in almost any computed vector defeats this check; prefer
/// [`is_orthogonal_within`] for derived data.
#[inline]
pub fn is_orthogonal(a: &Vector3, b: &Vector3) -> bool {
    dot(a, b) == 0.0
}

/// Orthogonality test allowing `|a · b| <= tolerance`.
#[inline]
pub fn is_orthogonal_within(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    dot(a, b).abs() <= tolerance
}

/// Exact test for `b == a` or `b == -a`.
///
/// Only catches identical or exactly opposite vectors (not scaled copies), which
/// is the case that matters before taking a cross product of two unit vectors.
pub fn is_colinear(a: &Vector3, b: &Vector3) -> bool {
    if a == b {
        return true;
    }
    let flipped = negate(b);
    *a == flipped
}

/// Component-wise tolerant version of [`is_colinear`].
pub fn is_colinear_within(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    let close = |u: &Vector3, v: &Vector3| {
        (u.x - v.x).abs() <= tolerance
            && (u.y - v.y).abs() <= tolerance
            && (u.z - v.z).abs() <= tolerance
    };
    close(a, b) || close(a, &negate(b))
}
