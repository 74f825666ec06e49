//! Core value types and vector algebra shared across the hyper_math workspace.
//!
//! Vectors carry named `x`/`y`/`z` components and matrices are stored
//! column-major, so data produced here can be handed to any consumer that
//! expects the east-north-up column layout described in [`matrix`].

pub mod matrix;
pub mod planar;
pub mod validate;
pub mod vector;

pub use matrix::{Matrix3, TranRot};
pub use planar::Vector2;
pub use vector::Vector3;

/// Numeric constants shared by the rotation and orientation crates.
pub mod constants {
    /// Components below this magnitude are treated as zero when detecting a
    /// vertical (gimbal-locked) orientation.
    pub const SINGULAR_EPSILON: f64 = 1.0e-7;

    /// Tolerance used by the `strict` feature's debug assertions.
    pub const STRICT_TOLERANCE: f64 = 1.0e-9;

    /// Quarter turn in radians; offset between tilt (from nadir) and pitch.
    pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
}

/// Angle conversion helpers for front-ends that speak degrees.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Wrap an angle into (-π, π].
    pub fn wrap_pi(angle: f64) -> f64 {
        use std::f64::consts::{PI, TAU};
        let wrapped = angle.rem_euclid(TAU);
        if wrapped > PI { wrapped - TAU } else { wrapped }
    }
}
