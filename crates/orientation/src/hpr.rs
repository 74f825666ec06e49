//! Rotation matrix <-> heading/pitch/roll.

use hyper_core::constants::{HALF_PI, SINGULAR_EPSILON};
use hyper_core::matrix::{self, Matrix3};
use hyper_core::vector::Vector3;
use tracing::trace;

use crate::Hpr;

/// Recover heading, pitch and roll from a (right, forward, up) rotation matrix.
///
/// When the forward axis is vertical (both `right.z` and `up.z` within
/// [`SINGULAR_EPSILON`] of zero) heading and roll collapse into one degree of
/// freedom. Roll is then reported as 0, pitch as exactly ±π/2, and the
/// heading is read from the up axis.
pub fn matrix_to_hpr(m: &Matrix3) -> Hpr {
    #[cfg(feature = "strict")]
    {
        use hyper_core::constants::STRICT_TOLERANCE;
        debug_assert!(
            hyper_core::validate::check_rotation(m, STRICT_TOLERANCE, STRICT_TOLERANCE).is_ok(),
            "matrix_to_hpr expects a rotation matrix: {m:?}"
        );
    }

    let [right, direction, up] = m.columns();

    if right.z.abs() < SINGULAR_EPSILON && up.z.abs() < SINGULAR_EPSILON {
        trace!(direction_z = direction.z, "vertical forward axis; roll forced to zero");
        return if direction.z > 0.0 {
            Hpr::new((-up.x).atan2(-up.y), HALF_PI, 0.0)
        } else {
            Hpr::new(up.x.atan2(up.y), -HALF_PI, 0.0)
        };
    }

    Hpr::new(
        direction.x.atan2(direction.y),
        // acos gives tilt from nadir; subtracting a quarter turn turns it into pitch.
        (-direction.z).clamp(-1.0, 1.0).acos() - HALF_PI,
        (-right.z).atan2(up.z),
    )
}

/// Build the (right, forward, up) rotation matrix for heading, pitch and roll.
///
/// Inverse of [`matrix_to_hpr`] away from the vertical.
pub fn hpr_to_matrix(heading: f64, pitch: f64, roll: f64) -> Matrix3 {
    // Internal derivation frame: tilt is measured from nadir and roll turns the other way.
    let tilt = pitch + HALF_PI;
    let roll = -roll;

    let (sh, ch) = heading.sin_cos();
    let (st, ct) = tilt.sin_cos();
    let (sr, cr) = roll.sin_cos();

    let direction = Vector3::new(sh * st, ch * st, -ct);
    let right = Vector3::new(ch * cr + sh * ct * sr, -sh * cr + ch * ct * sr, st * sr);
    let up = Vector3::new(sh * ct * cr - ch * sr, ch * ct * cr + sh * sr, st * cr);

    matrix::vectors_to_matrix(&right, &direction, &up)
}

impl Hpr {
    /// Same as [`hpr_to_matrix`].
    #[inline]
    pub fn to_matrix(self) -> Matrix3 {
        hpr_to_matrix(self.heading, self.pitch, self.roll)
    }

    /// Same as [`matrix_to_hpr`].
    #[inline]
    pub fn from_matrix(m: &Matrix3) -> Self {
        matrix_to_hpr(m)
    }
}
