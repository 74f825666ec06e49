//! Rotation about an arbitrary axis through the origin.
//!
//! The rotation is counterclockwise when looking from the tip of the axis
//! back toward its base: turning east about up by a quarter turn gives north.

use hyper_core::matrix::Matrix3;
use hyper_core::vector::{self, Vector3};

/// Rotate `rotatee` about the unit axis `rotater` by `angle` radians.
///
/// `rotater` must be unit length; a longer or shorter axis produces a wrong
/// result without any signal. `rotatee` may have any length, which is
/// preserved.
pub fn rotate_vector(rotatee: &Vector3, rotater: &Vector3, angle: f64) -> Vector3 {
    #[cfg(feature = "strict")]
    debug_assert!(
        hyper_core::validate::check_unit(rotater, hyper_core::constants::STRICT_TOLERANCE).is_ok(),
        "rotation axis must be unit length: {rotater:?}"
    );

    let (s, c) = angle.sin_cos();
    let along_axis = vector::scale(vector::dot(rotatee, rotater), rotater);
    // Pythagorean split: what is left after removing the axial part is perpendicular to the axis.
    let perp = vector::sub(rotatee, &along_axis);
    let perp_perp = vector::cross(rotater, &perp);
    vector::add_all(&[
        along_axis,
        vector::scale(c, &perp),
        vector::scale(s, &perp_perp),
    ])
}

/// Rotate every column of `rotatee` about `rotater` by `angle` radians.
///
/// Columns are rotated independently; no re-orthonormalisation is applied.
pub fn rotate_matrix(rotatee: &Matrix3, rotater: &Vector3, angle: f64) -> Matrix3 {
    #[cfg(feature = "strict")]
    {
        use hyper_core::constants::STRICT_TOLERANCE;
        debug_assert!(
            hyper_core::validate::check_rotation(rotatee, STRICT_TOLERANCE, STRICT_TOLERANCE)
                .is_ok(),
            "rotatee must be a rotation matrix: {rotatee:?}"
        );
    }

    let [right, forward, up] = rotatee.columns();
    Matrix3::from_columns(
        rotate_vector(&right, rotater, angle),
        rotate_vector(&forward, rotater, angle),
        rotate_vector(&up, rotater, angle),
    )
}
