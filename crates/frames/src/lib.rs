//! Re-express vectors and matrices in, or out of, an orthonormal frame.
//!
//! The frame (the "transformer") and the input (the "transformee") must be
//! written in terms of the same parent basis. `*_to_frame` gives the input in
//! terms of the frame's columns; `*_from_frame` undoes that and returns to the
//! parent basis.
//!
//! The products here are spelled out as column dot products because the
//! transpose-multiply they implement is easy to get backwards with a
//! row-major helper.

use hyper_core::matrix::Matrix3;
use hyper_core::vector::{self, Vector3};

/// Express `transformee` in terms of `transformer`'s columns.
pub fn vector_to_frame(transformee: &Vector3, transformer: &Matrix3) -> Vector3 {
    let [c0, c1, c2] = transformer.columns();
    Vector3::new(
        vector::dot(transformee, &c0),
        vector::dot(transformee, &c1),
        vector::dot(transformee, &c2),
    )
}

/// Rebuild the parent-basis vector from components measured in `transformer`.
///
/// Exact inverse of [`vector_to_frame`] when `transformer` is orthonormal.
pub fn vector_from_frame(transformee: &Vector3, transformer: &Matrix3) -> Vector3 {
    let [c0, c1, c2] = transformer.columns();
    vector::add_all(&[
        vector::scale(transformee.x, &c0),
        vector::scale(transformee.y, &c1),
        vector::scale(transformee.z, &c2),
    ])
}

/// [`vector_to_frame`] applied to all three columns of `transformee` at once.
pub fn matrix_to_frame(transformee: &Matrix3, transformer: &Matrix3) -> Matrix3 {
    let a = transformee.as_slice();
    let b = transformer.as_slice();
    let mut out = [0.0; 9];
    for (i, value) in out.iter_mut().enumerate() {
        // i walks the output column-major; j picks the transformee column, k the transformer column.
        let j = 3 * (i / 3);
        let k = 3 * (i % 3);
        *value = a[j] * b[k] + a[j + 1] * b[k + 1] + a[j + 2] * b[k + 2];
    }
    Matrix3::from_column_major(out)
}

/// [`vector_from_frame`] applied to all three columns of `transformee`.
///
/// Exact inverse of [`matrix_to_frame`] when `transformer` is orthonormal.
pub fn matrix_from_frame(transformee: &Matrix3, transformer: &Matrix3) -> Matrix3 {
    let [c0, c1, c2] = transformee.columns();
    Matrix3::from_columns(
        vector_from_frame(&c0, transformer),
        vector_from_frame(&c1, transformer),
        vector_from_frame(&c2, transformer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batched_product_matches_per_column_projection() {
        let frame = Matrix3::from_columns(
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let m = Matrix3::from_columns(
            Vector3::new(0.6, 0.8, 0.0),
            Vector3::new(-0.8, 0.6, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let batched = matrix_to_frame(&m, &frame);
        for j in 0..3 {
            assert_eq!(batched.column(j), vector_to_frame(&m.column(j), &frame));
        }
    }
}
