//! Orientations expressed relative to a local frame.
//!
//! A local frame is usually the east-north-up basis at some point on a body,
//! written in body-fixed coordinates. These helpers place an HPR orientation
//! in that frame and read one back out, skipping any quaternion detour.

use hyper_core::matrix::Matrix3;
use hyper_frames::{matrix_from_frame, matrix_to_frame};

use crate::Hpr;
use crate::hpr::{hpr_to_matrix, matrix_to_hpr};

/// Parent-basis rotation matrix for `hpr` measured in `frame`.
pub fn orientation_from_hpr_in_frame(hpr: &Hpr, frame: &Matrix3) -> Matrix3 {
    let local = hpr_to_matrix(hpr.heading, hpr.pitch, hpr.roll);
    matrix_from_frame(&local, frame)
}

/// Heading, pitch and roll of the parent-basis orientation `m` as measured in `frame`.
pub fn hpr_in_frame(m: &Matrix3, frame: &Matrix3) -> Hpr {
    matrix_to_hpr(&matrix_to_frame(m, frame))
}
