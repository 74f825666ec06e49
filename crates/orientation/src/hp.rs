//! Direction vector <-> heading/pitch (azimuth/elevation).

use hyper_core::constants::{HALF_PI, SINGULAR_EPSILON};
use hyper_core::matrix::Matrix3;
use hyper_core::vector::Vector3;
use hyper_frames::{vector_from_frame, vector_to_frame};
use tracing::trace;

use crate::HeadingPitch;

/// Heading and pitch of the unit direction `transformee` as seen from the
/// frame `transformer`.
///
/// Typical use: azimuth/elevation of the sun or moon for an observer whose
/// local east-north-up basis is `transformer`. A vertical direction has no
/// heading; it is reported as 0 with pitch ±π/2 (a zero vector counts as
/// straight down).
pub fn vector_to_hp(transformee: &Vector3, transformer: &Matrix3) -> HeadingPitch {
    let local = vector_to_frame(transformee, transformer);

    if local.x.abs() < SINGULAR_EPSILON && local.y.abs() < SINGULAR_EPSILON {
        trace!(z = local.z, "vertical direction; heading reported as zero");
        let pitch = if local.z > 0.0 { HALF_PI } else { -HALF_PI };
        return HeadingPitch::new(0.0, pitch);
    }

    HeadingPitch::new(
        local.x.atan2(local.y),
        (-local.z).clamp(-1.0, 1.0).acos() - HALF_PI,
    )
}

/// Unit direction with the given heading and pitch, in the frame they were
/// measured in.
///
/// Inverts the angle derivation of [`vector_to_hp`]. At pitch ±π/2 the
/// heading has no effect and the result is straight up or down.
pub fn hp_to_vector(heading: f64, pitch: f64) -> Vector3 {
    let (sh, ch) = heading.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vector3::new(sh * cp, ch * cp, sp)
}

/// Full inverse of [`vector_to_hp`]: the unit direction for `hp` expressed
/// back in the parent basis of `transformer`.
pub fn hp_to_vector_in_frame(hp: &HeadingPitch, transformer: &Matrix3) -> Vector3 {
    vector_from_frame(&hp_to_vector(hp.heading, hp.pitch), transformer)
}

impl HeadingPitch {
    /// Same as [`hp_to_vector`].
    #[inline]
    pub fn to_vector(self) -> Vector3 {
        hp_to_vector(self.heading, self.pitch)
    }
}
