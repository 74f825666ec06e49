//! Heading/pitch/roll conversions for east-north-up rotation matrices.
//!
//! Conventions, all angles in radians:
//! - heading: measured in the horizontal plane from north (+y) toward east (+x),
//!   i.e. `atan2(x, y)`.
//! - pitch: elevation above the horizontal plane, in `[-π/2, π/2]`.
//! - roll: rotation about the forward axis.
//!
//! Matrices are read as (right, forward, up) columns; see
//! [`hyper_core::matrix`] for the layout.

use hyper_core::units::{deg_to_rad, rad_to_deg};

pub mod hp;
pub mod hpr;
pub mod view;

pub use hp::{hp_to_vector, hp_to_vector_in_frame, vector_to_hp};
pub use hpr::{hpr_to_matrix, matrix_to_hpr};
pub use view::{hpr_in_frame, orientation_from_hpr_in_frame};

/// Orientation as heading, pitch and roll (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hpr {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Hpr {
    #[inline]
    pub const fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    pub fn from_degrees(heading: f64, pitch: f64, roll: f64) -> Self {
        Self::new(deg_to_rad(heading), deg_to_rad(pitch), deg_to_rad(roll))
    }

    /// `(heading, pitch, roll)` in degrees.
    pub fn to_degrees(self) -> (f64, f64, f64) {
        (
            rad_to_deg(self.heading),
            rad_to_deg(self.pitch),
            rad_to_deg(self.roll),
        )
    }

    /// Heading/pitch part, dropping roll.
    pub fn heading_pitch(self) -> HeadingPitch {
        HeadingPitch::new(self.heading, self.pitch)
    }
}

/// Direction as heading (azimuth) and pitch (elevation), radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingPitch {
    pub heading: f64,
    pub pitch: f64,
}

impl HeadingPitch {
    #[inline]
    pub const fn new(heading: f64, pitch: f64) -> Self {
        Self { heading, pitch }
    }

    pub fn from_degrees(heading: f64, pitch: f64) -> Self {
        Self::new(deg_to_rad(heading), deg_to_rad(pitch))
    }

    /// `(heading, pitch)` in degrees.
    pub fn to_degrees(self) -> (f64, f64) {
        (rad_to_deg(self.heading), rad_to_deg(self.pitch))
    }
}
