//! Vector rotation, frame changes and heading/pitch/roll conversions.
//!
//! Everything here is a pure function over small `Copy` values. The member
//! crates are re-exported so callers can depend on this crate alone.

pub use hyper_config as config;
pub use hyper_core::{Matrix3, TranRot, Vector2, Vector3};
pub use hyper_core::{constants, matrix, planar, units, validate, vector};
pub use hyper_frames as frames;
pub use hyper_orientation as orientation;
pub use hyper_rotation as rotation;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
