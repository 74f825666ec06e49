use std::f64::consts::{FRAC_PI_2, PI};

use hyper_math::matrix::Matrix3;
use hyper_math::orientation::{
    HeadingPitch, Hpr, hp_to_vector, hp_to_vector_in_frame, hpr_in_frame, hpr_to_matrix,
    matrix_to_hpr, orientation_from_hpr_in_frame, vector_to_hp,
};
use hyper_math::units::wrap_pi;
use hyper_math::validate;
use hyper_math::vector::{self, Vector3};

const TOL: f64 = 1e-9;

fn assert_angle(actual: f64, expected: f64, context: &str) {
    let diff = wrap_pi(actual - expected).abs();
    assert!(
        diff < TOL,
        "{context}: expected {expected}, got {actual} (diff {diff})"
    );
}

#[test]
fn level_north_facing_frame_has_zero_angles() {
    let m = Matrix3::from_columns(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);
    let hpr = matrix_to_hpr(&m);
    assert_eq!(hpr.heading, 0.0);
    assert!(hpr.pitch.abs() < 1e-15, "pitch = {}", hpr.pitch);
    assert_eq!(hpr.roll, 0.0);
}

#[test]
fn zero_angles_build_the_identity() {
    let m = hpr_to_matrix(0.0, 0.0, 0.0);
    for i in 0..9 {
        assert!((m[i] - Matrix3::IDENTITY[i]).abs() < 1e-15, "element {i}");
    }
}

#[test]
fn built_matrices_are_rotations() {
    for (h, p, r) in [(0.3, 0.2, -0.1), (-2.5, -1.2, 3.0), (PI, 0.0, FRAC_PI_2)] {
        let m = hpr_to_matrix(h, p, r);
        validate::check_rotation(&m, 1e-12, 1e-12)
            .unwrap_or_else(|e| panic!("hpr ({h}, {p}, {r}): {e}"));
    }
}

#[test]
fn hpr_round_trip_away_from_the_poles() {
    let pitches = [-89.0_f64, -60.0, -30.0, -1.0, 0.0, 1.0, 30.0, 60.0, 89.0];
    for h_step in -5..=6 {
        let heading = h_step as f64 * (PI / 6.0);
        for pitch_deg in pitches {
            let pitch = pitch_deg.to_radians();
            for r_step in -3..=4 {
                let roll = r_step as f64 * (PI / 4.0);
                let back = matrix_to_hpr(&hpr_to_matrix(heading, pitch, roll));
                let ctx = format!("({heading}, {pitch}, {roll})");
                assert_angle(back.heading, heading, &format!("heading {ctx}"));
                assert_angle(back.pitch, pitch, &format!("pitch {ctx}"));
                assert_angle(back.roll, roll, &format!("roll {ctx}"));
            }
        }
    }
}

#[test]
fn heading_is_clockwise_from_north() {
    let east = matrix_to_hpr(&hpr_to_matrix(FRAC_PI_2, 0.0, 0.0));
    assert_angle(east.heading, FRAC_PI_2, "east heading");
    let facing_east = hpr_to_matrix(FRAC_PI_2, 0.0, 0.0).forward();
    assert!((facing_east.x - 1.0).abs() < 1e-12, "forward = {facing_east:?}");
}

#[test]
fn positive_pitch_raises_the_nose() {
    let forward = hpr_to_matrix(0.0, 0.5, 0.0).forward();
    assert!(forward.z > 0.0);
    assert!((forward.z - 0.5_f64.sin()).abs() < 1e-12);
}

#[test]
fn straight_up_locks_roll_to_zero() {
    for roll in [-2.0, -0.5, 0.0, 0.7, 3.0] {
        let hpr = matrix_to_hpr(&hpr_to_matrix(0.4, FRAC_PI_2, roll));
        assert_eq!(hpr.pitch, FRAC_PI_2, "roll {roll}");
        assert_eq!(hpr.roll, 0.0, "roll {roll}");
        // heading and roll merge at the pole
        assert_angle(hpr.heading, 0.4 - roll, &format!("merged heading, roll {roll}"));
    }
}

#[test]
fn straight_down_locks_roll_to_zero() {
    let hpr = matrix_to_hpr(&hpr_to_matrix(1.0, -FRAC_PI_2, 0.3));
    assert_eq!(hpr.pitch, -FRAC_PI_2);
    assert_eq!(hpr.roll, 0.0);
    assert_angle(hpr.heading, 1.3, "merged heading");
}

#[test]
fn hpr_struct_helpers_match_free_functions() {
    let hpr = Hpr::from_degrees(45.0, 10.0, -20.0);
    assert_eq!(hpr.to_matrix(), hpr_to_matrix(hpr.heading, hpr.pitch, hpr.roll));
    let (h, p, r) = Hpr::from_matrix(&hpr.to_matrix()).to_degrees();
    assert!((h - 45.0).abs() < 1e-9 && (p - 10.0).abs() < 1e-9 && (r + 20.0).abs() < 1e-9);
}

#[test]
fn zero_vector_reads_as_straight_down() {
    let hp = vector_to_hp(&Vector3::ZERO, &Matrix3::IDENTITY);
    assert_eq!(hp, HeadingPitch::new(0.0, -FRAC_PI_2));
}

#[test]
fn pitch_survives_rounding_past_vertical() {
    let overshoot = -(1.0 + 1e-15);
    assert!(-overshoot > 1.0, "overshoot must exceed the acos domain");

    let hp = vector_to_hp(&Vector3::new(1e-3, 0.0, overshoot), &Matrix3::IDENTITY);
    assert!(hp.pitch.is_finite(), "pitch = {}", hp.pitch);
    assert_eq!(hp.pitch, -FRAC_PI_2);
}

#[test]
#[cfg(not(all(feature = "strict", debug_assertions)))]
fn hpr_pitch_survives_rounding_past_vertical() {
    // Off-vertical right axis keeps this out of the gimbal-lock branch.
    let m = Matrix3::from_columns(
        Vector3::new(1.0, 0.0, 1e-3),
        Vector3::new(0.0, 0.0, -(1.0 + 1e-15)),
        Vector3::new(0.0, 1.0, 0.0),
    );
    let hpr = matrix_to_hpr(&m);
    assert!(hpr.pitch.is_finite(), "pitch = {}", hpr.pitch);
    assert_eq!(hpr.pitch, -FRAC_PI_2);
}

#[test]
#[cfg(all(feature = "strict", debug_assertions))]
#[should_panic(expected = "matrix_to_hpr expects a rotation matrix")]
fn strict_rejects_non_orthonormal_matrix() {
    let sheared = Matrix3::from_columns(
        Vector3::UNIT_X,
        vector::unitize(&Vector3::new(0.5, 1.0, 0.0)),
        Vector3::UNIT_Z,
    );
    matrix_to_hpr(&sheared);
}

#[test]
fn zenith_and_nadir_have_zero_heading() {
    let up = vector_to_hp(&Vector3::UNIT_Z, &Matrix3::IDENTITY);
    assert_eq!(up, HeadingPitch::new(0.0, FRAC_PI_2));
    let down = vector_to_hp(&Vector3::new(0.0, 0.0, -1.0), &Matrix3::IDENTITY);
    assert_eq!(down, HeadingPitch::new(0.0, -FRAC_PI_2));
}

#[test]
fn azimuth_elevation_in_enu() {
    let north_east_up = vector::unitize(&Vector3::new(1.0, 1.0, 2.0_f64.sqrt()));
    let hp = vector_to_hp(&north_east_up, &Matrix3::IDENTITY);
    assert_angle(hp.heading, PI / 4.0, "azimuth");
    assert_angle(hp.pitch, PI / 4.0, "elevation");
}

#[test]
fn azimuth_is_relative_to_the_observer_frame() {
    let facing_east = hpr_to_matrix(FRAC_PI_2, 0.0, 0.0);
    let ahead = vector_to_hp(&Vector3::UNIT_X, &facing_east);
    assert_angle(ahead.heading, 0.0, "target ahead");
    let north = vector_to_hp(&Vector3::UNIT_Y, &facing_east);
    assert_angle(north.heading, -FRAC_PI_2, "north is to the left");
    assert_angle(north.pitch, 0.0, "north elevation");
}

#[test]
fn hp_to_vector_inverts_vector_to_hp() {
    for (h, p) in [(0.0, 0.0), (1.2, 0.3), (-2.9, -1.1), (PI, 1.5)] {
        let v = hp_to_vector(h, p);
        assert!((vector::norm(&v) - 1.0).abs() < 1e-12);
        let hp = vector_to_hp(&v, &Matrix3::IDENTITY);
        assert_angle(hp.heading, h, "heading");
        assert_angle(hp.pitch, p, "pitch");
    }
}

#[test]
fn hp_to_vector_at_the_pole_ignores_heading() {
    let v = hp_to_vector(2.0, FRAC_PI_2);
    assert!(v.x.abs() < 1e-15 && v.y.abs() < 1e-15 && (v.z - 1.0).abs() < 1e-15);
    assert_eq!(vector_to_hp(&v, &Matrix3::IDENTITY).heading, 0.0);
}

#[test]
fn hp_round_trip_through_a_tilted_frame() {
    let frame = hpr_to_matrix(-0.7, 0.4, 0.9);
    let hp = HeadingPitch::new(2.2, -0.35);
    let world = hp_to_vector_in_frame(&hp, &frame);
    let back = vector_to_hp(&world, &frame);
    assert_angle(back.heading, hp.heading, "heading");
    assert_angle(back.pitch, hp.pitch, "pitch");
}

#[test]
fn orientation_in_identity_frame_is_plain_hpr() {
    let hpr = Hpr::new(0.5, -0.2, 1.0);
    let m = orientation_from_hpr_in_frame(&hpr, &Matrix3::IDENTITY);
    assert_eq!(m, hpr.to_matrix());
}

#[test]
fn orientation_round_trip_through_a_frame() {
    let frame = hpr_to_matrix(2.0, 0.3, -0.4);
    let hpr = Hpr::new(-1.0, 0.6, 0.25);
    let world = orientation_from_hpr_in_frame(&hpr, &frame);
    let back = hpr_in_frame(&world, &frame);
    assert_angle(back.heading, hpr.heading, "heading");
    assert_angle(back.pitch, hpr.pitch, "pitch");
    assert_angle(back.roll, hpr.roll, "roll");
}
