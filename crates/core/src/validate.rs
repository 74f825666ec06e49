//! Opt-in input checks for the unit-length and orthonormality contracts.
//!
//! None of the rotation or conversion routines call these on their own; a
//! caller that wants a signalled failure instead of silently wrong numbers
//! runs the relevant check first.

use thiserror::Error;

use crate::matrix::Matrix3;
use crate::vector::{self, Vector3};

/// Contract violations detected by the checks in this module.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("vector has zero magnitude")]
    ZeroMagnitude,
    #[error("vector is not unit length (length = {length})")]
    NotUnit { length: f64 },
    #[error("column {column} is not unit length (length = {length})")]
    NotUnitColumn { column: usize, length: f64 },
    #[error("columns {first} and {second} are not orthogonal (dot = {dot})")]
    NotOrthogonal {
        first: usize,
        second: usize,
        dot: f64,
    },
    #[error("columns form a left-handed basis")]
    LeftHanded,
}

/// Reject vectors whose components are all exactly zero.
pub fn check_has_magnitude(v: &Vector3) -> Result<(), ValidationError> {
    if vector::has_magnitude(v) {
        Ok(())
    } else {
        Err(ValidationError::ZeroMagnitude)
    }
}

/// Require `|‖v‖ - 1| <= tolerance`.
pub fn check_unit(v: &Vector3, tolerance: f64) -> Result<(), ValidationError> {
    let length = vector::norm(v);
    if (length - 1.0).abs() <= tolerance {
        Ok(())
    } else {
        Err(ValidationError::NotUnit { length })
    }
}

/// Require unit-length, mutually orthogonal, right-handed columns.
///
/// `unit_tolerance` bounds each column's length error and
/// `orthogonality_tolerance` bounds each pairwise `|dot|`.
pub fn check_rotation(
    m: &Matrix3,
    unit_tolerance: f64,
    orthogonality_tolerance: f64,
) -> Result<(), ValidationError> {
    let columns = m.columns();
    for (column, axis) in columns.iter().enumerate() {
        let length = vector::norm(axis);
        if (length - 1.0).abs() > unit_tolerance {
            return Err(ValidationError::NotUnitColumn { column, length });
        }
    }
    for (first, second) in [(0, 1), (0, 2), (1, 2)] {
        let dot = vector::dot(&columns[first], &columns[second]);
        if dot.abs() > orthogonality_tolerance {
            return Err(ValidationError::NotOrthogonal { first, second, dot });
        }
    }
    if m.determinant() < 0.0 {
        return Err(ValidationError::LeftHanded);
    }
    Ok(())
}
