//! Column-major 3x3 rotation matrices and 4x4 rotation+position matrices.
//!
//! A rotation matrix holds three basis vectors as columns:
//!
//! ```text
//! East(x)  North(y)  Up(z)
//! Right    Forward   Up
//! [0]      [3]       [6]     x components
//! [1]      [4]       [7]     y components
//! [2]      [5]       [8]     z components
//! ```
//!
//! The 4x4 form appends a position column and a carry row `w`:
//!
//! ```text
//! Right  Forward  Up    Pos
//! [0]    [4]      [8]   [12]   x
//! [1]    [5]      [9]   [13]   y
//! [2]    [6]      [10]  [14]   z
//! [3]    [7]      [11]  [15]   w   (1 on axis columns, 0 on the position column)
//! ```

use std::ops::Index;

use crate::vector::Vector3;

/// 3x3 matrix stored column-major: element `i` of column `j` is at `3 * j + i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    data: [f64; 9],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    pub const IDENTITY: Self = Self {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Wrap nine values that are already in column-major order.
    #[inline]
    pub const fn from_column_major(data: [f64; 9]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn from_columns(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self {
            data: [
                first.x, first.y, first.z, second.x, second.y, second.z, third.x, third.y,
                third.z,
            ],
        }
    }

    /// Column `index` (0 = right, 1 = forward, 2 = up).
    ///
    /// # Panics
    /// If `index > 2`.
    #[inline]
    pub fn column(&self, index: usize) -> Vector3 {
        assert!(index < 3, "Matrix3 column index {index} out of range");
        let base = 3 * index;
        Vector3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// Copy of this matrix with column `index` replaced.
    ///
    /// # Panics
    /// If `index > 2`.
    pub fn with_column(&self, index: usize, value: Vector3) -> Self {
        assert!(index < 3, "Matrix3 column index {index} out of range");
        let mut data = self.data;
        let base = 3 * index;
        data[base] = value.x;
        data[base + 1] = value.y;
        data[base + 2] = value.z;
        Self { data }
    }

    #[inline]
    pub fn columns(&self) -> [Vector3; 3] {
        [self.column(0), self.column(1), self.column(2)]
    }

    #[inline]
    pub fn right(&self) -> Vector3 {
        self.column(0)
    }

    #[inline]
    pub fn forward(&self) -> Vector3 {
        self.column(1)
    }

    #[inline]
    pub fn up(&self) -> Vector3 {
        self.column(2)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64; 9] {
        &self.data
    }

    pub fn transpose(&self) -> Self {
        let d = &self.data;
        Self {
            data: [d[0], d[3], d[6], d[1], d[4], d[7], d[2], d[5], d[8]],
        }
    }

    pub fn determinant(&self) -> f64 {
        let [c0, c1, c2] = self.columns();
        crate::vector::dot(&c0, &crate::vector::cross(&c1, &c2))
    }
}

impl Index<usize> for Matrix3 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

/// Group three column vectors into a matrix (right, forward, up).
#[inline]
pub fn vectors_to_matrix(first: &Vector3, second: &Vector3, third: &Vector3) -> Matrix3 {
    Matrix3::from_columns(*first, *second, *third)
}

/// Split a matrix back into its three column vectors.
#[inline]
pub fn matrix_to_vectors(m: &Matrix3) -> [Vector3; 3] {
    m.columns()
}

/// 4x4 column-major rotation + position matrix (index `4 * j + i`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranRot {
    data: [f64; 16],
}

impl Default for TranRot {
    fn default() -> Self {
        Self::from_rotation_position(&Matrix3::IDENTITY, &Vector3::ZERO)
    }
}

impl TranRot {
    /// Carry value stored in the `w` row of the three axis columns.
    pub const AXIS_CARRY: f64 = 1.0;
    /// Carry value stored in the `w` row of the position column.
    pub const POSITION_CARRY: f64 = 0.0;

    #[inline]
    pub const fn from_column_major(data: [f64; 16]) -> Self {
        Self { data }
    }

    pub fn from_rotation_position(rotation: &Matrix3, position: &Vector3) -> Self {
        let mut data = [0.0; 16];
        for (j, axis) in rotation.columns().iter().enumerate() {
            data[4 * j] = axis.x;
            data[4 * j + 1] = axis.y;
            data[4 * j + 2] = axis.z;
            data[4 * j + 3] = Self::AXIS_CARRY;
        }
        data[12] = position.x;
        data[13] = position.y;
        data[14] = position.z;
        data[15] = Self::POSITION_CARRY;
        Self { data }
    }

    /// xyz part of column `index` (0..=3); the `w` row is read with [`TranRot::carry`].
    ///
    /// # Panics
    /// If `index > 3`.
    pub fn column(&self, index: usize) -> Vector3 {
        assert!(index < 4, "TranRot column index {index} out of range");
        let base = 4 * index;
        Vector3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// `w` row of column `index`.
    ///
    /// # Panics
    /// If `index > 3`.
    pub fn carry(&self, index: usize) -> f64 {
        assert!(index < 4, "TranRot column index {index} out of range");
        self.data[4 * index + 3]
    }

    pub fn rotation(&self) -> Matrix3 {
        Matrix3::from_columns(self.column(0), self.column(1), self.column(2))
    }

    pub fn position(&self) -> Vector3 {
        self.column(3)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64; 16] {
        &self.data
    }
}

impl Index<usize> for TranRot {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}
