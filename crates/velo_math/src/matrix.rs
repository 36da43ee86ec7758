//! The 4x4 homogeneous transform matrix.
//!
//! Multiplying two matrices concatenates their transforms; multiplying a
//! matrix by a scalar scales every element, including the homogeneous row,
//! without renormalizing it.

use crate::{
    angle::Degrees,
    error::{MathError, MathResult},
    transform,
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4x4 matrix of `f64` elements, stored in row-major order.
///
/// The matrix expresses homogeneous transforms of 3D points under the
/// row-vector convention: points pre-multiply the matrix (`v' = v * M`),
/// so the translation part occupies the last row. A freshly constructed
/// matrix is the identity.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_rows([[0.0; 4]; 4])
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Creates a diagonal matrix with the given elements on the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: [f64; 4]) -> Self {
        let mut matrix = Self::zeros();
        matrix.rows[0][0] = diagonal[0];
        matrix.rows[1][1] = diagonal[1];
        matrix.rows[2][2] = diagonal[2];
        matrix.rows[3][3] = diagonal[3];
        matrix
    }

    /// Returns the element at `row` and `col`.
    ///
    /// # Errors
    /// If `row` or `col` is outside `0..=3`.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> MathResult<f64> {
        Self::check_indices(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Returns a mutable reference to the element at `row` and `col`.
    ///
    /// # Errors
    /// If `row` or `col` is outside `0..=3`.
    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> MathResult<&mut f64> {
        Self::check_indices(row, col)?;
        Ok(&mut self.rows[row][col])
    }

    /// Sets the element at `row` and `col` to the given value.
    ///
    /// # Errors
    /// If `row` or `col` is outside `0..=3`.
    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: f64) -> MathResult<()> {
        *self.element_mut(row, col)? = value;
        Ok(())
    }

    /// Computes the concatenation (matrix product) of this matrix with
    /// another, leaving both inputs unmodified.
    ///
    /// Concatenation is not commutative: under the row-vector convention,
    /// `a.concatenated(&b)` yields a transform that applies `a` before `b`.
    pub fn concatenated(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, element) in row.iter_mut().enumerate() {
                *element = (0..4).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Self::from_rows(rows)
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        let mut mapped = *self;
        for row in &mut mapped.rows {
            for element in row {
                *element = f(*element);
            }
        }
        mapped
    }

    /// Concatenates a translation by the given offset onto this matrix,
    /// replacing its contents with `self * translation`.
    pub fn translate_by(&mut self, offset: &Vector3) {
        *self = &*self * transform::translation_matrix(offset.x(), offset.y(), offset.z());
    }

    /// Concatenates a rotation by the given per-axis angles, interpreted
    /// as degrees, onto this matrix, replacing its contents with
    /// `self * rotation`.
    pub fn rotate_by(&mut self, angles: &Vector3) {
        *self = &*self
            * transform::rotation_matrix(
                Degrees(angles.x()),
                Degrees(angles.y()),
                Degrees(angles.z()),
            );
    }

    /// Concatenates a scaling by the given per-axis factors onto this
    /// matrix, replacing its contents with `self * scaling`.
    pub fn scale_by(&mut self, factors: &Vector3) {
        *self = &*self * transform::scaling_matrix(factors.x(), factors.y(), factors.z());
    }

    #[inline]
    pub(crate) const fn rows(&self) -> &[[f64; 4]; 4] {
        &self.rows
    }

    fn check_indices(row: usize, col: usize) -> MathResult<()> {
        if row > 3 || col > 3 {
            return Err(MathError::IndexOutOfBounds { row, col });
        }
        Ok(())
    }
}

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    a.concatenated(b)
});

impl_binop!(Mul, mul, Matrix4, f64, Matrix4, |a, b| {
    a.mapped(|element| element * *b)
});

impl_binop!(Mul, mul, f64, Matrix4, Matrix4, |a, b| {
    b.mapped(|element| element * *a)
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.rows
        .iter()
        .flatten()
        .zip(b.rows.iter().flatten())
        .all(|(x, y)| f64::abs_diff_eq(x, y, epsilon))
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.rows
        .iter()
        .flatten()
        .zip(b.rows.iter().flatten())
        .all(|(x, y)| f64::relative_eq(x, y, epsilon, max_relative))
});

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for element in row {
                write!(f, "{element}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
