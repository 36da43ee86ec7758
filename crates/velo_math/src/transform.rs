//! Construction of homogeneous transform matrices.
//!
//! Every builder is a pure function of its numeric inputs. The produced
//! matrices follow the row-vector convention used throughout the crate:
//! points pre-multiply matrices (`v' = v * M`), so the translation part
//! occupies the last matrix row. Rotations are right-handed, and the
//! combined rotation matrix composes the elementary rotations in the fixed
//! order `Rx * Ry * Rz`, which applies the rotation about the x-axis first.

use crate::{
    angle::{Angle, Degrees},
    matrix::Matrix4,
};

/// Creates a matrix that translates points by the given offset along each
/// axis.
pub fn translation_matrix(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ])
}

/// Creates a matrix that scales points by the given factor along each
/// axis.
pub fn scaling_matrix(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::from_diagonal([x, y, z, 1.0])
}

/// Creates a matrix that rotates points by the given angle around each
/// axis, with the elementary rotations composed in the fixed order
/// `Rx * Ry * Rz`.
pub fn rotation_matrix(x: Degrees, y: Degrees, z: Degrees) -> Matrix4 {
    rotation_matrix_x(x) * rotation_matrix_y(y) * rotation_matrix_z(z)
}

/// Creates a matrix for a right-handed rotation around the x-axis,
/// carrying the y-axis towards the z-axis for positive angles.
pub fn rotation_matrix_x(angle: Degrees) -> Matrix4 {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, sin, 0.0],
        [0.0, -sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix for a right-handed rotation around the y-axis,
/// carrying the z-axis towards the x-axis for positive angles.
pub fn rotation_matrix_y(angle: Degrees) -> Matrix4 {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix4::from_rows([
        [cos, 0.0, -sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix for a right-handed rotation around the z-axis,
/// carrying the x-axis towards the y-axis for positive angles.
pub fn rotation_matrix_z(angle: Degrees) -> Matrix4 {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix4::from_rows([
        [cos, sin, 0.0, 0.0],
        [-sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
