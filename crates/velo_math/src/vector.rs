//! The homogeneous 3-component vector.

use crate::{
    angle::{Degrees, Radians},
    error::{MathError, MathResult},
    matrix::Matrix4,
    transform,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A vector in 3D space, stored in homogeneous form as `[x, y, z, w]`.
///
/// A vector can represent either a point or a direction. The homogeneous
/// coordinate `w` is `1.0` at construction and only changes when the
/// vector is transformed by a matrix whose last column is not `[0, 0, 0,
/// 1]`. Vectors are plain value types: binary operations return new
/// vectors and leave their operands untouched.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Vector3 {
    /// Creates a new vector with the given components and a homogeneous
    /// coordinate of `1.0`.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Creates a new vector with all spatial components zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The homogeneous coordinate.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// Computes the norm (length) of the vector from its spatial
    /// components. The value is recomputed on every call.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes the vector in place so that its norm becomes `1.0`
    /// while its direction is preserved.
    ///
    /// # Errors
    /// If the norm of the vector is zero (or otherwise too small for its
    /// reciprocal to be finite).
    pub fn normalize(&mut self) -> MathResult<()> {
        let inv_norm = self.norm().recip();
        if !inv_norm.is_finite() {
            return Err(MathError::DegenerateVector);
        }
        self.x *= inv_norm;
        self.y *= inv_norm;
        self.z *= inv_norm;
        Ok(())
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// If the norm of the vector is zero.
    pub fn normalized(&self) -> MathResult<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the cosine of the angle between this vector and another
    /// by normalizing both operands and taking their dot product.
    ///
    /// This is not the conventional dot product of the two vectors; use
    /// [`dot`](Self::dot) for that.
    ///
    /// # Errors
    /// If either vector has zero norm.
    pub fn cosine_of_angle(&self, other: &Self) -> MathResult<f64> {
        Ok(self.normalized()?.dot(&other.normalized()?))
    }

    /// Computes the cross product of the normalized versions of this
    /// vector and another, yielding a unit normal of the plane they span
    /// (unless they are parallel).
    ///
    /// This is not the conventional cross product of the two vectors; use
    /// [`cross`](Self::cross) for that.
    ///
    /// # Errors
    /// If either vector has zero norm.
    pub fn normalized_cross(&self, other: &Self) -> MathResult<Self> {
        Ok(self.normalized()?.cross(&other.normalized()?))
    }

    /// Computes the angle between this vector and another.
    ///
    /// The cosine of the angle is clamped to `[-1, 1]` before taking the
    /// arccosine, so floating-point drift on (anti-)parallel vectors can
    /// not produce a NaN angle.
    ///
    /// # Errors
    /// If either vector has zero norm.
    pub fn angle_to(&self, other: &Self) -> MathResult<Radians> {
        let cosine = self.cosine_of_angle(other)?.clamp(-1.0, 1.0);
        Ok(Radians(cosine.acos()))
    }

    /// Transforms the vector in place by the given matrix, following the
    /// row-vector convention: `[x', y', z', w'] = [x, y, z, w] * M`.
    ///
    /// All four output components are computed from the pre-transform
    /// components before any of them is assigned.
    pub fn transform(&mut self, matrix: &Matrix4) {
        let rows = matrix.rows();
        let [x, y, z, w] = [self.x, self.y, self.z, self.w];

        self.x = x * rows[0][0] + y * rows[1][0] + z * rows[2][0] + w * rows[3][0];
        self.y = x * rows[0][1] + y * rows[1][1] + z * rows[2][1] + w * rows[3][1];
        self.z = x * rows[0][2] + y * rows[1][2] + z * rows[2][2] + w * rows[3][2];
        self.w = x * rows[0][3] + y * rows[1][3] + z * rows[2][3] + w * rows[3][3];
    }

    /// Computes the vector obtained by transforming this vector with the
    /// given matrix, leaving this vector unmodified.
    #[inline]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let mut transformed = *self;
        transformed.transform(matrix);
        transformed
    }

    /// Translates the vector in place by the given offset along each
    /// axis.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&transform::translation_matrix(x, y, z));
    }

    /// Rotates the vector in place by the given angle around each axis,
    /// with the elementary rotations applied in the fixed x, y, z order.
    pub fn rotate(&mut self, x: Degrees, y: Degrees, z: Degrees) {
        self.transform(&transform::rotation_matrix(x, y, z));
    }

    /// Scales the vector in place by the given factor along each axis.
    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.transform(&transform::scaling_matrix(x, y, z));
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x * *b, a.y * *b, a.z * *b)
});

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| {
    Vector3::new(b.x * *a, b.y * *a, b.z * *a)
});

impl_binop!(Div, div, Vector3, f64, Vector3, |a, b| { a * b.recip() });

impl_binop!(Mul, mul, Vector3, Matrix4, Vector3, |a, b| {
    a.transformed(b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    f64::abs_diff_eq(&a.x, &b.x, epsilon)
        && f64::abs_diff_eq(&a.y, &b.y, epsilon)
        && f64::abs_diff_eq(&a.z, &b.z, epsilon)
        && f64::abs_diff_eq(&a.w, &b.w, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    f64::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && f64::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && f64::relative_eq(&a.z, &b.z, epsilon, max_relative)
        && f64::relative_eq(&a.w, &b.w, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::consts::FRAC_PI_2;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn creating_vector_sets_unit_homogeneous_coordinate() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 1.0);
    }

    #[test]
    fn computing_norm_works() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.norm(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 9.0, epsilon = EPSILON);
    }

    #[test]
    fn norm_reflects_coordinate_writes() {
        let mut v = Vector3::new(3.0, 0.0, 0.0);
        assert_abs_diff_eq!(v.norm(), 3.0, epsilon = EPSILON);

        *v.x_mut() = 0.0;
        *v.y_mut() = 4.0;
        assert_abs_diff_eq!(v.norm(), 4.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_gives_unit_vector_with_same_direction() {
        let mut v = Vector3::new(3.0, 4.0, 0.0);
        v.normalize().unwrap();

        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v, Vector3::new(0.6, 0.8, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn normalized_leaves_original_unmodified() {
        let v = Vector3::new(0.0, 0.0, 5.0);
        let normalized = v.normalized().unwrap();

        assert_abs_diff_eq!(normalized, Vector3::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 5.0), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert_eq!(
            Vector3::zeros().normalized(),
            Err(MathError::DegenerateVector)
        );
    }

    #[test]
    fn dot_product_works() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(v1.dot(&v2), 32.0, epsilon = EPSILON);
    }

    #[test]
    fn cross_product_works() {
        let cross = Vector3::unit_x().cross(&Vector3::unit_y());
        assert_abs_diff_eq!(cross, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn cross_product_of_vector_with_itself_is_zero() {
        let v = Vector3::new(1.5, -2.0, 0.5);
        assert_abs_diff_eq!(v.cross(&v), Vector3::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn cosine_of_angle_of_vector_with_itself_is_one() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let scaled = v * 4.0;
        assert_abs_diff_eq!(v.cosine_of_angle(&scaled).unwrap(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn cosine_of_angle_ignores_operand_magnitudes() {
        let v1 = Vector3::new(10.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 0.01, 0.0);
        assert_abs_diff_eq!(v1.cosine_of_angle(&v2).unwrap(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn cosine_of_angle_with_zero_vector_fails() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(
            v.cosine_of_angle(&Vector3::zeros()),
            Err(MathError::DegenerateVector)
        );
    }

    #[test]
    fn normalized_cross_gives_unit_normal() {
        let v1 = Vector3::new(2.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 3.0, 0.0);
        let normal = v1.normalized_cross(&v2).unwrap();

        assert_abs_diff_eq!(normal, Vector3::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!(normal.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn angle_between_orthogonal_axes_is_half_pi() {
        let angle = Vector3::unit_x().angle_to(&Vector3::unit_y()).unwrap();
        assert_abs_diff_eq!(angle, Radians(FRAC_PI_2), epsilon = EPSILON);
    }

    #[test]
    fn angle_between_parallel_vectors_is_clamped_to_zero() {
        let v1 = Vector3::new(1.0, 1.0, 1.0);
        let v2 = Vector3::new(2.0, 2.0, 2.0);
        let angle = v1.angle_to(&v2).unwrap();

        assert!(angle.0.is_finite());
        assert_abs_diff_eq!(angle, Radians(0.0), epsilon = 1e-7);
    }

    #[test]
    fn arithmetic_operations_leave_operands_unmodified() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);

        assert_abs_diff_eq!(&v1 + &v2, Vector3::new(5.0, 7.0, 9.0), epsilon = EPSILON);
        assert_abs_diff_eq!(&v1 - &v2, Vector3::new(-3.0, -3.0, -3.0), epsilon = EPSILON);
        assert_abs_diff_eq!(&v1 * 2.0, Vector3::new(2.0, 4.0, 6.0), epsilon = EPSILON);
        assert_abs_diff_eq!(3.0 * &v1, Vector3::new(3.0, 6.0, 9.0), epsilon = EPSILON);
        assert_abs_diff_eq!(&v1 / 2.0, Vector3::new(0.5, 1.0, 1.5), epsilon = EPSILON);
        assert_abs_diff_eq!(-&v1, Vector3::new(-1.0, -2.0, -3.0), epsilon = EPSILON);

        assert_abs_diff_eq!(v1, Vector3::new(1.0, 2.0, 3.0), epsilon = EPSILON);
        assert_abs_diff_eq!(v2, Vector3::new(4.0, 5.0, 6.0), epsilon = EPSILON);
    }

    #[test]
    fn assigning_operations_work() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(v, Vector3::new(2.0, 3.0, 4.0), epsilon = EPSILON);

        v -= Vector3::new(2.0, 2.0, 2.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 2.0), epsilon = EPSILON);

        v *= 3.0;
        assert_abs_diff_eq!(v, Vector3::new(0.0, 3.0, 6.0), epsilon = EPSILON);
    }

    #[test]
    fn translation_round_trip_restores_original_coordinates() {
        let mut v = Vector3::new(1.25, -0.5, 2.0);
        v.translate(5.0, -2.0, 3.0);
        v.translate(-5.0, 2.0, -3.0);

        assert_abs_diff_eq!(v, Vector3::new(1.25, -0.5, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn rotating_vector_uses_degrees() {
        let mut v = Vector3::unit_x();
        v.rotate(Degrees(0.0), Degrees(0.0), Degrees(90.0));

        assert_abs_diff_eq!(v, Vector3::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn scaling_vector_works() {
        let mut v = Vector3::new(1.0, -2.0, 0.5);
        v.scale(2.0, 3.0, 4.0);

        assert_abs_diff_eq!(v, Vector3::new(2.0, -6.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn combined_matrix_matches_chain_of_elementary_transforms() {
        let combined = transform::scaling_matrix(2.0, 3.0, 4.0)
            * transform::rotation_matrix(Degrees(30.0), Degrees(-60.0), Degrees(45.0))
            * transform::translation_matrix(5.0, -2.0, 3.0);

        let mut via_combined = Vector3::new(1.0, 2.0, 3.0);
        via_combined.transform(&combined);

        let mut via_chain = Vector3::new(1.0, 2.0, 3.0);
        via_chain.scale(2.0, 3.0, 4.0);
        via_chain.rotate(Degrees(30.0), Degrees(-60.0), Degrees(45.0));
        via_chain.translate(5.0, -2.0, 3.0);

        assert_abs_diff_eq!(via_combined, via_chain, epsilon = EPSILON);
    }

    #[test]
    fn multiplying_vector_by_matrix_gives_transformed_copy() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let matrix = transform::translation_matrix(1.0, 1.0, 1.0);

        assert_abs_diff_eq!(&v * &matrix, Vector3::new(2.0, 3.0, 4.0), epsilon = EPSILON);
        assert_abs_diff_eq!(v, Vector3::new(1.0, 2.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn converting_to_and_from_array_works() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn display_formats_spatial_components() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "[1, 2.5, -3]");
    }
}
