use std::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{Quat, Vec3, Vec4};

/// Column-major 4x4 matrix.
///
/// Only the builders below produce values; there is no way to obtain an
/// uninitialized matrix. The memory layout is sixteen consecutive `f32`s,
/// column after column, ready for a `mat4` shader uniform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    /// The four columns, left to right.
    pub cols: [Vec4; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// Build a matrix from its four columns.
    #[must_use]
    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self { cols: [x, y, z, w] }
    }

    /// Canonical 4x4 identity.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Column `index` (0..4).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    #[must_use]
    pub const fn col(&self, index: usize) -> Vec4 {
        self.cols[index]
    }

    /// The sixteen elements in column-major order.
    #[must_use]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    /// Column-major element slice, the equivalent of a raw `float*` for
    /// uniform upload.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cols)
    }

    /// Standard column-major product `a * b`.
    ///
    /// Element (column `c`, row `r`) is the sum over `k` of
    /// `a[k][r] * b[c][k]`.
    #[must_use]
    pub fn multiply(a: &Self, b: &Self) -> Self {
        let mut cols = [Vec4::default(); 4];
        for (out, bc) in cols.iter_mut().zip(b.cols.iter()) {
            let [a0, a1, a2, a3] = a.cols;
            *out = Vec4::new(
                a0.x * bc.x + a1.x * bc.y + a2.x * bc.z + a3.x * bc.w,
                a0.y * bc.x + a1.y * bc.y + a2.y * bc.z + a3.y * bc.w,
                a0.z * bc.x + a1.z * bc.y + a2.z * bc.z + a3.z * bc.w,
                a0.w * bc.x + a1.w * bc.y + a2.w * bc.z + a3.w * bc.w,
            );
        }
        Self { cols }
    }

    /// Rotation matrix for `q`.
    ///
    /// `q` is normalized first (a zero quaternion produces NaN). The
    /// translation column is always `(0, 0, 0, 1)`.
    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let q = q.normalize();

        let xx = q.x * q.x;
        let yy = q.y * q.y;
        let zz = q.z * q.z;
        let xy = q.x * q.y;
        let xz = q.x * q.z;
        let yz = q.y * q.z;
        let wx = q.w * q.x;
        let wy = q.w * q.y;
        let wz = q.w * q.z;

        Self::from_cols(
            Vec4::new(
                1.0 - 2.0 * (yy + zz),
                2.0 * (xy + wz),
                2.0 * (xz - wy),
                0.0,
            ),
            Vec4::new(
                2.0 * (xy - wz),
                1.0 - 2.0 * (xx + zz),
                2.0 * (yz + wx),
                0.0,
            ),
            Vec4::new(
                2.0 * (xz + wy),
                2.0 * (yz - wx),
                1.0 - 2.0 * (xx + yy),
                0.0,
            ),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Apply a translation by `v` in this matrix's own frame.
    ///
    /// Equivalent to `self * T(v)`: the last column gains the basis
    /// columns weighted by `v.x`, `v.y`, `v.z`. `v.w` is ignored.
    #[must_use]
    pub fn translate(&self, v: Vec4) -> Self {
        let [c0, c1, c2, c3] = self.cols;
        let mut result = *self;
        result.cols[3] = Vec4::new(
            c3.x + c0.x * v.x + c1.x * v.y + c2.x * v.z,
            c3.y + c0.y * v.x + c1.y * v.y + c2.y * v.z,
            c3.z + c0.z * v.x + c1.z * v.y + c2.z * v.z,
            c3.w + c0.w * v.x + c1.w * v.y + c2.w * v.z,
        );
        result
    }

    /// Right-handed perspective projection with OpenGL clip space
    /// (depth in `[-1, 1]`, `-1` in the w row).
    ///
    /// `zfar == znear` or `aspect == 0` produce Inf/NaN entries; neither
    /// is checked.
    #[must_use]
    pub fn perspective_fov(
        fovy_deg: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let tan_half_fovy = (fovy_deg.to_radians() / 2.0).tan();
        let depth = zfar - znear;

        Self::from_cols(
            Vec4::new(1.0 / (aspect * tan_half_fovy), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0 / tan_half_fovy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(zfar + znear) / depth, -1.0),
            Vec4::new(0.0, 0.0, -(2.0 * zfar * znear) / depth, 0.0),
        )
    }

    /// Right-handed view matrix looking from `eye` toward `center`.
    ///
    /// `eye == center`, or `up` parallel to the view direction, yields
    /// NaN rows.
    #[must_use]
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }

    /// Transform a homogeneous vector.
    #[must_use]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        Vec4::new(
            c0.x * v.x + c1.x * v.y + c2.x * v.z + c3.x * v.w,
            c0.y * v.x + c1.y * v.y + c2.y * v.z + c3.y * v.w,
            c0.z * v.x + c1.z * v.y + c2.z * v.z + c3.z * v.w,
            c0.w * v.x + c1.w * v.y + c2.w * v.z + c3.w * v.w,
        )
    }

    /// Largest absolute element difference to `other`.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        self.to_cols_array()
            .iter()
            .zip(other.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&self, &rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}
