use bytemuck::{Pod, Zeroable};

use super::Mat4;

/// Quaternion `(x, y, z, w)` with `w` as the scalar part.
///
/// Defaults to the identity rotation `(0, 0, 0, 1)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Quat {
    /// Vector part, x.
    pub x: f32,
    /// Vector part, y.
    pub y: f32,
    /// Vector part, z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from raw components. No normalization.
    #[must_use]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Divide every component by the four-component magnitude.
    ///
    /// A zero quaternion yields NaN components.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = (self.x * self.x
            + self.y * self.y
            + self.z * self.z
            + self.w * self.w)
            .sqrt();
        Self::from_xyzw(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Negate the vector part, keep the scalar part.
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotation matrix, see [`Mat4::from_quat`].
    #[must_use]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_quat(self)
    }
}
