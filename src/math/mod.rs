//! Vector, matrix and quaternion primitives for camera transforms.
//!
//! Deliberately narrow: 3- and 4-vectors, column-major 4x4 matrices and
//! quaternions, plus the projection and view builders a camera needs.
//! Degenerate inputs (zero-length normalization, `znear == zfar`) are
//! preconditions; they propagate NaN/Inf instead of being reported.

mod interop;
mod mat4;
mod quat;
mod vec;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec::{Vec3, Vec4};
