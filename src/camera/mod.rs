//! Camera models that turn input deltas into view transforms.
//!
//! Two independent cameras share one capability set, [`Camera`]:
//! a free-fly [`FlyCamera`] driven by Euler angles, and an orbiting
//! [`ThirdPersonCamera`] trailing a focal point. [`CameraRig`] owns one
//! of each plus the active [`CameraMode`] and is the explicit per-frame
//! context a render loop drives.

/// Free-fly camera.
pub mod fly;
/// Active-mode selection and per-frame command dispatch.
pub mod rig;
/// Orbit camera trailing a focal point.
pub mod third_person;
/// GPU uniform block for the view/projection pair.
pub mod uniform;

pub use fly::FlyCamera;
pub use rig::{CameraCommand, CameraMode, CameraRig};
pub use third_person::{ThirdPersonCamera, ORBIT_DISTANCE};
pub use uniform::CameraUniform;

use crate::math::{Mat4, Vec3};

/// Default yaw in degrees; -90 looks down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default degrees of rotation per pixel of look input.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
/// Default zoom (vertical field of view) in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;
/// Zoom lower bound in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Zoom upper bound in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// Keyboard movement direction, relative to the camera's basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along Front.
    Forward,
    /// Against Front.
    Backward,
    /// Against Right.
    Left,
    /// Along Right.
    Right,
}

/// What a render loop needs from a camera once per frame.
///
/// Mutations must be applied before [`Camera::view_matrix`] is read in the
/// same frame; basis vectors and position are derived from the latest
/// orientation, not cached across mutations.
pub trait Camera {
    /// World-to-eye transform for the current state.
    fn view_matrix(&mut self) -> Mat4;

    /// World-space eye position, e.g. for a view-position uniform.
    fn position(&self) -> Vec3;

    /// Current zoom in degrees, used as the vertical field of view.
    fn zoom(&self) -> f32;

    /// Move for `dt` seconds in `direction`.
    fn on_move(&mut self, direction: MoveDirection, dt: f32);

    /// Rotate by a look offset in pixels. With `constrain_pitch` the pitch
    /// is clamped to the camera's allowed range.
    fn on_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool);

    /// Adjust zoom by a scroll delta (positive zooms in).
    fn on_zoom(&mut self, dy: f32);

    /// [`Camera::on_look`] with the pitch constraint enabled.
    fn look(&mut self, dx: f32, dy: f32) {
        self.on_look(dx, dy, true);
    }
}
