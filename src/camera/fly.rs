use super::{
    Camera, MoveDirection, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_PITCH,
    DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
};
use crate::math::{Mat4, Quat, Vec3, Vec4};
use crate::options::CameraOptions;

/// Pitch limit in degrees when looking is constrained.
pub const MAX_PITCH: f32 = 89.0;

/// Free-fly camera driven by yaw and pitch.
///
/// Front/Right/Up are derived from the angles and recomputed whenever they
/// change; they cannot be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World units per second of keyboard movement.
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of look input.
    pub mouse_sensitivity: f32,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl FlyCamera {
    /// Create a camera at `position` with the given orientation in degrees.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: world_up,
            right: Vec3::ZERO,
            world_up,
            yaw,
            pitch,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Scalar-component form of [`FlyCamera::new`].
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Create a camera at `position` with orientation and tunables taken
    /// from `options`.
    #[must_use]
    pub fn from_options(position: Vec3, options: &CameraOptions) -> Self {
        let [ux, uy, uz] = options.world_up;
        let mut camera = Self::new(
            position,
            Vec3::new(ux, uy, uz),
            options.yaw,
            options.pitch,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.zoom = options.zoom;
        camera
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World up the basis is built against.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw and pitch directly (unclamped) and rebuild the basis.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_vectors();
    }

    /// Look-at view built from the cached Front/Up vectors.
    #[must_use]
    pub fn view_matrix_from_vectors(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    /// View built by composing yaw and pitch rotation matrices with the
    /// inverse translation.
    ///
    /// NOTE: the quaternions are `(axis, angle_in_degrees)` with the raw
    /// angle in the `w` slot, not `(axis * sin(θ/2), cos(θ/2))`. After
    /// normalization this is only an approximation of a rotation by the
    /// angle, so the result does not match
    /// [`FlyCamera::view_matrix_from_vectors`]. Kept as-is so existing
    /// scenes render identically.
    #[must_use]
    pub fn view_matrix_from_quaternion(&self) -> Mat4 {
        let yaw = Quat::from_xyzw(0.0, 1.0, 0.0, self.yaw);
        let pitch = Quat::from_xyzw(1.0, 0.0, 0.0, self.pitch);

        let rotation_yaw = yaw.to_mat4();
        let rotation_pitch = pitch.to_mat4();
        let translation =
            Mat4::IDENTITY.translate(Vec4::from_vec3(-self.position, 1.0));

        rotation_yaw * rotation_pitch * translation
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
                .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Camera for FlyCamera {
    fn view_matrix(&mut self) -> Mat4 {
        self.view_matrix_from_vectors()
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn on_move(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    fn on_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }

        self.update_vectors();
    }

    fn on_zoom(&mut self, dy: f32) {
        // Only moves while already in range; an out-of-range zoom snaps to
        // the nearest bound instead.
        if (MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            self.zoom -= dy;
        }
        if self.zoom <= MIN_ZOOM {
            self.zoom = MIN_ZOOM;
        }
        if self.zoom >= MAX_ZOOM {
            self.zoom = MAX_ZOOM;
        }
    }
}
