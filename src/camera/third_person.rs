use super::{
    Camera, MoveDirection, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_PITCH,
    DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
};
use crate::math::{Mat4, Vec3};
use crate::options::{CameraOptions, ThirdPersonOptions};

/// Radius at which the camera trails its focal point.
pub const ORBIT_DISTANCE: f32 = 40.0;
/// Lower pitch bound in degrees when looking is constrained.
pub const MIN_ORBIT_PITCH: f32 = 15.0;
/// Upper pitch bound in degrees when looking is constrained.
pub const MAX_ORBIT_PITCH: f32 = 45.0;
/// Forward/backward movement is ignored at or above this pitch.
pub const MOVE_PITCH_LIMIT: f32 = 87.0;

/// Orbit camera trailing a focal point at [`ORBIT_DISTANCE`].
///
/// The position is derived from the focal point, yaw, pitch and the
/// followed subject's heading, and is recomputed on every view/look.
/// Keyboard moves offset it from the orbit and accumulate until then. The
/// optional height lock pins `position.y` after each keyboard move.
#[derive(Debug, Clone, PartialEq)]
pub struct ThirdPersonCamera {
    /// World units per second of keyboard movement.
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of look input.
    pub mouse_sensitivity: f32,
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    focal_point: Vec3,
    player_angle: f32,
    height_lock: bool,
    fixed_height: f32,
}

impl Default for ThirdPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl ThirdPersonCamera {
    /// Create a camera orbiting `focal_point` with the given orientation in
    /// degrees. The height lock starts disabled.
    #[must_use]
    pub fn new(
        focal_point: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            position: focal_point,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: world_up,
            right: Vec3::ZERO,
            world_up,
            yaw,
            pitch,
            zoom: DEFAULT_ZOOM,
            focal_point,
            player_angle: 0.0,
            height_lock: false,
            fixed_height: 0.0,
        };
        camera.update_orbit();
        camera
    }

    /// Create a camera orbiting `focal_point` configured from options.
    #[must_use]
    pub fn from_options(
        focal_point: Vec3,
        camera: &CameraOptions,
        third_person: &ThirdPersonOptions,
    ) -> Self {
        let [ux, uy, uz] = camera.world_up;
        let mut this = Self::new(
            focal_point,
            Vec3::new(ux, uy, uz),
            camera.yaw,
            camera.pitch,
        );
        this.movement_speed = camera.movement_speed;
        this.mouse_sensitivity = camera.mouse_sensitivity;
        this.zoom = camera.zoom;
        this.set_height_lock(
            third_person.height_lock,
            third_person.fixed_height,
        );
        this
    }

    /// The point being orbited.
    #[must_use]
    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    /// Track a new focal point. Takes effect on the next view or look.
    pub fn set_focal_point(&mut self, focal_point: Vec3) {
        self.focal_point = focal_point;
    }

    /// Heading of the followed subject in degrees, added to yaw.
    #[must_use]
    pub fn player_angle(&self) -> f32 {
        self.player_angle
    }

    /// Set the followed subject's heading in degrees.
    pub fn set_player_angle(&mut self, degrees: f32) {
        self.player_angle = degrees;
    }

    /// Enable or disable the height lock. Nothing changes until the next
    /// [`Camera::on_move`].
    pub fn set_height_lock(&mut self, enabled: bool, height: f32) {
        if enabled != self.height_lock {
            log::debug!("third-person height lock {enabled} at {height}");
        }
        self.height_lock = enabled;
        self.fixed_height = height;
    }

    /// Whether the height lock is enabled.
    #[must_use]
    pub fn is_height_locked(&self) -> bool {
        self.height_lock
    }

    /// Height enforced while locked.
    #[must_use]
    pub fn fixed_height(&self) -> f32 {
        self.fixed_height
    }

    /// Unit direction from the camera toward the focal point.
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

    fn update_orbit(&mut self) {
        let angle = (self.yaw + self.player_angle).to_radians();
        let pitch = self.pitch.to_radians();

        let h_dist = ORBIT_DISTANCE * pitch.cos();
        let v_dist = ORBIT_DISTANCE * pitch.sin();
        let offset =
            Vec3::new(h_dist * angle.sin(), v_dist, h_dist * angle.cos());
        self.position = offset + self.focal_point;
        self.update_basis();
    }

    /// Front/Right/Up from the current position toward the focal point.
    fn update_basis(&mut self) {
        self.front = (self.focal_point - self.position).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Camera for ThirdPersonCamera {
    fn view_matrix(&mut self) -> Mat4 {
        self.update_orbit();
        Mat4::look_at(self.position, self.focal_point, Vec3::Y)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn on_move(&mut self, direction: MoveDirection, dt: f32) {
        self.update_basis();
        let velocity = self.movement_speed * dt;

        match direction {
            MoveDirection::Forward if self.pitch < MOVE_PITCH_LIMIT => {
                self.position += self.front * velocity;
            }
            MoveDirection::Backward if self.pitch < MOVE_PITCH_LIMIT => {
                self.position -= self.front * velocity;
            }
            MoveDirection::Forward | MoveDirection::Backward => {}
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }

        if self.height_lock {
            self.position.y = self.fixed_height;
        }
    }

    fn on_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(MIN_ORBIT_PITCH, MAX_ORBIT_PITCH);
        }

        self.update_orbit();
    }

    fn on_zoom(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_vec_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn zero_angles_orbit_behind_on_positive_z() {
        let mut camera = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 0.0);
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, 40.0));
        let _ = camera.view_matrix();
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, 40.0));
    }

    #[test]
    fn orbit_follows_focal_point_yaw_and_pitch() {
        let focal = Vec3::new(10.0, 5.0, -3.0);
        let mut camera = ThirdPersonCamera::new(focal, Vec3::Y, 90.0, 30.0);
        let _ = camera.view_matrix();

        let h = ORBIT_DISTANCE * 30.0_f32.to_radians().cos();
        let v = ORBIT_DISTANCE * 30.0_f32.to_radians().sin();
        assert_vec_near(camera.position(), focal + Vec3::new(h, v, 0.0));
        let radius = (camera.position() - focal).length();
        assert!((radius - ORBIT_DISTANCE).abs() < EPS);
    }

    #[test]
    fn player_angle_adds_to_yaw() {
        let mut a = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 30.0, 20.0);
        a.set_player_angle(60.0);
        let mut b = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 90.0, 20.0);
        assert!(a.view_matrix().max_abs_diff(&b.view_matrix()) < EPS);
    }

    #[test]
    fn view_tracks_moved_focal_point() {
        let mut camera = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 0.0);
        camera.set_focal_point(Vec3::new(100.0, 0.0, 0.0));
        let view = camera.view_matrix();
        assert_vec_near(camera.position(), Vec3::new(100.0, 0.0, 40.0));
        let expected = Mat4::look_at(
            Vec3::new(100.0, 0.0, 40.0),
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::Y,
        );
        assert!(view.max_abs_diff(&expected) < EPS);
    }

    #[test]
    fn constrained_pitch_stays_in_orbit_range() {
        let mut camera = ThirdPersonCamera::default();
        for dy in [-1.0e6, 0.0, 30.0, 1.0e6, -149.0, 251.0] {
            camera.look(12.0, dy);
            assert!(
                (MIN_ORBIT_PITCH..=MAX_ORBIT_PITCH).contains(&camera.pitch()),
                "pitch {}",
                camera.pitch()
            );
        }
    }

    #[test]
    fn unconstrained_pitch_is_free() {
        let mut camera = ThirdPersonCamera::default();
        camera.on_look(0.0, 700.0, false);
        assert!((camera.pitch() - 70.0).abs() < EPS);
    }

    #[test]
    fn height_lock_pins_y_after_every_move() {
        let foci = [
            Vec3::ZERO,
            Vec3::new(-250.0, 80.0, 12.0),
            Vec3::new(3.5, -40.0, 999.0),
        ];
        let directions = [
            MoveDirection::Forward,
            MoveDirection::Backward,
            MoveDirection::Left,
            MoveDirection::Right,
        ];
        for focal in foci {
            for yaw in [-90.0, 0.0, 135.0] {
                let mut camera =
                    ThirdPersonCamera::new(focal, Vec3::Y, yaw, 30.0);
                camera.set_height_lock(true, 7.25);
                for direction in directions {
                    camera.on_move(direction, 0.016);
                    assert_eq!(camera.position().y, 7.25);
                }
            }
        }
    }

    #[test]
    fn height_lock_waits_for_next_move() {
        let mut camera =
            ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 30.0);
        let before = camera.position();
        camera.set_height_lock(true, 3.0);
        assert_eq!(camera.position(), before);
        assert!(camera.is_height_locked());
        assert_eq!(camera.fixed_height(), 3.0);

        camera.set_height_lock(false, 3.0);
        camera.on_move(MoveDirection::Left, 1.0);
        assert!((camera.position().y - 20.0).abs() < EPS);
    }

    #[test]
    fn forward_move_blocked_near_vertical() {
        let mut camera = ThirdPersonCamera::default();
        camera.on_look(0.0, 880.0, false);
        let before = camera.position();
        camera.on_move(MoveDirection::Forward, 1.0);
        assert_eq!(camera.position(), before);
        camera.on_move(MoveDirection::Backward, 1.0);
        assert_eq!(camera.position(), before);

        // Strafing is not gated by pitch.
        camera.on_move(MoveDirection::Right, 1.0);
        let strafed = camera.position();
        assert!(((strafed - before).length() - 2.5).abs() < EPS);
        camera.on_move(MoveDirection::Left, 1.0);
        assert!(((camera.position() - strafed).length() - 2.5).abs() < EPS);
    }

    #[test]
    fn moves_in_one_frame_accumulate() {
        let mut camera = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 0.0);
        camera.on_move(MoveDirection::Forward, 1.0);
        camera.on_move(MoveDirection::Right, 1.0);
        assert_vec_near(camera.position(), Vec3::new(2.5, 0.0, 37.5));
    }

    #[test]
    fn strafe_after_forward_keeps_forward_offset() {
        let mut camera = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 0.0);
        for direction in [MoveDirection::Forward, MoveDirection::Left] {
            camera.on_move(direction, 0.5);
        }
        assert_vec_near(camera.position(), Vec3::new(-1.25, 0.0, 38.75));
    }

    #[test]
    fn forward_move_approaches_focal_point() {
        let mut camera = ThirdPersonCamera::new(Vec3::ZERO, Vec3::Y, 0.0, 0.0);
        camera.on_move(MoveDirection::Forward, 1.0);
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, 37.5));
        // The orbit is re-derived when the view is read.
        let _ = camera.view_matrix();
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, 40.0));
    }

    #[test]
    fn zoom_is_a_single_clamp() {
        let mut camera = ThirdPersonCamera::default();
        for dy in [10.0, 50.0, -3.0, -100.0, 0.5] {
            camera.on_zoom(dy);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&camera.zoom()));
        }

        let options = CameraOptions {
            zoom: 0.5,
            ..CameraOptions::default()
        };
        let mut camera = ThirdPersonCamera::from_options(
            Vec3::ZERO,
            &options,
            &ThirdPersonOptions::default(),
        );
        camera.on_zoom(-10.0);
        assert_eq!(camera.zoom(), 10.5);
    }

    #[test]
    fn from_options_applies_height_lock() {
        let lock = ThirdPersonOptions {
            height_lock: true,
            fixed_height: 2.0,
        };
        let mut camera = ThirdPersonCamera::from_options(
            Vec3::ZERO,
            &CameraOptions::default(),
            &lock,
        );
        assert!(camera.is_height_locked());
        camera.on_move(MoveDirection::Right, 1.0);
        assert_eq!(camera.position().y, 2.0);
    }
}
