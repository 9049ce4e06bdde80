//! Per-frame camera context.
//!
//! A render loop owns one [`CameraRig`], feeds it [`CameraCommand`]s for
//! the frame's input, then reads the view matrix and uniform once.

use super::{
    Camera, CameraUniform, FlyCamera, MoveDirection, ThirdPersonCamera,
};
use crate::math::{Mat4, Vec3};
use crate::options::{Options, ProjectionOptions};

/// Which view derivation the rig produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Free-fly camera, look-at built from its Front/Up vectors.
    #[default]
    LookVectors,
    /// Free-fly camera, view composed from yaw/pitch quaternions.
    Quaternion,
    /// Orbit camera around its focal point.
    ThirdPerson,
}

impl CameraMode {
    /// All modes in cycling order.
    pub const ALL: [Self; 3] =
        [Self::LookVectors, Self::Quaternion, Self::ThirdPerson];

    /// The mode after this one, wrapping back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::LookVectors => Self::Quaternion,
            Self::Quaternion => Self::ThirdPerson,
            Self::ThirdPerson => Self::LookVectors,
        }
    }
}

/// One camera mutation, produced by the input layer or called directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Move the active camera for `dt` seconds.
    Move {
        /// Direction relative to the camera basis.
        direction: MoveDirection,
        /// Elapsed time in seconds.
        dt: f32,
    },
    /// Rotate the active camera by a pixel offset (pitch constrained).
    Look {
        /// Horizontal offset.
        dx: f32,
        /// Vertical offset (positive looks up).
        dy: f32,
    },
    /// Zoom the active camera by a scroll delta.
    Zoom {
        /// Scroll amount (positive zooms in).
        delta: f32,
    },
    /// Switch to the next [`CameraMode`].
    CycleMode,
    /// Switch to a specific [`CameraMode`].
    SetMode(CameraMode),
}

/// Both cameras, the active mode and the projection settings.
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Free-fly camera used by the look-vector and quaternion modes.
    pub fly: FlyCamera,
    /// Orbit camera used by the third-person mode.
    pub third_person: ThirdPersonCamera,
    mode: CameraMode,
    projection: ProjectionOptions,
    uniform: CameraUniform,
}

impl CameraRig {
    /// Create a rig from two prepared cameras. Starts in
    /// [`CameraMode::LookVectors`].
    #[must_use]
    pub fn new(
        fly: FlyCamera,
        third_person: ThirdPersonCamera,
        projection: ProjectionOptions,
    ) -> Self {
        Self {
            fly,
            third_person,
            mode: CameraMode::default(),
            projection,
            uniform: CameraUniform::new(),
        }
    }

    /// Create a rig with the fly camera at `position` and the orbit camera
    /// around `focal_point`, both configured from `options`.
    #[must_use]
    pub fn from_options(
        position: Vec3,
        focal_point: Vec3,
        options: &Options,
    ) -> Self {
        Self::new(
            FlyCamera::from_options(position, &options.camera),
            ThirdPersonCamera::from_options(
                focal_point,
                &options.camera,
                &options.third_person,
            ),
            options.projection.clone(),
        )
    }

    /// Currently selected mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Select a mode.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            log::debug!("camera mode {:?} -> {mode:?}", self.mode);
        }
        self.mode = mode;
    }

    /// Projection settings.
    #[must_use]
    pub fn projection(&self) -> &ProjectionOptions {
        &self.projection
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.projection.aspect = width as f32 / height as f32;
    }

    /// The camera that receives input in the current mode.
    #[must_use]
    pub fn active(&self) -> &dyn Camera {
        match self.mode {
            CameraMode::LookVectors | CameraMode::Quaternion => &self.fly,
            CameraMode::ThirdPerson => &self.third_person,
        }
    }

    /// Mutable access to the camera that receives input.
    pub fn active_mut(&mut self) -> &mut dyn Camera {
        match self.mode {
            CameraMode::LookVectors | CameraMode::Quaternion => &mut self.fly,
            CameraMode::ThirdPerson => &mut self.third_person,
        }
    }

    /// Apply one command to the active camera (or to the mode).
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Move { direction, dt } => {
                self.active_mut().on_move(direction, dt);
            }
            CameraCommand::Look { dx, dy } => self.active_mut().look(dx, dy),
            CameraCommand::Zoom { delta } => self.active_mut().on_zoom(delta),
            CameraCommand::CycleMode => self.set_mode(self.mode.next()),
            CameraCommand::SetMode(mode) => self.set_mode(mode),
        }
    }

    /// Apply a batch of commands in order.
    pub fn execute_all(
        &mut self,
        commands: impl IntoIterator<Item = CameraCommand>,
    ) {
        for command in commands {
            self.execute(command);
        }
    }

    /// View matrix for the current mode.
    pub fn view_matrix(&mut self) -> Mat4 {
        match self.mode {
            CameraMode::LookVectors => self.fly.view_matrix_from_vectors(),
            CameraMode::Quaternion => self.fly.view_matrix_from_quaternion(),
            CameraMode::ThirdPerson => self.third_person.view_matrix(),
        }
    }

    /// Perspective projection using the active camera's zoom as the
    /// vertical field of view.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_fov(
            self.active().zoom(),
            self.projection.aspect,
            self.projection.znear,
            self.projection.zfar,
        )
    }

    /// Eye position of the active camera.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.active().position()
    }

    /// Refresh and return the uniform block for this frame.
    pub fn uniform(&mut self) -> &CameraUniform {
        let view = self.view_matrix();
        let projection = self.projection_matrix();
        let position = self.position();
        let zoom = self.active().zoom();
        self.uniform.update(&view, &projection, position, zoom);
        log::trace!("{:?} view {:?}", self.mode, view.to_cols_array());
        &self.uniform
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_options(Vec3::ZERO, Vec3::ZERO, &Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycles_through_all_three() {
        let mut mode = CameraMode::default();
        for expected in CameraMode::ALL {
            assert_eq!(mode, expected);
            mode = mode.next();
        }
        assert_eq!(mode, CameraMode::LookVectors);
    }

    #[test]
    fn view_matrix_dispatches_per_mode() {
        let mut rig = CameraRig::default();
        rig.execute(CameraCommand::Look { dx: 40.0, dy: 20.0 });

        assert_eq!(rig.view_matrix(), rig.fly.view_matrix_from_vectors());

        rig.execute(CameraCommand::CycleMode);
        assert_eq!(rig.mode(), CameraMode::Quaternion);
        assert_eq!(rig.view_matrix(), rig.fly.view_matrix_from_quaternion());

        rig.execute(CameraCommand::CycleMode);
        assert_eq!(rig.mode(), CameraMode::ThirdPerson);
        let expected = rig.third_person.view_matrix();
        assert_eq!(rig.view_matrix(), expected);
    }

    #[test]
    fn input_reaches_only_the_active_camera() {
        let mut rig = CameraRig::default();
        rig.execute(CameraCommand::Move {
            direction: MoveDirection::Forward,
            dt: 1.0,
        });
        let fly_position = rig.fly.position;
        assert!((fly_position.z + 2.5).abs() < 1e-5);

        rig.execute(CameraCommand::SetMode(CameraMode::ThirdPerson));
        rig.execute(CameraCommand::Look { dx: 0.0, dy: 200.0 });
        assert_eq!(rig.fly.position, fly_position);
        assert_eq!(rig.fly.pitch(), 0.0);
        assert_eq!(rig.third_person.pitch(), 20.0);
    }

    #[test]
    fn zoom_drives_projection_fov() {
        let mut rig = CameraRig::default();
        rig.execute(CameraCommand::Zoom { delta: 15.0 });
        assert_eq!(rig.active().zoom(), 30.0);

        let expected = Mat4::perspective_fov(30.0, 16.0 / 9.0, 0.1, 10_000.0);
        assert_eq!(rig.projection_matrix(), expected);

        rig.set_aspect(800, 800);
        assert_eq!(rig.projection().aspect, 1.0);
    }

    #[test]
    fn uniform_reflects_active_camera() {
        let mut rig = CameraRig::from_options(
            Vec3::new(0.0, 140.0, 340.5),
            Vec3::ZERO,
            &Options::default(),
        );
        let view = rig.view_matrix();
        let uniform = *rig.uniform();
        assert_eq!(uniform.view[3], view.col(3).to_array());
        assert_eq!(uniform.view_position, [0.0, 140.0, 340.5]);
        assert_eq!(uniform.zoom, 45.0);

        rig.execute_all([
            CameraCommand::SetMode(CameraMode::ThirdPerson),
            CameraCommand::Look { dx: 0.0, dy: 0.0 },
        ]);
        let uniform = *rig.uniform();
        let orbit_position = rig.third_person.position().to_array();
        assert_eq!(uniform.view_position, orbit_position);
    }
}
