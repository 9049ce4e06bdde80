use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{
    DEFAULT_MOUSE_SENSITIVITY, DEFAULT_PITCH, DEFAULT_SPEED, DEFAULT_YAW,
    DEFAULT_ZOOM,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial orientation and tunables shared by both camera types.
pub struct CameraOptions {
    /// Initial yaw in degrees (-90 looks down -Z).
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Keyboard movement in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of look input.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Initial zoom (vertical field of view) in degrees.
    #[schemars(title = "Zoom", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// World up direction.
    #[schemars(skip)]
    pub world_up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            world_up: [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Perspective projection parameters. The field of view comes from the
/// active camera's zoom.
pub struct ProjectionOptions {
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 100.0, max = 20000.0), extend("step" = 100.0))]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Third Person", inline)]
#[serde(default)]
/// Height lock for the third-person orbit camera.
pub struct ThirdPersonOptions {
    /// Force the camera's height to `fixed_height` after every move.
    #[schemars(title = "Lock Height")]
    pub height_lock: bool,
    /// World-space height used while locked.
    #[schemars(title = "Fixed Height", range(min = -500.0, max = 500.0), extend("step" = 1.0))]
    pub fixed_height: f32,
}
