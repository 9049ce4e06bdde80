use crate::math::{Mat4, Vec3, Vec4};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view and projection matrices and the eye
/// position used for lighting.
pub struct CameraUniform {
    /// World-to-eye matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub view_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: to_cols_array_2d(&Mat4::IDENTITY),
            projection: to_cols_array_2d(&Mat4::IDENTITY),
            view_position: [0.0; 3],
            zoom: 45.0,
        }
    }

    /// Overwrite every field for the current frame.
    pub fn update(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        position: Vec3,
        zoom: f32,
    ) {
        self.view = to_cols_array_2d(view);
        self.projection = to_cols_array_2d(projection);
        self.view_position = position.to_array();
        self.zoom = zoom;
    }

    /// Raw bytes for a uniform buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn to_cols_array_2d(m: &Mat4) -> [[f32; 4]; 4] {
    m.cols.map(Vec4::to_array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 144);
        assert_eq!(CameraUniform::new().as_bytes().len(), 144);
    }

    #[test]
    fn update_copies_columns_in_order() {
        let view = Mat4::IDENTITY.translate(Vec4::new(1.0, 2.0, 3.0, 1.0));
        let projection = Mat4::perspective_fov(45.0, 1.0, 0.1, 100.0);
        let mut uniform = CameraUniform::default();
        uniform.update(&view, &projection, Vec3::new(4.0, 5.0, 6.0), 30.0);

        assert_eq!(uniform.view[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.projection[2][3], -1.0);
        assert_eq!(uniform.view_position, [4.0, 5.0, 6.0]);
        assert_eq!(uniform.zoom, 30.0);
    }
}
