use glam::{Mat4, Vec3};

/// Translate/rotate/scale components of a model transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotate: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            rotate: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translate: Vec3) -> Self {
        Self {
            translate,
            ..Self::default()
        }
    }

    /// Composes `T * Rz * Ry * Rx * S` into a column-major matrix.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from_rotation_z(self.rotate.z)
            * Mat4::from_rotation_y(self.rotate.y)
            * Mat4::from_rotation_x(self.rotate.x)
            * Mat4::from_scale(self.scale)
    }
}

/// Writes the composed transform into caller-provided storage, overwriting it
/// fully.
pub fn build_transform(dst: &mut Mat4, transform: &Transform) {
    *dst = transform.to_matrix();
}
