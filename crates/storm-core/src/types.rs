//! Render-facing value types

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid transform with position and quaternion orientation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Identity orientation rotated about `axis` (world space) by `angle` radians.
    /// `axis` must be normalized.
    pub fn with_axis_angle(self, axis: Vec3, angle: f32) -> Self {
        self.with_rotation(Quat::from_axis_angle(axis, angle))
    }

    /// Convert to a 4x4 transformation matrix (column-major)
    pub fn to_matrix(&self) -> [[f32; 4]; 4] {
        Mat4::from_rotation_translation(self.rotation, self.position).to_cols_array_2d()
    }
}

/// Linear RGB color, channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with every channel set to `level`
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn test_matrix_translation_column() {
        let t = Transform::from_position(Vec3::new(3.0, -50.0, 7.0))
            .with_axis_angle(Vec3::Y, 1.2);
        let m = t.to_matrix();
        assert_eq!(m[3], [3.0, -50.0, 7.0, 1.0]);
    }

    #[test]
    fn test_axis_angle_keeps_axis_fixed() {
        let axis = Vec3::new(1.0, 2.0, -0.5).normalize();
        let t = Transform::IDENTITY.with_axis_angle(axis, 2.5);
        let rotated = t.rotation * axis;
        assert!((rotated - axis).length() < 1e-5);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0x003141);
        assert!(c.r.abs() < 0.01);
        assert!((c.g - 0.192).abs() < 0.01);
        assert!((c.b - 0.255).abs() < 0.01);
    }

    #[test]
    fn test_gray() {
        assert_eq!(Color::gray(0.5).to_array(), [0.5, 0.5, 0.5]);
    }
}
