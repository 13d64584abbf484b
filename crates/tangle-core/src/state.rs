//! Camera state shared with the frontends.
//!
//! The camera mirrors the panel's pose fields (position plus XYZ Euler
//! rotation); window resizes only touch `aspect`.

use crate::constants::{CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::params::CameraPose;
use glam::{EulerRot, Mat4, Quat};

/// Right-handed perspective camera with a free pose.
#[derive(Clone, Debug)]
pub struct Camera {
    pub pose: CameraPose,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(pose: CameraPose, aspect: f32) -> Self {
        Self {
            pose,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Inverse of the camera's world transform.
    pub fn view_matrix(&self) -> Mat4 {
        let r = self.pose.rotation;
        let rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        Mat4::from_rotation_translation(rotation, self.pose.position).inverse()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
