//! Camera-local coordinate frame.
//!
//! A plain value (position + orientation, no scale) rebuilt from the pose
//! whenever a camera-space vector needs converting to world space.

use glam::{Quat, Vec3};

use super::pose::CameraPose;

/// The camera's local axes anchored at its pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Frame origin in world space.
    pub position: Vec3,
    /// Frame orientation.
    pub orientation: Quat,
}

impl CameraFrame {
    /// Frame at the pose's pivot with the pose's rotation.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        Self {
            position: pose.pivot,
            orientation: pose.rotation,
        }
    }

    /// Local direction → world direction. Position does not apply.
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, local: Vec3) -> Vec3 {
        self.orientation * local
    }
}
