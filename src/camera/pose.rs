use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera pose owned by the viewport host.
///
/// The operator only ever touches these three fields; projection, clipping
/// and the rest of the camera stay with the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// World-space focus point the camera orbits.
    pub pivot: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
    /// Zoom size: orbit distance, or half-height for orthographic views.
    pub size: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            pivot: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            size: 10.0,
        }
    }
}

impl CameraPose {
    /// Direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Camera position for a perspective view orbiting the pivot at `size`.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.pivot - self.forward() * self.size
    }
}

/// The viewport a camera operator drives.
///
/// Implemented by the host; the operator reads the display mode and mutates
/// the pose, nothing else.
pub trait ViewportHost {
    /// Mutable access to the host-owned camera pose.
    fn camera_pose_mut(&mut self) -> &mut CameraPose;
    /// Whether the viewport is in 2D display mode (rotation disabled).
    fn in_2d_mode(&self) -> bool;
}

/// Plain [`ViewportHost`] for hosts without their own viewport type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Current camera pose.
    pub pose: CameraPose,
    /// 2D display mode flag.
    pub in_2d_mode: bool,
}

impl ViewportHost for Viewport {
    fn camera_pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    fn in_2d_mode(&self) -> bool {
        self.in_2d_mode
    }
}
