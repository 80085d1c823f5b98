//! Scene-view camera control.
//!
//! Provides the host-facing pose and viewport seam, plus the operator that
//! turns classified gestures into rotate, pan and zoom.

/// Camera-local coordinate frame.
pub mod frame;
/// Gesture-driven rotate, pan and zoom.
pub mod operator;
/// Host-owned pose and the viewport seam.
pub mod pose;

pub use frame::CameraFrame;
pub use operator::CameraOperator;
pub use pose::{CameraPose, Viewport, ViewportHost};
