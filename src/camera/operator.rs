use glam::{EulerRot, Quat, Vec2, Vec3};

use super::frame::CameraFrame;
use super::pose::{CameraPose, ViewportHost};
use crate::gesture::{self, CameraAction, Inversion};
use crate::input::{EventKind, InputSnapshot};
use crate::settings::Settings;

/// Applies rotate, pan and zoom to a host camera according to the bindings
/// and sensitivities in its [`Settings`].
///
/// The operator is stateless between events apart from the settings it
/// owns. At most one transform fires per event, picked in fixed priority:
/// rotate, then pan, then zoom. In 2D mode rotation is disabled and the
/// rotate gesture pans instead.
#[derive(Debug, Clone, Default)]
pub struct CameraOperator {
    settings: Settings,
}

impl CameraOperator {
    /// Operator driven by `settings`.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings, for the settings panel and reloads.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Consume the operator, returning its settings.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Handle one input event.
    ///
    /// Returns `true` if the event was consumed, which is the case for every
    /// scroll and pointer-move event whether or not a transform fired; the
    /// host should then skip its native handling.
    pub fn on_input_event<H: ViewportHost + ?Sized>(
        &self,
        snapshot: &InputSnapshot,
        host: &mut H,
    ) -> bool {
        let _ = self.dispatch(snapshot, host);
        snapshot.is_camera_motion()
    }

    /// Classify the event and apply the matching transform, returning which
    /// action fired.
    pub fn dispatch<H: ViewportHost + ?Sized>(
        &self,
        snapshot: &InputSnapshot,
        host: &mut H,
    ) -> Option<CameraAction> {
        let live = gesture::classify(snapshot)?;
        let delta = self.scaled_delta(snapshot);
        let in_2d = host.in_2d_mode();
        let pose = host.camera_pose_mut();
        let bindings = &self.settings.bindings;

        let action = if !in_2d && bindings.rotate.matches(&live) {
            self.rotate(pose, delta, bindings.rotate.invert);
            Some(CameraAction::Rotate)
        } else if bindings.pan.matches(&live)
            || (in_2d && bindings.rotate.matches(&live))
        {
            self.pan(pose, delta, bindings.pan.invert);
            Some(CameraAction::Pan)
        } else if bindings.zoom.matches(&live) {
            self.zoom(pose, delta, bindings.zoom.invert);
            Some(CameraAction::Zoom)
        } else {
            None
        };

        log::trace!("gesture [{live}] delta {delta} -> {action:?}");
        action
    }

    /// Raw delta scaled for its axis: scroll passes through, pointer motion
    /// is damped by the pointer multiplier, and both take the global speed.
    #[must_use]
    pub fn scaled_delta(&self, snapshot: &InputSnapshot) -> Vec2 {
        let speed = &self.settings.speed;
        let axis_multiplier = match snapshot.kind {
            EventKind::PointerMove => speed.pointer_multiplier,
            EventKind::Scroll | EventKind::Other => 1.0,
        };
        snapshot.delta * axis_multiplier * speed.global_cursor_speed
    }

    /// Orbit: yaw about world up, then pitch about the yawed local X axis.
    ///
    /// Composing in this order keeps the horizon level; roll never
    /// accumulates.
    pub fn rotate(
        &self,
        pose: &mut CameraPose,
        delta: Vec2,
        invert: Inversion,
    ) {
        let degrees_per_unit = self.settings.speed.rotate_speed;
        let rotate_y = delta.x * invert.sign_x();
        let rotate_x = delta.y * invert.sign_y();

        let (yaw, pitch, roll) = pose.rotation.to_euler(EulerRot::YXZ);
        let yawed = Quat::from_euler(
            EulerRot::YXZ,
            yaw + (rotate_y * degrees_per_unit).to_radians(),
            pitch,
            roll,
        );
        let pitch_step =
            Quat::from_rotation_x((rotate_x * degrees_per_unit).to_radians());
        pose.rotation = (yawed * pitch_step).normalize();
    }

    /// Translate the pivot in the camera's view plane.
    ///
    /// Distance scales with `size` so pan speed looks the same at every zoom
    /// level. `invert.y` applies to Y exactly as `invert.x` applies to X.
    pub fn pan(&self, pose: &mut CameraPose, delta: Vec2, invert: Inversion) {
        let speed = self.settings.speed.pan_speed;
        let local = Vec3::new(
            delta.x * invert.sign_x() * speed,
            delta.y * invert.sign_y() * speed,
            0.0,
        ) * pose.size;
        pose.pivot += CameraFrame::from_pose(pose).transform_vector(local);
    }

    /// Multiplicative zoom driven by the Y delta.
    ///
    /// The scaled delta is clamped to `±max_delta` and normalized into
    /// `[-1, 1]`; the size changes by at most `ratio` of itself per event and
    /// stays within `[min, max]`. Only `invert.y` is used.
    pub fn zoom(&self, pose: &mut CameraPose, delta: Vec2, invert: Inversion) {
        let zoom = &self.settings.zoom;
        if zoom.max_delta.is_nan() || zoom.max_delta <= 0.0 {
            return;
        }
        let zoom_delta = (delta.y * zoom.speed * invert.sign_y())
            .clamp(-zoom.max_delta, zoom.max_delta)
            / zoom.max_delta;
        let next_ratio = zoom_delta * zoom.ratio + 1.0;
        pose.size = (pose.size * next_ratio).max(zoom.min).min(zoom.max);
    }
}
