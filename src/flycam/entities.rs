use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use super::FlycamConfig;

/// Marker component for the player-controlled camera entity.
#[derive(Component, Reflect)]
pub struct FlyCam;

/// Where movement is headed: input advances [`Self::target`], the camera
/// lerps after it each frame. Yaw and pitch are tracked here (not re-read
/// from the transform) so the reset teleport can restore them exactly.
#[derive(Resource, Default, Reflect)]
pub struct CameraRig {
    /// Position the camera is easing toward.
    pub target: Vec3,
    /// Heading in radians.
    pub yaw: f32,
    /// Pitch in radians, clamped by the flycam config.
    pub pitch: f32,
}

impl CameraRig {
    /// Re-seeds the rig from a pose, so resumed movement continues from
    /// there instead of snapping back to the pre-teleport target.
    pub fn snap_to(&mut self, pose: &HomePose) {
        self.target = pose.position;
        let (yaw, pitch, _) = pose.rotation.to_euler(EulerRot::YXZ);
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

/// Pose captured once when the camera spawns; immutable thereafter.
/// The reset sequence teleports back to this.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct HomePose {
    /// Spawn translation.
    pub position: Vec3,
    /// Spawn orientation.
    pub rotation: Quat,
}

/// Everything the flight system reads each frame, grouped to keep the
/// system signature flat.
#[derive(SystemParam)]
pub struct FlyInput<'w, 's> {
    /// Unscaled clock; flight is independent of simulation speed.
    pub time: Res<'w, Time<Real>>,
    /// Flycam tunables.
    pub cfg: Res<'w, FlycamConfig>,
    /// Keyboard state.
    pub keys: Res<'w, ButtonInput<KeyCode>>,
    /// Relative mouse motion since last frame.
    pub mouse_motion: MessageReader<'w, 's, MouseMotion>,
    /// Scroll wheel input for height control.
    pub scroll: MessageReader<'w, 's, MouseWheel>,
    /// Shared rig state (target position, yaw, pitch).
    pub rig: ResMut<'w, CameraRig>,
}
