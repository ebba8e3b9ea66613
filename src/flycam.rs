//! First-person fly camera.
//!
//! Mouse look with clamped pitch, WASD movement always parallel to the XZ
//! plane, Shift boost, scroll / Q / E height control. Input advances a
//! target position; the camera eases after it and hands the resulting delta
//! to the collision [`Mover`](crate::mover::Mover) rather than writing the
//! transform itself. The spawn pose is captured once as [`HomePose`], the
//! teleport target of the reset sequence.

mod entities;
pub(crate) mod systems;

pub use entities::{CameraRig, FlyCam, HomePose};

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for the fly camera.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FlycamConfig {
    /// Movement speed in world-units per second.
    pub move_speed: f32,
    /// Multiplier applied to movement and climb speed while Shift is held.
    pub boost_multiplier: f32,
    /// Speed at which the camera reaches its target position
    /// (lower = floatier).
    pub catchup_speed: f32,
    /// Vertical speed for Q/E and scroll height changes.
    pub climb_speed: f32,
    /// Extra scale on scroll-wheel height input, per line.
    pub scroll_sensitivity: f32,
    /// Horizontal mouse sensitivity (radians per pixel).
    pub mouse_sensitivity_x: f32,
    /// Vertical mouse sensitivity (radians per pixel).
    pub mouse_sensitivity_y: f32,
    /// Lowest allowed pitch (degrees, negative = looking down).
    pub min_pitch_deg: f32,
    /// Highest allowed pitch (degrees).
    pub max_pitch_deg: f32,
    /// Camera spawn position; also the home pose the reset returns to.
    pub spawn_position: Vec3,
    /// Point the camera faces at spawn.
    pub spawn_look_at: Vec3,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
}

impl Default for FlycamConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            boost_multiplier: 3.0,
            catchup_speed: 10.0,
            climb_speed: 6.0,
            scroll_sensitivity: 12.0,
            mouse_sensitivity_x: 0.003,
            mouse_sensitivity_y: 0.002,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
            spawn_position: Vec3::new(0.0, 6.0, 22.0),
            spawn_look_at: Vec3::new(0.0, 3.0, 0.0),
            bloom_intensity: 0.3,
        }
    }
}

/// Fly-camera plugin: spawns the camera, hides the cursor, and runs the
/// per-frame flight system while the game is in [`GameState::Running`].
pub struct FlycamPlugin(pub FlycamConfig);

impl Plugin for FlycamPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FlyCam>()
            .register_type::<FlycamConfig>()
            .register_type::<CameraRig>()
            .register_type::<HomePose>()
            .insert_resource(self.0.clone())
            .init_resource::<CameraRig>()
            .add_systems(Startup, (systems::spawn_flycam, systems::grab_cursor))
            .add_systems(
                Update,
                systems::fly.run_if(in_state(GameState::Running)),
            );
    }
}
