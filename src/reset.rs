//! Fade-covered camera reset.
//!
//! Pressing the reset key fades the screen to black, teleports the camera
//! back to its spawn pose while collision response is off, then fades back
//! to clear. Two fixed real-time waits bracket the teleport, each as long
//! as one fade half, so the screen is always covered when the camera moves.
//! The sequence is an explicit phase machine advanced once per frame; it
//! never blocks the frame loop, and a request while one is in flight is
//! ignored.

mod entities;
pub(crate) mod systems;

#[allow(unused_imports)]
pub use entities::{ResetSequence, ResetStep};

use bevy::prelude::*;

use crate::flycam;

/// Per-plugin configuration for the reset sequence.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ResetConfig {
    /// Duration of each fade half (seconds); also the length of each of
    /// the two waits around the teleport.
    pub fade_duration: f32,
    /// Key that triggers the sequence.
    pub reset_key: KeyCode,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            fade_duration: 0.5,
            reset_key: KeyCode::KeyF,
        }
    }
}

/// Reset plugin: listens for the reset key and drives the cover → teleport
/// → clear script.
pub struct ResetPlugin(pub ResetConfig);

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ResetConfig>()
            .register_type::<ResetSequence>()
            .insert_resource(self.0.clone())
            .init_resource::<ResetSequence>()
            // The teleport must land between flight input and the motion
            // apply, so a frame never mixes pre- and post-teleport state.
            .add_systems(Update, systems::drive_reset.after(flycam::systems::fly));
    }
}
