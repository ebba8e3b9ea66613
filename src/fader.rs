//! Full-screen fade-to-black overlay.
//!
//! A single screen-coverage alpha, owned by the [`ScreenFade`] resource and
//! advanced once per frame from the unscaled clock. Any system can command a
//! fade; a [`ScreenBlack`] message is written on the frame a fade-to-black
//! first reaches full coverage. The overlay itself is a black unlit quad
//! parented to the camera just past the near plane.

mod entities;
pub(crate) mod systems;

#[allow(unused_imports)]
pub use entities::{DEFAULT_FADE_DURATION, ScreenBlack, ScreenFade};

use bevy::prelude::*;

use crate::flycam;

/// Per-plugin configuration for the fade overlay.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FadeConfig {
    /// Distance of the overlay quad in front of the camera (world units).
    /// Must sit past the near plane or the quad is clipped away.
    pub overlay_offset: f32,
    /// Side length of the overlay quad. Generous enough to cover the
    /// frustum at `overlay_offset` for any sane fov/aspect combination.
    pub overlay_size: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            overlay_offset: 0.15,
            overlay_size: 1.0,
        }
    }
}

/// Screen-fade plugin: fade state, the overlay quad, and the systems that
/// advance and paint it.
pub struct FadePlugin(pub FadeConfig);

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FadeConfig>()
            .register_type::<ScreenFade>()
            .insert_resource(self.0.clone())
            .init_resource::<ScreenFade>()
            .add_message::<ScreenBlack>()
            .add_systems(
                Startup,
                systems::spawn_overlay.after(flycam::systems::spawn_flycam),
            )
            // Alpha advances before the overlay reads it, within one frame.
            .add_systems(
                Update,
                (systems::advance_fade, systems::apply_overlay_alpha).chain(),
            )
            .add_systems(Update, systems::log_screen_black);
    }
}
