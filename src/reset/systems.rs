use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::ResetConfig;
use super::entities::{ResetSequence, ResetStep};
use crate::fader::ScreenFade;
use crate::flycam::{CameraRig, FlyCam, HomePose};
use crate::mover::Mover;

/// Everything the reset driver touches besides the camera entity itself,
/// grouped to keep the system signature flat.
#[derive(SystemParam)]
pub struct ResetCtx<'w> {
    /// Unscaled clock; the waits are real-time, independent of simulation
    /// speed.
    pub time: Res<'w, Time<Real>>,
    /// Keyboard state, for the reset key.
    pub keys: Res<'w, ButtonInput<KeyCode>>,
    /// Reset tunables.
    pub cfg: Res<'w, ResetConfig>,
    /// The phase machine.
    pub seq: ResMut<'w, ResetSequence>,
    /// Fade commands for the cover and clear halves.
    pub fade: ResMut<'w, ScreenFade>,
    /// Rig to re-seed on teleport so movement resumes from home.
    pub rig: ResMut<'w, CameraRig>,
    /// Teleport target, captured at camera spawn.
    pub home: Option<Res<'w, HomePose>>,
}

/// Listens for the reset key, advances the sequence, and performs the
/// teleport between the two waits.
pub fn drive_reset(
    mut ctx: ResetCtx,
    mut query: Query<(&mut Transform, &mut Mover), With<FlyCam>>,
) {
    if ctx.keys.just_pressed(ctx.cfg.reset_key) && ctx.seq.request() {
        info!("reset requested, covering screen");
        ctx.fade.fade_to_black(ctx.cfg.fade_duration);
    }

    match ctx.seq.advance(ctx.time.delta_secs(), ctx.cfg.fade_duration) {
        Some(ResetStep::Teleport) => {
            let Some(home) = &ctx.home else {
                warn!("no home pose captured, skipping teleport");
                ctx.fade.fade_to_clear(ctx.cfg.fade_duration);
                return;
            };
            let Ok((mut transform, mut mover)) = query.single_mut() else {
                warn!("no camera to teleport");
                ctx.fade.fade_to_clear(ctx.cfg.fade_duration);
                return;
            };

            // Collision response off strictly around the snap, so the jump
            // cannot register as a collision.
            mover.set_enabled(false);
            transform.translation = home.position;
            transform.rotation = home.rotation;
            ctx.rig.snap_to(home);
            mover.set_enabled(true);

            ctx.fade.fade_to_clear(ctx.cfg.fade_duration);
        }
        Some(ResetStep::Finished) => {
            debug!("reset sequence finished");
        }
        None => {}
    }
}
