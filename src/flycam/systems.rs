use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseScrollUnit;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;
use bevy::window::{CursorGrabMode, CursorOptions};

use super::FlycamConfig;
use super::entities::{CameraRig, FlyCam, FlyInput, HomePose};
use crate::math;
use crate::mover::Mover;

/// Spawns the Camera3d entity with HDR and bloom, captures the home pose,
/// and seeds the rig from the spawn transform.
pub fn spawn_flycam(mut commands: Commands, cfg: Res<FlycamConfig>, mut rig: ResMut<CameraRig>) {
    let transform =
        Transform::from_translation(cfg.spawn_position).looking_at(cfg.spawn_look_at, Vec3::Y);

    commands.spawn((
        Name::new("FlyCam"),
        FlyCam,
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cfg.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        transform,
        Mover::default(),
    ));

    let home = HomePose {
        position: transform.translation,
        rotation: transform.rotation,
    };
    rig.snap_to(&home);
    commands.insert_resource(home);

    info!("flycam spawned at {}", cfg.spawn_position);
}

/// Mouse look + WASD + boost + height control. Rotation goes straight to
/// the transform; translation moves the rig target and hands the catch-up
/// step to the [`Mover`], which is the only writer of camera position.
pub fn fly(mut input: FlyInput, mut query: Query<(&mut Transform, &mut Mover), With<FlyCam>>) {
    let Ok((mut transform, mut mover)) = query.single_mut() else {
        return;
    };
    let dt = input.time.delta_secs();

    // Mouse look: yaw free, pitch clamped so the camera cannot flip.
    let mut yaw_delta = 0.0;
    let mut pitch_delta = 0.0;
    for ev in input.mouse_motion.read() {
        yaw_delta -= ev.delta.x * input.cfg.mouse_sensitivity_x;
        pitch_delta -= ev.delta.y * input.cfg.mouse_sensitivity_y;
    }
    if yaw_delta != 0.0 || pitch_delta != 0.0 {
        input.rig.yaw += yaw_delta;
        input.rig.pitch = math::clamp_pitch(
            input.rig.pitch,
            pitch_delta,
            input.cfg.min_pitch_deg.to_radians(),
            input.cfg.max_pitch_deg.to_radians(),
        );
        transform.rotation = Quat::from_euler(EulerRot::YXZ, input.rig.yaw, input.rig.pitch, 0.0);
    }

    // Boost affects both movement and climbing.
    let boost = if input.keys.pressed(KeyCode::ShiftLeft)
        || input.keys.pressed(KeyCode::ShiftRight)
    {
        input.cfg.boost_multiplier
    } else {
        1.0
    };
    let move_speed = input.cfg.move_speed * boost;
    let climb_speed = input.cfg.climb_speed * boost;

    // Movement follows the heading projected onto the XZ plane, so looking
    // up or down never tilts the flight path.
    let forward_xz = math::flatten_to_xz(*transform.forward());
    let right_xz = math::flatten_to_xz(*transform.right());

    let mut velocity = Vec3::ZERO;
    if input.keys.pressed(KeyCode::KeyW) {
        velocity += forward_xz * move_speed * dt;
    }
    if input.keys.pressed(KeyCode::KeyS) {
        velocity -= forward_xz * move_speed * dt;
    }
    if input.keys.pressed(KeyCode::KeyD) {
        velocity += right_xz * move_speed * dt;
    }
    if input.keys.pressed(KeyCode::KeyA) {
        velocity -= right_xz * move_speed * dt;
    }

    // Height: E/Equals up, Q/Minus down, plus scroll wheel.
    if input.keys.pressed(KeyCode::KeyE) || input.keys.pressed(KeyCode::Equal) {
        velocity.y += climb_speed * dt;
    }
    if input.keys.pressed(KeyCode::KeyQ) || input.keys.pressed(KeyCode::Minus) {
        velocity.y -= climb_speed * dt;
    }
    for ev in input.scroll.read() {
        let lines = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
        velocity.y += lines * input.cfg.scroll_sensitivity * climb_speed * dt;
    }

    // Input moves the target; the camera eases after it and the mover gets
    // the step, so collisions stay in one place.
    input.rig.target += velocity;
    let next = transform
        .translation
        .lerp(input.rig.target, math::catchup_t(dt, input.cfg.catchup_speed));
    mover.move_by(next - transform.translation);
}

/// Hides and locks the cursor for mouse look.
pub fn grab_cursor(mut cursor_q: Query<&mut CursorOptions>) {
    for mut opts in &mut cursor_q {
        opts.visible = false;
        opts.grab_mode = CursorGrabMode::Locked;
    }
}
