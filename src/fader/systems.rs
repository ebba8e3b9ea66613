use bevy::prelude::*;

use super::FadeConfig;
use super::entities::{ScreenBlack, ScreenFade};
use crate::flycam::FlyCam;

/// Handle of the overlay quad's material, so the alpha write is a direct
/// asset lookup rather than a per-frame query.
#[derive(Resource)]
pub struct OverlayMaterial(pub Handle<StandardMaterial>);

/// Spawns the overlay quad as a child of the camera, just past the near
/// plane, fully transparent.
pub fn spawn_overlay(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<FadeConfig>,
    camera: Query<Entity, With<FlyCam>>,
) {
    let Ok(camera) = camera.single() else {
        warn!("no camera to attach the fade overlay to");
        return;
    };

    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.0, 0.0, 0.0),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        ..default()
    });

    let overlay = commands
        .spawn((
            Name::new("FadeOverlay"),
            Mesh3d(meshes.add(Rectangle::new(cfg.overlay_size, cfg.overlay_size))),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, 0.0, -cfg.overlay_offset),
        ))
        .id();
    commands.entity(camera).add_child(overlay);
    commands.insert_resource(OverlayMaterial(material));
}

/// Ticks the fade with unscaled time and announces the black edge.
pub fn advance_fade(
    time: Res<Time<Real>>,
    mut fade: ResMut<ScreenFade>,
    mut black: MessageWriter<ScreenBlack>,
) {
    if fade.advance(time.delta_secs()) {
        black.write(ScreenBlack);
    }
}

/// Writes the current alpha into the overlay quad's material.
pub fn apply_overlay_alpha(
    fade: Res<ScreenFade>,
    overlay: Option<Res<OverlayMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(overlay) = overlay else { return };
    if let Some(material) = materials.get_mut(&overlay.0) {
        material.base_color = Color::srgba(0.0, 0.0, 0.0, fade.alpha());
    }
}

/// Trace subscriber for the black edge; other readers register their own.
pub fn log_screen_black(mut black: MessageReader<ScreenBlack>) {
    for _ in black.read() {
        debug!("screen fully black");
    }
}
