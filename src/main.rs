#![warn(missing_docs)]
//! First-person exploration tool.
//!
//! A collision-aware fly camera roams a noise-generated pillar field.
//! Pressing F plays a fade-covered reset: the screen fades to black, the
//! camera snaps back to its spawn pose, and the screen fades back in.

mod constraint;
mod fader;
mod flycam;
pub mod math;
mod mover;
mod reset;
mod scene;

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy::window::{CursorGrabMode, CursorOptions};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
#[cfg(feature = "native")]
use clap::Parser;

/// Application-wide game state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal flight.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle); flight input suspended.
    Debugging,
}

/// Command-line overrides for the most commonly tuned settings.
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(version, about = "First-person exploration camera")]
struct Cli {
    /// Movement speed in world-units per second.
    #[arg(long)]
    move_speed: Option<f32>,
    /// Duration of each half of the reset fade, in seconds.
    #[arg(long)]
    fade_duration: Option<f32>,
    /// Seed for the pillar-field noise.
    #[arg(long)]
    seed: Option<u32>,
}

/// Plugin configs with any command-line overrides applied.
#[cfg(feature = "native")]
fn load_configs() -> (flycam::FlycamConfig, reset::ResetConfig, scene::SceneConfig) {
    let mut flycam_cfg = flycam::FlycamConfig::default();
    let mut reset_cfg = reset::ResetConfig::default();
    let mut scene_cfg = scene::SceneConfig::default();

    let cli = Cli::parse();
    if let Some(v) = cli.move_speed {
        flycam_cfg.move_speed = v;
    }
    if let Some(v) = cli.fade_duration {
        reset_cfg.fade_duration = v;
    }
    if let Some(v) = cli.seed {
        scene_cfg.pillar_noise_seed = v;
    }
    (flycam_cfg, reset_cfg, scene_cfg)
}

/// No command line on web; plain defaults.
#[cfg(not(feature = "native"))]
fn load_configs() -> (flycam::FlycamConfig, reset::ResetConfig, scene::SceneConfig) {
    (
        flycam::FlycamConfig::default(),
        reset::ResetConfig::default(),
        scene::SceneConfig::default(),
    )
}

fn main() {
    let (flycam_cfg, reset_cfg, scene_cfg) = load_configs();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Free Roam".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(flycam::FlycamPlugin(flycam_cfg))
    .add_plugins(scene::ScenePlugin(scene_cfg))
    .add_plugins(fader::FadePlugin(fader::FadeConfig::default()))
    .add_plugins(reset::ResetPlugin(reset_cfg))
    .add_plugins(mover::MoverPlugin)
    .add_plugins(constraint::ConstraintPlugin)
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
    mut windows: Query<(&mut CursorOptions, &mut Window)>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        let entering_debug = new_state == GameState::Debugging;
        next.set(new_state);
        for (mut opts, mut window) in &mut windows {
            if entering_debug {
                opts.visible = true;
                opts.grab_mode = CursorGrabMode::None;
            } else {
                opts.visible = false;
                opts.grab_mode = CursorGrabMode::Locked;
                let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
                window.set_cursor_position(Some(center));
            }
        }
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
