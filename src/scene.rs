//! Demo world: a ground plane and a noise-driven pillar field.
//!
//! Pillar heights come from fractal Perlin noise sampled on a square grid;
//! every pillar also registers an axis-aligned collider for the
//! [`mover`](crate::mover). A large sky disc is pinned to the camera's X/Z
//! so the horizon follows the player around.

use bevy::prelude::*;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::constraint::PinnedTo;
use crate::flycam::{self, FlyCam};
use crate::math;
use crate::mover::BoxCollider;

/// Per-plugin configuration for the generated scene.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SceneConfig {
    /// Half the side length of the pillar field (world units).
    pub half_extent: f32,
    /// Grid spacing between pillar candidates.
    pub cell_spacing: f32,
    /// Seed for the pillar-height noise generator.
    pub pillar_noise_seed: u32,
    /// Number of octaves for the pillar-height noise.
    pub pillar_noise_octaves: usize,
    /// Spatial scale divisor for noise sampling.
    pub pillar_noise_scale: f64,
    /// Tallest pillar produced by the noise function.
    pub max_pillar_height: f32,
    /// Cells whose sampled height falls below this stay empty.
    pub min_pillar_height: f32,
    /// Side length of each pillar.
    pub pillar_width: f32,
    /// No pillars are placed within this radius of the origin, keeping the
    /// spawn area open.
    pub clearing_radius: f32,
    /// Radius of the body the mover collides as.
    pub body_radius: f32,
    /// Height of the pinned sky disc above the ground.
    pub sky_height: f32,
    /// Radius of the sky disc.
    pub sky_radius: f32,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            half_extent: 60.0,
            cell_spacing: 6.0,
            pillar_noise_seed: 42,
            pillar_noise_octaves: 4,
            pillar_noise_scale: 40.0,
            max_pillar_height: 12.0,
            min_pillar_height: 2.0,
            pillar_width: 2.4,
            clearing_radius: 8.0,
            body_radius: 0.6,
            sky_height: 45.0,
            sky_radius: 160.0,
            clear_color: Color::srgb(0.01, 0.01, 0.02),
        }
    }
}

/// Colliders the mover resolves motion against: the pillar boxes plus the
/// ground plane.
#[derive(Resource)]
pub struct SceneColliders {
    /// One box per spawned pillar.
    pub boxes: Vec<BoxCollider>,
    /// Y of the walkable floor.
    pub floor_y: f32,
    /// Radius of the moving body.
    pub body_radius: f32,
}

/// Scene plugin: generates the pillar field and lights at startup.
pub struct ScenePlugin(pub SceneConfig);

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(
                Startup,
                spawn_scene.after(flycam::systems::spawn_flycam),
            );
    }
}

/// Spawns ground, pillars, lights, and the camera-pinned sky disc, and
/// registers the collider set.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<SceneConfig>,
    camera: Query<Entity, With<FlyCam>>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.05, 0.06, 0.08),
        perceptual_roughness: 0.95,
        ..default()
    });
    let pillar_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.08, 0.12, 0.18),
        emissive: LinearRgba::rgb(0.0, 0.15, 0.4),
        perceptual_roughness: 0.6,
        ..default()
    });

    let side = cfg.half_extent * 2.0;
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(side, side))),
        MeshMaterial3d(ground_material),
        Transform::IDENTITY,
    ));

    // Unit cube scaled per pillar, so one mesh serves the whole field.
    let pillar_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let fbm: Fbm<Perlin> =
        Fbm::new(cfg.pillar_noise_seed).set_octaves(cfg.pillar_noise_octaves);

    let mut boxes = Vec::new();
    let half_width = cfg.pillar_width / 2.0;
    let cells = (cfg.half_extent * 2.0 / cfg.cell_spacing) as i32;

    for ix in 0..=cells {
        for iz in 0..=cells {
            let x = -cfg.half_extent + ix as f32 * cfg.cell_spacing;
            let z = -cfg.half_extent + iz as f32 * cfg.cell_spacing;
            if (x * x + z * z).sqrt() < cfg.clearing_radius {
                continue;
            }

            let noise_val = fbm.get([
                x as f64 / cfg.pillar_noise_scale,
                z as f64 / cfg.pillar_noise_scale,
            ]);
            let height = math::map_noise_to_range(noise_val, 0.0, cfg.max_pillar_height);
            if height < cfg.min_pillar_height {
                continue;
            }

            commands.spawn((
                Name::new(format!("Pillar({ix},{iz})")),
                Mesh3d(pillar_mesh.clone()),
                MeshMaterial3d(pillar_material.clone()),
                Transform::from_xyz(x, height / 2.0, z)
                    .with_scale(Vec3::new(cfg.pillar_width, height, cfg.pillar_width)),
            ));
            boxes.push(BoxCollider {
                min: Vec3::new(x - half_width, 0.0, z - half_width),
                max: Vec3::new(x + half_width, height, z + half_width),
            });
        }
    }

    info!("scene generated: {} pillars", boxes.len());
    commands.insert_resource(SceneColliders {
        boxes,
        floor_y: 0.0,
        body_radius: cfg.body_radius,
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.4, 0.5, 0.8),
        brightness: 120.0,
        ..default()
    });

    // Sky disc overhead, following the camera horizontally but never
    // vertically.
    if let Ok(camera) = camera.single() {
        commands.spawn((
            Name::new("SkyDisc"),
            Mesh3d(meshes.add(Circle::new(cfg.sky_radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.02, 0.03, 0.07),
                emissive: LinearRgba::rgb(0.01, 0.02, 0.06),
                unlit: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_xyz(0.0, cfg.sky_height, 0.0)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            PinnedTo {
                target: camera,
                axes: BVec3::new(true, false, true),
            },
        ));
    }
}
