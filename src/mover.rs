//! Minimal collision-aware movement primitive.
//!
//! The mover is the only writer of camera position: other systems request
//! motion with [`Mover::move_by`], and once per frame the pending delta is
//! resolved against the scene's colliders (axis-separated slide against
//! pillar boxes, plus a floor clamp) and the survivor is applied to the
//! transform. Disabling the mover discards queued motion and opens the
//! window in which the reset teleport writes the transform directly.

use bevy::prelude::*;

use crate::reset;
use crate::scene::SceneColliders;

/// Axis-aligned box obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoxCollider {
    /// Whether `point` is strictly inside the box grown by `radius` on
    /// every side. The growth stands in for the moving body's extent.
    pub fn contains_inflated(&self, point: Vec3, radius: f32) -> bool {
        point.x > self.min.x - radius
            && point.x < self.max.x + radius
            && point.y > self.min.y - radius
            && point.y < self.max.y + radius
            && point.z > self.min.z - radius
            && point.z < self.max.z + radius
    }
}

/// Collision-aware movement component. Queued motion is applied by
/// [`apply_motion`] at the end of the frame's movement pass.
#[derive(Component, Reflect)]
pub struct Mover {
    enabled: bool,
    pending: Vec3,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            enabled: true,
            pending: Vec3::ZERO,
        }
    }
}

impl Mover {
    /// Queues a motion request for this frame. Ignored while disabled.
    pub fn move_by(&mut self, delta: Vec3) {
        if self.enabled {
            self.pending += delta;
        }
    }

    /// Toggles collision response. Disabling also drops any motion already
    /// queued this frame, so a teleport cannot be nudged by stale input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending = Vec3::ZERO;
        }
    }

    /// Whether the mover currently accepts and applies motion.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn take_pending(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending)
    }
}

/// Resolves `delta` from `pos` against `boxes` one axis at a time: an axis
/// step that would put the (inflated) body inside a box is dropped, the
/// others go through, which produces wall sliding. Finally clamps above the
/// floor plane. Returns the new position.
pub fn resolve_motion(
    pos: Vec3,
    delta: Vec3,
    boxes: &[BoxCollider],
    radius: f32,
    floor_y: f32,
) -> Vec3 {
    let mut out = pos;
    for axis in [0usize, 1, 2] {
        let mut candidate = out;
        candidate[axis] += delta[axis];
        if !boxes.iter().any(|b| b.contains_inflated(candidate, radius)) {
            out = candidate;
        }
    }
    if out.y < floor_y + radius {
        out.y = floor_y + radius;
    }
    out
}

/// Movement plugin: applies queued motion after flight input and the reset
/// driver have both run.
pub struct MoverPlugin;

impl Plugin for MoverPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Mover>().add_systems(
            Update,
            apply_motion.after(reset::systems::drive_reset),
        );
    }
}

/// Applies each mover's pending delta, collision-resolved when the scene
/// has registered colliders.
pub fn apply_motion(
    colliders: Option<Res<SceneColliders>>,
    mut query: Query<(&mut Transform, &mut Mover)>,
) {
    for (mut transform, mut mover) in &mut query {
        if !mover.is_enabled() {
            continue;
        }
        let delta = mover.take_pending();
        if delta == Vec3::ZERO {
            continue;
        }
        match &colliders {
            Some(c) => {
                transform.translation =
                    resolve_motion(transform.translation, delta, &c.boxes, c.body_radius, c.floor_y);
            }
            // No collider set registered: move unobstructed.
            None => transform.translation += delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoxCollider {
        BoxCollider {
            min: Vec3::new(-1.0, 0.0, -1.0),
            max: Vec3::new(1.0, 4.0, 1.0),
        }
    }

    // ── BoxCollider ─────────────────────────────────────────────────

    #[test]
    fn inflation_extends_the_hit_volume() {
        let b = unit_box();
        let just_outside = Vec3::new(1.2, 1.0, 0.0);
        assert!(!b.contains_inflated(just_outside, 0.1));
        assert!(b.contains_inflated(just_outside, 0.3));
    }

    // ── resolve_motion ──────────────────────────────────────────────

    #[test]
    fn free_space_motion_is_unchanged() {
        let from = Vec3::new(10.0, 2.0, 10.0);
        let to = resolve_motion(from, Vec3::new(1.0, 0.5, -1.0), &[unit_box()], 0.5, 0.0);
        assert_eq!(to, Vec3::new(11.0, 2.5, 9.0));
    }

    #[test]
    fn blocked_axis_is_dropped_but_others_slide() {
        // Heading diagonally into the box face on +X: the X step is
        // rejected, the Z step survives (wall slide).
        let from = Vec3::new(-2.0, 1.0, 0.0);
        let to = resolve_motion(from, Vec3::new(0.6, 0.0, 0.6), &[unit_box()], 0.5, 0.0);
        assert_eq!(to, Vec3::new(-2.0, 1.0, 0.6));
    }

    #[test]
    fn floor_clamp_keeps_body_above_ground() {
        let from = Vec3::new(5.0, 0.6, 5.0);
        let to = resolve_motion(from, Vec3::new(0.0, -2.0, 0.0), &[], 0.5, 0.0);
        assert_eq!(to.y, 0.5);
    }

    #[test]
    fn no_colliders_means_no_horizontal_blocking() {
        let from = Vec3::ZERO;
        let to = resolve_motion(from, Vec3::new(3.0, 1.0, 3.0), &[], 0.5, 0.0);
        assert_eq!(to, Vec3::new(3.0, 1.0, 3.0));
    }

    // ── Mover ───────────────────────────────────────────────────────

    #[test]
    fn disabling_discards_pending_motion() {
        let mut m = Mover::default();
        m.move_by(Vec3::X);
        m.set_enabled(false);
        assert_eq!(m.take_pending(), Vec3::ZERO);
        // Requests while disabled are ignored too.
        m.move_by(Vec3::Y);
        assert_eq!(m.take_pending(), Vec3::ZERO);
    }

    #[test]
    fn reenabling_accepts_motion_again() {
        let mut m = Mover::default();
        m.set_enabled(false);
        m.set_enabled(true);
        m.move_by(Vec3::X);
        m.move_by(Vec3::Y);
        assert_eq!(m.take_pending(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(m.take_pending(), Vec3::ZERO, "taking drains the queue");
    }
}
