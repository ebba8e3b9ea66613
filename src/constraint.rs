//! Pin selected position axes of one entity to another's.
//!
//! The one-way analogue of parenting: a pinned entity copies only the
//! flagged world-position axes of its target each frame and keeps the rest
//! of its own transform.

use bevy::prelude::*;

use crate::math;
use crate::mover;

/// Follows the flagged position axes of `target`, leaving the other axes
/// and all rotation/scale untouched.
#[derive(Component, Reflect)]
pub struct PinnedTo {
    /// Entity whose position is followed.
    pub target: Entity,
    /// Which axes to copy.
    pub axes: BVec3,
}

/// Constraint plugin: applies pins after all motion for the frame.
pub struct ConstraintPlugin;

impl Plugin for ConstraintPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PinnedTo>()
            .add_systems(Update, apply_pins.after(mover::apply_motion));
    }
}

/// Copies each pin target's flagged translation axes onto the holder.
/// Targets carrying their own `PinnedTo` are excluded, which also rules
/// out pin cycles.
pub fn apply_pins(
    targets: Query<&Transform, Without<PinnedTo>>,
    mut pinned: Query<(&PinnedTo, &mut Transform)>,
) {
    for (pin, mut transform) in &mut pinned {
        let Ok(target) = targets.get(pin.target) else {
            continue;
        };
        transform.translation = math::pin_axes(transform.translation, target.translation, pin.axes);
    }
}
