use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{DeferredAction, Flipper, Orientation, Schedule};
use crate::error::SimError;
use crate::look::LookController;
use crate::resources::{Events, Gravity, Time};
use crate::Config;

/// Decide whether the body should settle upside down.
///
/// `down_dot` is `dot(body_up, DOWN)`. The two checks run in order and overlap
/// on `(0, 0.5)`, where the second wins. NaN leaves `current` untouched.
pub fn resolve_upside_down(down_dot: f32, current: bool) -> bool {
    let mut upside_down = current;
    if down_dot > 0.0 {
        upside_down = false;
    }
    if down_dot < 0.5 {
        upside_down = true;
    }
    upside_down
}

/// True when `up` is parallel or anti-parallel to world up within `epsilon`
pub fn is_axis_aligned(up: Vec3, epsilon: f32) -> bool {
    let d = up.dot(Vec3::Y);
    (d - 1.0).abs() <= epsilon || (d + 1.0).abs() <= epsilon
}

/// Reverse gravity and start rotating `body` toward its new resting orientation
pub fn trigger_flip<L: LookController + ?Sized>(
    world: &mut World,
    body: Entity,
    gravity: &mut Gravity,
    time: &Time,
    config: &Config,
    look: &mut L,
    events: &mut Events,
) -> Result<(), SimError> {
    let (flipper, orientation, schedule) =
        world.query_one_mut::<(&mut Flipper, &Orientation, &mut Schedule)>(body)?;

    gravity.reverse();
    events.gravity_reversed = true;

    let down_dot = orientation.up().dot(Vec3::NEG_Y);
    flipper.upside_down = resolve_upside_down(down_dot, flipper.upside_down);
    flipper.restart();

    look.set_rotation_enabled(false);
    schedule.schedule(
        DeferredAction::SaveOrientation,
        time.now + config.save_orientation_delay,
    );

    log::debug!(
        "gravity reversed to {:?}, body {:?} settling {}",
        gravity.0,
        body,
        if flipper.upside_down { "upside down" } else { "upright" }
    );
    Ok(())
}

/// Advance every flipper by one fixed tick
pub fn tick_orientation<L: LookController + ?Sized>(
    world: &mut World,
    config: &Config,
    look: &mut L,
    events: &mut Events,
) {
    for (_entity, (flipper, orientation)) in world.query_mut::<(&mut Flipper, &mut Orientation)>() {
        flipper.advance(config.interpolation_step);

        let ratio = flipper.ratio();
        if ratio < config.slerp_cutoff_ratio {
            orientation.rot = orientation.rot.slerp(flipper.goal(), ratio).normalize();
        }

        if !look.rotation_enabled()
            && is_axis_aligned(orientation.up(), config.alignment_epsilon)
        {
            look.set_rotation_enabled(true);
            events.look_rotation_restored = true;
        }
    }
}
