use hecs::{ComponentError, Entity, World};

use crate::bounds::Aabb;
use crate::components::*;
use crate::error::SimError;
use crate::resources::Events;

fn side_active(world: &World, side: Side) -> bool {
    world
        .query::<&Paddle>()
        .iter()
        .any(|(_e, paddle)| paddle.side == side && paddle.active)
}

/// Handle a collision between `paddle` and the entity `other`.
///
/// A paddle struck by the opponent's projectile is deactivated, as long as the
/// opponent is still in play. Anything that is not a projectile is ignored.
/// Returns whether the paddle was knocked out.
pub fn on_paddle_collision(
    world: &mut World,
    paddle: Entity,
    other: Entity,
) -> Result<bool, SimError> {
    let (side, active) = {
        let p = world.get::<&Paddle>(paddle)?;
        (p.side, p.active)
    };
    let owner = match world.get::<&Projectile>(other) {
        Ok(projectile) => projectile.owner,
        Err(ComponentError::MissingComponent(_)) => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    if !active || owner != side.opponent() || !side_active(world, owner) {
        return Ok(false);
    }

    world.get::<&mut Paddle>(paddle)?.active = false;
    log::info!("{side:?} paddle knocked out by {owner:?} projectile");
    Ok(true)
}

/// Find projectile/paddle overlaps and dispatch each one as a collision
pub fn detect_hits(world: &mut World, events: &mut Events) -> Result<(), SimError> {
    let mut paddles: Vec<(Entity, Side, Aabb)> = world
        .query::<(&Paddle, &Transform2D, &Extents)>()
        .iter()
        .filter(|(_e, (paddle, _, _))| paddle.active)
        .map(|(e, (paddle, t, ext))| (e, paddle.side, Aabb::from_center_half(t.pos, ext.half)))
        .collect();
    paddles.sort_by_key(|(e, _, _)| e.id());

    let mut projectiles: Vec<(Entity, Aabb)> = world
        .query::<(&Projectile, &Transform2D, &Extents)>()
        .iter()
        .map(|(e, (_, t, ext))| (e, Aabb::from_center_half(t.pos, ext.half)))
        .collect();
    projectiles.sort_by_key(|(e, _)| e.id());

    for (paddle, side, paddle_box) in paddles {
        for (shot, shot_box) in &projectiles {
            if !paddle_box.overlaps(shot_box) {
                continue;
            }
            if on_paddle_collision(world, paddle, *shot)? {
                events.knocked_out.push(side);
                break;
            }
        }
    }
    Ok(())
}
