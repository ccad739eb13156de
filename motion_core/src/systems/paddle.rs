use hecs::{Entity, World};

use crate::components::*;
use crate::error::SimError;
use crate::resources::*;
use crate::systems::projectile::spawn_projectile;
use crate::{Config, ScreenEdges};

/// Number of projectiles currently owned by `side`
pub fn live_projectiles(world: &World, side: Side) -> usize {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_e, projectile)| projectile.owner == side)
        .count()
}

/// Fire from `paddle` if under the projectile limit and off cooldown.
///
/// Returns the spawned projectile, or `None` when the shot was gated.
pub fn try_fire(
    world: &mut World,
    paddle: Entity,
    time: &Time,
    config: &Config,
) -> Result<Option<Entity>, SimError> {
    let side = world.get::<&Paddle>(paddle)?.side;
    if !world.get::<&FireCooldown>(paddle)?.ready(time.now) {
        return Ok(None);
    }
    if live_projectiles(world, side) >= config.max_projectiles {
        log::trace!("{side:?} at projectile limit, shot dropped");
        return Ok(None);
    }

    let projectile = spawn_projectile(world, paddle, config)?;
    world
        .get::<&mut FireCooldown>(paddle)?
        .restart(time.now, config.fire_rate);
    log::debug!("{side:?} fired {:?} at t={:.2}", projectile, time.now);
    Ok(Some(projectile))
}

/// Fire for every controllable paddle holding the fire control
pub fn fire_projectiles(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
) -> Result<(), SimError> {
    // Deterministic: sort by entity ID
    let mut shooters: Vec<(Entity, Side)> = world
        .query::<(&Paddle, &PaddleIntent)>()
        .iter()
        .filter(|(_e, (paddle, intent))| paddle.is_controllable() && intent.fire)
        .map(|(e, (paddle, _))| (e, paddle.side))
        .collect();
    shooters.sort_by_key(|(e, _)| e.id());

    for (paddle, owner) in shooters {
        if let Some(entity) = try_fire(world, paddle, time, config)? {
            events.spawned.push(SpawnEvent { entity, owner });
        }
    }
    Ok(())
}

/// Reflect paddles off the top and bottom screen edges
pub fn bounce_paddles(world: &mut World) {
    for (_entity, (paddle, transform, velocity, extents, edges)) in world.query_mut::<(
        &Paddle,
        &Transform2D,
        &mut Velocity2D,
        &Extents,
        &ScreenEdges,
    )>() {
        if !paddle.is_controllable() {
            continue;
        }
        edges.reflect_vertical(transform.pos, extents.half, &mut velocity.vel);
    }
}
