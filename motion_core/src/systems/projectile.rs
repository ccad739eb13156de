use glam::{Quat, Vec2};
use hecs::{Entity, World};

use crate::components::*;
use crate::error::SimError;
use crate::resources::Events;
use crate::{Config, ScreenEdges};

/// Initial projectile velocity: forward impulse plus part of the paddle's vertical motion
pub fn launch_velocity(owner: Side, paddle_vel: Vec2, config: &Config) -> Vec2 {
    Vec2::new(
        owner.forward() * config.projectile_impulse,
        paddle_vel.y * config.inherited_velocity_factor,
    )
}

/// Rotation about the view axis that faces along `vel`
pub fn heading_of(vel: Vec2) -> Quat {
    Quat::from_rotation_z(vel.y.atan2(vel.x))
}

/// Spawn a projectile at the paddle's spawn point
pub fn spawn_projectile(
    world: &mut World,
    paddle: Entity,
    config: &Config,
) -> Result<Entity, SimError> {
    let (owner, pos, paddle_vel, edges) = {
        let (paddle, transform, velocity, edges) = world
            .query_one_mut::<(&Paddle, &Transform2D, &Velocity2D, &ScreenEdges)>(paddle)?;
        (paddle.side, transform.pos, velocity.vel, *edges)
    };

    let forward = Vec2::new(owner.forward(), 0.0);
    let spawn_point = pos + forward * config.spawn_offset;
    let vel = launch_velocity(owner, paddle_vel, config);

    // Projectiles share the paddle's depth plane, so they share its edges
    Ok(world.spawn((
        Projectile { owner },
        Transform2D::new(spawn_point, heading_of(forward)),
        Velocity2D::new(vel),
        Extents::new(config.projectile_extents),
        edges,
    )))
}

/// Reflect projectiles off the top and bottom screen edges
pub fn bounce_projectiles(world: &mut World) {
    for (_entity, (_projectile, transform, velocity, extents, edges)) in world.query_mut::<(
        &Projectile,
        &Transform2D,
        &mut Velocity2D,
        &Extents,
        &ScreenEdges,
    )>() {
        edges.reflect_vertical(transform.pos, extents.half, &mut velocity.vel);
    }
}

/// Turn projectiles toward their direction of travel by a fixed blend per tick
pub fn orient_projectiles(world: &mut World, config: &Config) {
    for (_entity, (_projectile, transform, velocity)) in
        world.query_mut::<(&Projectile, &mut Transform2D, &Velocity2D)>()
    {
        let target = heading_of(velocity.vel);
        transform.rot = transform.rot.slerp(target, config.heading_blend).normalize();
    }
}

/// Despawn projectiles that have fully left the screen
pub fn cull_projectiles(world: &mut World, events: &mut Events) {
    let mut to_remove: Vec<Entity> = world
        .query::<(&Projectile, &Transform2D, &Extents, &ScreenEdges)>()
        .iter()
        .filter(|(_e, (_p, transform, extents, edges))| {
            edges.fully_outside(transform.pos, extents.half)
        })
        .map(|(e, _)| e)
        .collect();
    to_remove.sort_by_key(|e| e.id());

    for entity in to_remove {
        if world.despawn(entity).is_ok() {
            log::debug!("culled off-screen projectile {:?}", entity);
            events.culled.push(entity);
        }
    }
}
