use crate::{Gravity, Paddle, RigidBody3D, Time, Transform2D, Velocity2D};
use hecs::World;

/// Move paddles and projectiles by their velocity; knocked-out paddles stay put
pub fn integrate_planar(world: &mut World, time: &Time) {
    for (_entity, (transform, velocity, paddle)) in
        world.query_mut::<(&mut Transform2D, &Velocity2D, Option<&Paddle>)>()
    {
        if paddle.is_some_and(|p| !p.active) {
            continue;
        }
        transform.pos += velocity.vel * time.dt;
    }
}

/// Accelerate free bodies by gravity, then move them
pub fn integrate_bodies(world: &mut World, gravity: &Gravity, time: &Time) {
    for (_entity, body) in world.query_mut::<&mut RigidBody3D>() {
        body.vel += gravity.0 * time.dt;
        body.pos += body.vel * time.dt;
    }
}
