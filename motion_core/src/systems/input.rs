use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy queued paddle input onto the matching paddle's intent
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for (side, intent) in input_queue.pop_inputs() {
        for (_entity, (paddle, current)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                *current = intent;
            }
        }
    }
}

/// Apply up/down impulses to controllable paddles, never past the speed cap
pub fn apply_paddle_input(world: &mut World, config: &crate::Config) {
    let cap = config.paddle_speed_cap;
    let impulse = config.paddle_impulse;

    for (_entity, (paddle, intent, velocity)) in
        world.query_mut::<(&Paddle, &PaddleIntent, &mut Velocity2D)>()
    {
        if !paddle.is_controllable() {
            continue;
        }
        let vel = &mut velocity.vel;
        if intent.up && vel.y < cap {
            vel.y = (vel.y + impulse).min(cap);
        }
        if intent.down && vel.y > -cap {
            vel.y = (vel.y - impulse).max(-cap);
        }
    }
}
