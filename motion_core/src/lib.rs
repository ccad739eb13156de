//! Deterministic motion core for two small game mechanics:
//! a gravity-flipping body and a paddle game with projectiles.
//!
//! The host owns a [`hecs::World`], a [`SimContext`] and a [`Config`], and
//! calls [`step_flip`] or [`step_pong`] once per rendered frame.

pub mod bounds;
pub mod components;
pub mod config;
pub mod error;
pub mod look;
pub mod params;
pub mod resources;
pub mod systems;
pub mod viewport;

pub use bounds::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use look::*;
pub use params::*;
pub use resources::*;
pub use viewport::*;

use glam::{Quat, Vec2, Vec3};
use hecs::{Entity, World};
use systems::*;

/// Clamp the frame delta in `ctx.time.dt`, bank it, and return how many fixed ticks to run
fn bank_frame(ctx: &mut SimContext, config: &Config) -> u32 {
    ctx.events.clear();
    ctx.time.dt = ctx.time.dt.clamp(0.0, config.max_dt);
    ctx.clock.accumulate(ctx.time.dt);

    let mut ticks = 0;
    while ctx.clock.consume(config.fixed_dt) {
        ticks += 1;
    }
    ticks
}

/// Run one frame of the gravity flip mechanic.
///
/// The host writes the frame delta into `ctx.time.dt` first. The flip control
/// is sampled once per frame, before the fixed ticks.
pub fn step_flip<L: LookController + ?Sized>(
    world: &mut World,
    body: Entity,
    ctx: &mut SimContext,
    config: &Config,
    input: &FlipInput,
    look: &mut L,
) -> Result<(), SimError> {
    let ticks = bank_frame(ctx, config);

    if input.flip {
        trigger_flip(
            world,
            body,
            &mut ctx.gravity,
            &ctx.time,
            config,
            look,
            &mut ctx.events,
        )?;
    }

    for _ in 0..ticks {
        let tick_time = Time::new(config.fixed_dt, ctx.time.now);

        // 1. Deferred work that came due
        run_schedules(world, &tick_time, look, &mut ctx.events);

        // 2. Orientation interpolation and look re-enable
        tick_orientation(world, config, look, &mut ctx.events);

        // 3. Gravity
        integrate_bodies(world, &ctx.gravity, &tick_time);

        ctx.advance_tick(config.fixed_dt);
    }
    Ok(())
}

/// Run one frame of the paddle game
pub fn step_pong(
    world: &mut World,
    ctx: &mut SimContext,
    config: &Config,
    input_queue: &mut InputQueue,
) -> Result<(), SimError> {
    let ticks = bank_frame(ctx, config);

    // Held controls persist on the intents until new input arrives
    ingest_inputs(world, input_queue);

    for _ in 0..ticks {
        let tick_time = Time::new(config.fixed_dt, ctx.time.now);

        // 1. Paddle impulses
        apply_paddle_input(world, config);

        // 2. Fire (count and cooldown gated)
        fire_projectiles(world, &tick_time, config, &mut ctx.events)?;

        // 3. Edge reflection
        bounce_paddles(world);
        bounce_projectiles(world);

        // 4. Face projectiles along their velocity
        orient_projectiles(world, config);

        // 5. Move
        integrate_planar(world, &tick_time);

        // 6. Hits, then off-screen cleanup
        detect_hits(world, &mut ctx.events)?;
        cull_projectiles(world, &mut ctx.events);

        ctx.advance_tick(config.fixed_dt);
    }
    Ok(())
}

/// Helper to create a paddle entity; `edges` come from [`ScreenEdges::project`]
pub fn create_paddle(
    world: &mut World,
    side: Side,
    pos: Vec2,
    edges: ScreenEdges,
    config: &Config,
) -> Entity {
    world.spawn((
        Paddle::new(side),
        PaddleIntent::default(),
        FireCooldown::default(),
        Transform2D::at(pos),
        Velocity2D::default(),
        Extents::new(config.paddle_extents),
        edges,
    ))
}

/// Helper to create a flippable body at rest
pub fn create_flip_body(world: &mut World, pos: Vec3, rot: Quat, config: &Config) -> Entity {
    world.spawn((
        Flipper::new(config.max_interpolation_time),
        Orientation::new(rot),
        Schedule::new(),
        RigidBody3D {
            pos,
            vel: Vec3::ZERO,
        },
    ))
}
