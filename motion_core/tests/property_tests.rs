//! Property-based tests for the flip and paddle mechanics.
//!
//! - Gravity sign alternates on every trigger
//! - Interpolation time stays bounded and freezes past the cutoff
//! - Paddle speed never exceeds the cap under any input sequence
//! - Live projectiles per owner never exceed the limit
//! - The fire cooldown gates shots exactly at its boundary

use glam::{Quat, Vec2, Vec3};
use hecs::World;
use motion_core::systems::*;
use motion_core::*;
use proptest::prelude::*;

fn edges() -> ScreenEdges {
    ScreenEdges::new(5.0, -5.0, -9.0, 9.0)
}

fn intent_strategy() -> impl Strategy<Value = PaddleIntent> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(up, down, fire)| PaddleIntent {
        up,
        down,
        fire,
    })
}

proptest! {
    #[test]
    fn gravity_sign_alternates(angles in prop::collection::vec(-3.2f32..3.2, 1..20)) {
        let config = Config::new();
        let mut world = World::new();
        let body = create_flip_body(&mut world, Vec3::ZERO, Quat::IDENTITY, &config);
        let mut gravity = Gravity::new(config.gravity);
        let mut look = LookState::default();
        let mut events = Events::new();

        for angle in angles {
            world.get::<&mut Orientation>(body).unwrap().rot = Quat::from_rotation_z(angle);
            let before = gravity.0.y;
            trigger_flip(&mut world, body, &mut gravity, &Time::default(), &config, &mut look, &mut events)
                .unwrap();
            prop_assert_eq!(gravity.0.y, -before);
            prop_assert!(gravity.0.y != 0.0);
        }
    }

    #[test]
    fn interpolation_bounded_and_frozen_past_cutoff(
        start in -3.2f32..3.2,
        ticks in 1usize..400,
    ) {
        let config = Config::new();
        let mut world = World::new();
        let body = create_flip_body(&mut world, Vec3::ZERO, Quat::from_rotation_z(start), &config);
        let mut gravity = Gravity::new(config.gravity);
        let mut look = LookState::default();
        let mut events = Events::new();
        trigger_flip(&mut world, body, &mut gravity, &Time::default(), &config, &mut look, &mut events)
            .unwrap();

        for _ in 0..ticks {
            let before = world.get::<&Orientation>(body).unwrap().rot;
            tick_orientation(&mut world, &config, &mut look, &mut events);
            let flipper = *world.get::<&Flipper>(body).unwrap();
            let after = world.get::<&Orientation>(body).unwrap().rot;

            prop_assert!(flipper.elapsed >= 0.0);
            prop_assert!(flipper.elapsed <= flipper.max_interpolation_time);
            if flipper.ratio() >= config.slerp_cutoff_ratio {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn paddle_speed_never_exceeds_cap(
        start in -30.0f32..=30.0,
        intents in prop::collection::vec(intent_strategy(), 1..100),
    ) {
        let config = Config::new();
        let mut world = World::new();
        let paddle = create_paddle(&mut world, Side::Left, Vec2::ZERO, edges(), &config);
        world.get::<&mut Velocity2D>(paddle).unwrap().vel.y = start;

        for intent in intents {
            *world.get::<&mut PaddleIntent>(paddle).unwrap() = intent;
            apply_paddle_input(&mut world, &config);
            let vy = world.get::<&Velocity2D>(paddle).unwrap().vel.y;
            prop_assert!(vy.abs() <= config.paddle_speed_cap, "vy = {}", vy);
        }
    }

    #[test]
    fn live_projectiles_never_exceed_limit(
        fire_times in prop::collection::vec(0.0f32..20.0, 1..40),
        fire_rate in 0.0f32..2.0,
    ) {
        let config = Config { fire_rate, ..Config::default() };
        let mut world = World::new();
        let paddle = create_paddle(&mut world, Side::Left, Vec2::ZERO, edges(), &config);

        let mut times = fire_times;
        times.sort_by(f32::total_cmp);
        for now in times {
            let live_before = live_projectiles(&world, Side::Left);
            let ready = world.get::<&FireCooldown>(paddle).unwrap().ready(now);
            let shot = try_fire(&mut world, paddle, &Time::new(config.fixed_dt, now), &config).unwrap();

            prop_assert!(live_projectiles(&world, Side::Left) <= config.max_projectiles);
            prop_assert_eq!(shot.is_some(), ready && live_before < config.max_projectiles);
            if shot.is_some() {
                let next = world.get::<&FireCooldown>(paddle).unwrap().next_allowed;
                prop_assert_eq!(next, now + fire_rate);
            }
        }
    }

    #[test]
    fn cooldown_gates_at_boundary(first in 0.0f32..10.0, rate in 0.01f32..5.0, early in 0.001f32..0.99) {
        let config = Config { fire_rate: rate, ..Config::default() };
        let mut world = World::new();
        let paddle = create_paddle(&mut world, Side::Right, Vec2::ZERO, edges(), &config);

        prop_assert!(try_fire(&mut world, paddle, &Time::new(0.02, first), &config).unwrap().is_some());
        let next = world.get::<&FireCooldown>(paddle).unwrap().next_allowed;

        let too_soon = first + (next - first) * early;
        if too_soon < next {
            prop_assert!(try_fire(&mut world, paddle, &Time::new(0.02, too_soon), &config).unwrap().is_none());
        }
        prop_assert!(try_fire(&mut world, paddle, &Time::new(0.02, next), &config).unwrap().is_some());
    }
}
