use glam::Vec3;
use hecs::Entity;

use crate::components::{PaddleIntent, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.02, now: 0.0 }
    }
}

/// Leftover frame time not yet consumed by fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    accumulator: f32,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, frame_dt: f32) {
        self.accumulator += frame_dt.max(0.0);
    }

    /// Take one fixed step out of the accumulator if enough time has built up
    pub fn consume(&mut self, fixed_dt: f32) -> bool {
        if self.accumulator >= fixed_dt {
            self.accumulator -= fixed_dt;
            true
        } else {
            false
        }
    }
}

/// World gravity read by the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity(pub Vec3);

impl Gravity {
    pub fn new(g: Vec3) -> Self {
        Self(g)
    }

    /// Negate the vertical component
    pub fn reverse(&mut self) {
        self.0.y *= -1.0;
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self(Vec3::new(0.0, crate::params::Params::GRAVITY_Y, 0.0))
    }
}

/// Per-frame flip control
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipInput {
    pub flip: bool, // pressed this frame
}

/// A projectile that entered the world this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnEvent {
    pub entity: Entity,
    pub owner: Side,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub gravity_reversed: bool,
    pub orientation_saved: bool,
    pub look_rotation_restored: bool,
    pub spawned: Vec<SpawnEvent>,
    pub culled: Vec<Entity>,
    pub knocked_out: Vec<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.gravity_reversed = false;
        self.orientation_saved = false;
        self.look_rotation_restored = false;
        self.spawned.clear();
        self.culled.clear();
        self.knocked_out.clear();
    }
}

/// Paddle input waiting to be applied to intents
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, PaddleIntent)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, side: Side, intent: PaddleIntent) {
        self.inputs.push((side, intent));
    }

    pub fn pop_inputs(&mut self) -> Vec<(Side, PaddleIntent)> {
        std::mem::take(&mut self.inputs)
    }
}

/// Everything a step needs besides the world and config
#[derive(Debug, Clone, Default)]
pub struct SimContext {
    pub time: Time,
    pub clock: FixedClock,
    pub gravity: Gravity,
    pub events: Events,
    pub tick: u64, // Fixed ticks run so far
}

impl SimContext {
    pub fn new(config: &crate::Config) -> Self {
        Self {
            time: Time::new(config.fixed_dt, 0.0),
            clock: FixedClock::new(),
            gravity: Gravity::new(config.gravity),
            events: Events::new(),
            tick: 0,
        }
    }

    /// Move `time.now` to the end of the next fixed tick.
    ///
    /// `now` is recomputed from the tick count rather than summed, so it keeps
    /// advancing long after `now + fixed_dt` would round back to `now` in f32.
    pub fn advance_tick(&mut self, fixed_dt: f32) {
        self.tick += 1;
        self.time.now = (self.tick as f64 * f64::from(fixed_dt)) as f32;
    }
}
