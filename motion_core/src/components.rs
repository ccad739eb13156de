use glam::{Quat, Vec2, Vec3};

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// X direction projectiles travel when fired from this side
    pub fn forward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub control_enabled: bool, // set by the host once a game mode is chosen
    pub active: bool,          // false once knocked out; state is kept
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            control_enabled: true,
            active: true,
        }
    }

    pub fn is_controllable(&self) -> bool {
        self.active && self.control_enabled
    }
}

/// Held paddle controls, refreshed from the input queue every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Earliest simulation time the paddle may fire again
#[derive(Debug, Clone, Copy, Default)]
pub struct FireCooldown {
    pub next_allowed: f32,
}

impl FireCooldown {
    pub fn ready(&self, now: f32) -> bool {
        now >= self.next_allowed
    }

    pub fn restart(&mut self, now: f32, fire_rate: f32) {
        self.next_allowed = now + fire_rate;
    }
}

/// Projectile component
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Side,
}

/// Planar position plus a rotation about the view axis
#[derive(Debug, Clone, Copy)]
pub struct Transform2D {
    pub pos: Vec2,
    pub rot: Quat,
}

impl Transform2D {
    pub fn new(pos: Vec2, rot: Quat) -> Self {
        Self { pos, rot }
    }

    pub fn at(pos: Vec2) -> Self {
        Self::new(pos, Quat::IDENTITY)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity2D {
    pub vel: Vec2,
}

impl Velocity2D {
    pub fn new(vel: Vec2) -> Self {
        Self { vel }
    }
}

/// Half-size of the sprite bounds used for edge and hit tests
#[derive(Debug, Clone, Copy)]
pub struct Extents {
    pub half: Vec2,
}

impl Extents {
    pub fn new(half: Vec2) -> Self {
        Self { half }
    }
}

/// World rotation of a flippable body
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub rot: Quat,
}

impl Orientation {
    pub fn new(rot: Quat) -> Self {
        Self { rot }
    }

    /// The body's local up axis in world space
    pub fn up(&self) -> Vec3 {
        self.rot * Vec3::Y
    }
}

/// Free-falling body driven by the gravity resource
#[derive(Debug, Clone, Copy, Default)]
pub struct RigidBody3D {
    pub pos: Vec3,
    pub vel: Vec3,
}

/// Gravity flip interpolation state
#[derive(Debug, Clone, Copy)]
pub struct Flipper {
    pub start_angle: Quat,  // upright
    pub target_angle: Quat, // 180° about the forward axis
    pub elapsed: f32,
    pub max_interpolation_time: f32,
    pub upside_down: bool,
}

impl Flipper {
    /// Starts settled: `elapsed == max` so no interpolation runs until a trigger
    pub fn new(max_interpolation_time: f32) -> Self {
        Self {
            start_angle: Quat::IDENTITY,
            target_angle: Quat::from_rotation_z(std::f32::consts::PI),
            elapsed: max_interpolation_time,
            max_interpolation_time,
            upside_down: false,
        }
    }

    /// Advance by a fixed step, saturating at the maximum
    pub fn advance(&mut self, step: f32) {
        if self.elapsed < self.max_interpolation_time {
            self.elapsed = (self.elapsed + step).min(self.max_interpolation_time);
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn ratio(&self) -> f32 {
        self.elapsed / self.max_interpolation_time
    }

    /// Rotation the body is settling toward
    pub fn goal(&self) -> Quat {
        if self.upside_down {
            self.target_angle
        } else {
            self.start_angle
        }
    }
}

/// Work deferred to a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Copy the body's rotation into the look controller's target rotation
    SaveOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledAction {
    pub due: f32,
    pub action: DeferredAction,
}

/// Per-entity list of one-shot timers
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pending: Vec<ScheduledAction>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` at `due`, cancelling any pending action of the same kind
    pub fn schedule(&mut self, action: DeferredAction, due: f32) {
        self.cancel(action);
        self.pending.push(ScheduledAction { due, action });
    }

    pub fn cancel(&mut self, action: DeferredAction) {
        self.pending.retain(|p| p.action != action);
    }

    /// Remove and return every action due at or before `now`, in due order
    pub fn take_due(&mut self, now: f32) -> Vec<DeferredAction> {
        let mut due: Vec<ScheduledAction> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn pending(&self) -> &[ScheduledAction] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent_and_forward() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
        assert_eq!(Side::Left.forward(), 1.0);
        assert_eq!(Side::Right.forward(), -1.0);
    }

    #[test]
    fn test_paddle_controllable_requires_both_flags() {
        let mut paddle = Paddle::new(Side::Left);
        assert!(paddle.is_controllable());
        paddle.control_enabled = false;
        assert!(!paddle.is_controllable());
        paddle.control_enabled = true;
        paddle.active = false;
        assert!(!paddle.is_controllable());
    }

    #[test]
    fn test_fire_cooldown_ready_at_boundary() {
        let mut cooldown = FireCooldown::default();
        assert!(cooldown.ready(0.0));
        cooldown.restart(2.0, 1.0);
        assert!(!cooldown.ready(2.5));
        assert!(cooldown.ready(3.0), "Firing exactly at the boundary is allowed");
    }

    #[test]
    fn test_flipper_starts_settled() {
        let flipper = Flipper::new(2.5);
        assert_eq!(flipper.elapsed, 2.5);
        assert_eq!(flipper.ratio(), 1.0);
        assert_eq!(flipper.goal(), Quat::IDENTITY);
    }

    #[test]
    fn test_flipper_advance_saturates() {
        let mut flipper = Flipper::new(0.05);
        flipper.restart();
        for _ in 0..100 {
            flipper.advance(0.01);
            assert!(flipper.elapsed <= flipper.max_interpolation_time);
        }
        assert_eq!(flipper.elapsed, 0.05);
    }

    #[test]
    fn test_flipper_goal_follows_flag() {
        let mut flipper = Flipper::new(2.5);
        flipper.upside_down = true;
        let up = flipper.goal() * Vec3::Y;
        assert!((up - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_orientation_up_identity() {
        assert_eq!(Orientation::new(Quat::IDENTITY).up(), Vec3::Y);
    }

    #[test]
    fn test_schedule_replaces_pending_action() {
        let mut schedule = Schedule::new();
        schedule.schedule(DeferredAction::SaveOrientation, 1.2);
        schedule.schedule(DeferredAction::SaveOrientation, 2.0);
        assert_eq!(schedule.pending().len(), 1);
        assert_eq!(schedule.pending()[0].due, 2.0);

        assert!(schedule.take_due(1.5).is_empty(), "Cancelled timer must not fire");
        assert_eq!(
            schedule.take_due(2.0),
            vec![DeferredAction::SaveOrientation]
        );
        assert!(schedule.pending().is_empty());
    }

    #[test]
    fn test_schedule_cancel() {
        let mut schedule = Schedule::new();
        schedule.schedule(DeferredAction::SaveOrientation, 0.5);
        schedule.cancel(DeferredAction::SaveOrientation);
        assert!(schedule.take_due(10.0).is_empty());
    }
}
