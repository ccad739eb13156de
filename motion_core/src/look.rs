use glam::Quat;

/// Host camera/look controller the flip mechanic toggles and writes to
pub trait LookController {
    fn rotation_enabled(&self) -> bool;

    fn set_rotation_enabled(&mut self, enabled: bool);

    fn set_target_rotation(&mut self, rotation: Quat);
}

/// Plain look controller state, for hosts without their own controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookState {
    pub rotation_enabled: bool,
    pub target_rotation: Quat,
}

impl Default for LookState {
    fn default() -> Self {
        Self {
            rotation_enabled: true,
            target_rotation: Quat::IDENTITY,
        }
    }
}

impl LookController for LookState {
    fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    fn set_rotation_enabled(&mut self, enabled: bool) {
        self.rotation_enabled = enabled;
    }

    fn set_target_rotation(&mut self, rotation: Quat) {
        self.target_rotation = rotation;
    }
}
