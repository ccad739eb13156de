use glam::Vec2;

use crate::viewport::ViewportProjector;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// World-space screen edges on an object's depth plane, computed once at setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEdges {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl ScreenEdges {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Project the viewport corners onto the plane `depth` units in front of the camera
    pub fn project<P: ViewportProjector + ?Sized>(projector: &P, depth: f32) -> Self {
        let bottom_left = projector.viewport_to_world(glam::Vec3::new(0.0, 0.0, depth));
        let top = projector.viewport_to_world(glam::Vec3::new(0.0, 1.0, depth)).y;
        let right = projector.viewport_to_world(glam::Vec3::new(1.0, 0.0, depth)).x;
        Self {
            top,
            bottom: bottom_left.y,
            left: bottom_left.x,
            right,
        }
    }

    /// Reflect vertical velocity when the bounds touch the top or bottom edge.
    ///
    /// Each edge negates independently, so a body taller than the screen is
    /// negated twice.
    pub fn reflect_vertical(&self, pos: Vec2, half: Vec2, vel: &mut Vec2) -> bool {
        let mut bounced = false;
        if pos.y + half.y >= self.top {
            vel.y *= -1.0;
            bounced = true;
        }
        if pos.y - half.y <= self.bottom {
            vel.y *= -1.0;
            bounced = true;
        }
        bounced
    }

    /// True once the bounds have fully crossed any of the four edges
    pub fn fully_outside(&self, pos: Vec2, half: Vec2) -> bool {
        pos.x - half.x >= self.right
            || pos.x + half.x <= self.left
            || pos.y - half.y >= self.top
            || pos.y + half.y <= self.bottom
    }
}
