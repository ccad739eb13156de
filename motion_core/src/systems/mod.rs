pub mod collision;
pub mod flip;
pub mod input;
pub mod movement;
pub mod paddle;
pub mod projectile;
pub mod schedule;

pub use collision::*;
pub use flip::*;
pub use input::*;
pub use movement::*;
pub use paddle::*;
pub use projectile::*;
pub use schedule::*;
