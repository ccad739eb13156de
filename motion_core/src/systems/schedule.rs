use hecs::World;

use crate::components::{DeferredAction, Orientation, Schedule};
use crate::look::LookController;
use crate::resources::{Events, Time};

/// Run every scheduled action that has come due
pub fn run_schedules<L: LookController + ?Sized>(
    world: &mut World,
    time: &Time,
    look: &mut L,
    events: &mut Events,
) {
    for (entity, (schedule, orientation)) in world.query_mut::<(&mut Schedule, &Orientation)>() {
        for action in schedule.take_due(time.now) {
            match action {
                DeferredAction::SaveOrientation => {
                    look.set_target_rotation(orientation.rot);
                    events.orientation_saved = true;
                    log::debug!("saved orientation of {:?}", entity);
                }
            }
        }
    }
}
