use crate::types::{BallDrop, Landing};
use tokio::sync::mpsc;

pub type LandingSender = mpsc::UnboundedSender<Landing>;
pub type LandingReceiver = mpsc::UnboundedReceiver<Landing>;

/// Channel carrying landings back from the simulator. The sender is handed
/// to the simulator when it is built and never reassigned; the session
/// drains the receiver.
pub fn landing_channel() -> (LandingSender, LandingReceiver) {
    mpsc::unbounded_channel()
}

/// External ball-drop simulator.
///
/// Scheduling is fire-and-forget: the simulator owns its own stepping and
/// reports exactly one landing per finished drop on the channel it was
/// constructed with, echoing the drop's ticket. Multiple drops may be in
/// flight at once; landing order is whatever the simulation produces.
pub trait BallSimulator {
    fn add_ball(&self, drop: BallDrop);
}
