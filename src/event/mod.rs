mod bus;

pub use bus::NotificationBus;

use crate::state::StateSnapshot;

/// Receives a fresh snapshot on subscription and after every committed change.
///
/// Subscribers are passive: they render or cache what they are given and
/// never mutate the store from inside `on_state`.
pub trait StateSubscriber {
    fn on_state(&mut self, snapshot: StateSnapshot);
}

impl<F> StateSubscriber for F
where
    F: FnMut(StateSnapshot),
{
    fn on_state(&mut self, snapshot: StateSnapshot) {
        self(snapshot)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);
