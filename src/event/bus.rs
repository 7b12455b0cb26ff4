use super::{StateSubscriber, SubscriptionId};
use crate::state::StateSnapshot;

/// Fans state snapshots out to registered subscribers in registration order
pub struct NotificationBus {
    subscribers: Vec<(SubscriptionId, Box<dyn StateSubscriber>)>,
    next_id: u64,
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &format!("<{} subscribers>", self.subscribers.len()))
            .finish()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `subscriber` and immediately delivers `current` to it
    pub fn subscribe(
        &mut self,
        mut subscriber: Box<dyn StateSubscriber>,
        current: &StateSnapshot,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        subscriber.on_state(current.clone());
        self.subscribers.push((id, subscriber));
        id
    }

    /// Returns `false` if `id` was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Delivers a separate copy of `snapshot` to every subscriber
    pub fn notify(&mut self, snapshot: &StateSnapshot) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber.on_state(snapshot.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::property_map::PropertyMap;
    use crate::state::PresetTag;

    fn snapshot(gap: &str) -> StateSnapshot {
        StateSnapshot {
            selector: ".card".to_string(),
            properties: PropertyMap::from([("gap", gap)]),
            baseline: PropertyMap::from([("gap", "1rem")]),
            baseline_preset_id: "starter".to_string(),
            active_preset: PresetTag::Custom,
            can_undo: false,
            can_redo: false,
        }
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> Box<dyn StateSubscriber> {
        let log = Rc::clone(log);
        Box::new(move |snapshot: StateSnapshot| {
            log.borrow_mut()
                .push(format!("{name}:{}", snapshot.properties.get_or_empty("gap")));
        })
    }

    #[test]
    fn test_subscribe_replays_current_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();

        bus.subscribe(recorder(&log, "a"), &snapshot("1rem"));
        assert_eq!(*log.borrow(), vec!["a:1rem"]);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        bus.subscribe(recorder(&log, "a"), &snapshot("1rem"));
        bus.subscribe(recorder(&log, "b"), &snapshot("1rem"));
        log.borrow_mut().clear();

        bus.notify(&snapshot("2rem"));
        assert_eq!(*log.borrow(), vec!["a:2rem", "b:2rem"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        let a = bus.subscribe(recorder(&log, "a"), &snapshot("1rem"));
        bus.subscribe(recorder(&log, "b"), &snapshot("1rem"));
        log.borrow_mut().clear();

        assert!(bus.unsubscribe(a));
        assert!(!bus.unsubscribe(a));
        bus.notify(&snapshot("3rem"));
        assert_eq!(*log.borrow(), vec!["b:3rem"]);
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_subscribers_get_independent_copies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();
        bus.subscribe(
            Box::new(|mut snapshot: StateSnapshot| {
                snapshot.properties.insert("gap", "mutated");
            }),
            &snapshot("1rem"),
        );
        let sink = Rc::clone(&seen);
        bus.subscribe(
            Box::new(move |snapshot: StateSnapshot| sink.borrow_mut().push(snapshot)),
            &snapshot("1rem"),
        );

        bus.notify(&snapshot("2rem"));
        assert_eq!(seen.borrow().last().unwrap().properties.get("gap"), Some("2rem"));
    }
}
