use super::engine::GameResult;
use super::player::Seat;

/// State changes pushed to observers, in the order they happen during a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A disc landed at `(column, row)`.
    MoveMade { column: usize, row: usize, seat: Seat },
    /// The targeted column already holds six discs.
    ColumnFull { column: usize },
    /// The turn passed to `current`.
    SwitchedPlayer { current: Seat },
    /// Fired once per game.
    GameEnded(GameResult),
    GameRestarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&GameEvent)>;

/// Synchronous observer registry.
///
/// Observers only ever see the event itself, never the engine, so a handler
/// cannot start another move while one is being evaluated.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver an event to every observer in subscription order.
    pub fn emit(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&log);
        observers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        observers.subscribe(move |_| second.borrow_mut().push("second"));

        observers.emit(&GameEvent::GameRestarted);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();

        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);
        observers.emit(&GameEvent::ColumnFull { column: 0 });

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());

        observers.emit(&GameEvent::ColumnFull { column: 0 });
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut observers = Observers::new();
        let a = observers.subscribe(|_| {});
        observers.unsubscribe(a);
        let b = observers.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(observers.len(), 1);
    }
}
