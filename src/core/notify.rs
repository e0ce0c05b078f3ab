use crate::models::workout::WorkoutRecord;

/// What just happened to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Appended(WorkoutRecord),
    Reset,
}

type Listener = Box<dyn FnMut(&StoreChange)>;

/// "Store changed" broadcast owned by the caller's session.
///
/// The core never fires it on its own: the session calls `notify` only
/// after a mutation returned `Ok`.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn notify(&mut self, change: &StoreChange) {
        tracing::debug!(listeners = self.listeners.len(), ?change, "broadcasting store change");
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
