//! Owned state container with change subscriptions.

use crate::ui::mvi::Reducer;

/// Called with `(previous, current)` after a dispatch changed the state.
pub type Listener<S> = Box<dyn FnMut(&S, &S) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the state for one reducer and runs every intent through it.
///
/// Owned by whoever drives the UI and passed by reference to views; there is
/// no global instance.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self {
            state: R::State::default(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Reduce `intent` into the state. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let previous = self.state.clone();
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        if previous == self.state {
            return false;
        }
        for (_, listener) in self.listeners.iter_mut() {
            listener(&previous, &self.state);
        }
        true
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State, &R::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
