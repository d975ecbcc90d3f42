//! Model-View-Intent building blocks.
//!
//! A view reads a [`UiState`]; user and network events become an [`Intent`];
//! a [`Reducer`] folds the intent into the next state. The
//! [`Store`](crate::ui::store::Store) holds the current value.

/// A named state change: a file was accepted, a response arrived, the user
/// asked to start over.
pub trait Intent: Send + 'static {}

/// Snapshot a view renders from.
///
/// `PartialEq` lets the store skip notifying subscribers when a reduction
/// changed nothing; `Default` is the state a reset returns to.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// `(State, Intent) -> State`, with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
