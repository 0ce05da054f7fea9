//! Reducer composition utilities
//!
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Application state is usually a struct of named slices (`AppState { todos }`),
//! each owned by its own reducer. Scoping lets the slice reducer stay
//! ignorant of the parent type while the parent is still rebuilt as a new
//! value on every action.
//!
//! # Examples
//!
//! ```
//! use oneway_core::Reducer;
//! use oneway_core::composition::scope_reducer;
//!
//! // Child state and reducer
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Decrement => CounterState { count: state.count - 1 },
//!         }
//!     }
//! }
//!
//! // Parent state
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     counter: CounterState,
//!     title: String,
//! }
//!
//! let scoped = scope_reducer(
//!     CounterReducer,
//!     |app: &AppState| &app.counter,
//!     |app: &AppState, counter: CounterState| AppState {
//!         counter,
//!         ..app.clone()
//!     },
//! );
//!
//! let state = AppState::default();
//! let next = scoped.reduce(&state, &CounterAction::Increment);
//! assert_eq!(next.counter.count, 1);
//! assert_eq!(state.counter.count, 0);
//! ```

use crate::reducer::Reducer;

/// Scopes a reducer to operate on one slice of a larger state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The slice type owned by `reducer`
/// - `R`: The slice reducer
///
/// `get_state` borrows the slice out of the parent; `set_state` builds the
/// next parent from the current parent and the reduced slice.
pub const fn scope_reducer<S, SubS, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
) -> ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
    }
}

/// A scoped reducer that operates on one slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
}

impl<S, SubS, R> ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS>,
{
    /// Returns the slice reducer
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<S, SubS, R> Reducer for ScopedReducer<S, SubS, R>
where
    R: Reducer<State = SubS>,
{
    type State = S;
    type Action = R::Action;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let slice = self.reducer.reduce((self.get_state)(state), action);
        (self.set_state)(state, slice)
    }
}
