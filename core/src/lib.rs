//! # Oneway Core
//!
//! Core traits for unidirectional state management.
//!
//! Every change to application state is described by an **action** and
//! applied by a **reducer**, a pure function `(State, Action) → State`.
//! The store (see `oneway-runtime`) holds the current state and re-runs the
//! reducer for every dispatched action.
//!
//! ## Core Concepts
//!
//! - **State**: Plain owned data, replaced wholesale on every dispatch
//! - **Action**: A closed enum describing every requested change
//! - **Reducer**: Pure function producing the next state from the current one
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Immutable state transitions (reducers never see `&mut State`)
//! - Exhaustive dispatch through `match` over the action enum
//!
//! ## Example
//!
//! ```
//! use oneway_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState { count: 0 },
//!         }
//!     }
//! }
//!
//! let before = CounterState { count: 41 };
//! let after = CounterReducer.reduce(&before, &CounterAction::Increment);
//! assert_eq!(after.count, 42);
//! assert_eq!(before.count, 41);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Action module - the tagged description of a requested state change
///
/// Actions are usually enums deriving `oneway_macros::Action`, which
/// implements [`Action`](action::Action) by turning each variant name into
/// its wire tag (`AddTodo` becomes `"ADD_TODO"`).
pub mod action {
    /// Common behavior of every action type
    ///
    /// # Example
    ///
    /// ```
    /// use oneway_core::action::Action;
    ///
    /// enum LightAction {
    ///     TurnOn,
    ///     TurnOff,
    /// }
    ///
    /// impl Action for LightAction {
    ///     fn action_type(&self) -> &'static str {
    ///         match self {
    ///             Self::TurnOn => "TURN_ON",
    ///             Self::TurnOff => "TURN_OFF",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LightAction::TurnOn.action_type(), "TURN_ON");
    /// ```
    pub trait Action {
        /// The tag identifying this action's kind on the wire and in logs
        fn action_type(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State`.
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// `reduce` must be total: every `(state, action)` pair yields exactly
    /// one next state. Actions that do not apply (missing payload, unknown
    /// target) yield a state equal to the input.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The current state, read-only
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state. The input is left untouched.
        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    }

    impl<R: Reducer + ?Sized> Reducer for Box<R> {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
            (**self).reduce(state, action)
        }
    }
}

pub use action::Action;
pub use reducer::Reducer;
