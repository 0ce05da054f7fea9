//! # Oneway Runtime
//!
//! Runtime implementation for the Oneway architecture.
//!
//! This crate provides the [`Store`]: the single owner of application state.
//! Every change goes through [`Store::dispatch`], which runs the reducer,
//! replaces the state with the reducer's result, and notifies subscribers.
//!
//! ## Core Components
//!
//! - **Store**: Holds the current state and the reducer, exposes `dispatch`/`state`
//! - **Subscriptions**: Listeners called after every dispatch
//! - **History**: A bounded log of recently dispatched actions
//!
//! Everything runs synchronously on the caller's thread. There is exactly one
//! writer (`dispatch`, which takes `&mut self`) and it runs to completion
//! before returning.
//!
//! ## Example
//!
//! ```ignore
//! use oneway_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer);
//!
//! // Send an action
//! let action = store.dispatch(Action::DoSomething);
//!
//! // Read state
//! let value = &store.state().some_field;
//! ```

/// Store configuration
pub mod config;

/// Error types for the runtime
pub mod error {
    use thiserror::Error;

    /// Errors raised while loading a [`StoreConfig`](crate::config::StoreConfig)
    #[derive(Error, Debug)]
    pub enum ConfigError {
        /// A configuration value is present but malformed
        #[error("Invalid value {value:?} for {key}: {source}")]
        Invalid {
            /// The configuration key
            key: &'static str,
            /// The raw value that failed to parse
            value: String,
            /// The underlying parse error
            #[source]
            source: std::num::ParseIntError,
        },
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use crate::config::StoreConfig;
    use oneway_core::{action::Action, reducer::Reducer};
    use std::collections::VecDeque;

    /// A listener invoked after every dispatch with the new state and the action
    type Listener<S, A> = Box<dyn FnMut(&S, &A)>;

    /// Handle returned by [`Store::subscribe`], used to unsubscribe
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubscriptionId(u64);

    /// The Store - owns state and dispatches actions through a reducer
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation; its `State` and `Action` types are the store's
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(AppState::default(), AppReducer::new());
    ///
    /// store.dispatch(add_todo("Buy milk"));
    /// assert_eq!(store.state().todos.len(), 1);
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: R::State,
        reducer: R,
        config: StoreConfig,
        history: VecDeque<R::Action>,
        listeners: Vec<(SubscriptionId, Listener<R::State, R::Action>)>,
        next_subscription: u64,
        dispatched: u64,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action + Clone,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: R::State, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_history_capacity(0);
        /// let store = Store::with_config(AppState::default(), AppReducer::new(), config);
        /// ```
        #[must_use]
        pub fn with_config(initial_state: R::State, reducer: R, config: StoreConfig) -> Self {
            tracing::debug!(
                history_capacity = config.history_capacity,
                "Creating store"
            );

            Self {
                state: initial_state,
                reducer,
                config,
                history: VecDeque::new(),
                listeners: Vec::new(),
                next_subscription: 0,
                dispatched: 0,
            }
        }

        /// Dispatch an action through the reducer
        ///
        /// The reducer computes the next state from the current one, the store
        /// replaces its state with the result, records the action in history
        /// and calls every subscriber in subscription order.
        ///
        /// # Returns
        ///
        /// The dispatched action, for chaining or logging.
        pub fn dispatch(&mut self, action: R::Action) -> R::Action {
            let span = tracing::debug_span!("store_dispatch", action_type = action.action_type());
            let _entered = span.enter();

            tracing::debug!("Processing action");

            let next = self.reducer.reduce(&self.state, &action);
            self.state = next;
            self.dispatched += 1;
            tracing::trace!(dispatched = self.dispatched, "State replaced");

            self.record(&action);

            for (_, listener) in &mut self.listeners {
                listener(&self.state, &action);
            }
            tracing::trace!("Notified {} subscribers", self.listeners.len());

            action
        }

        fn record(&mut self, action: &R::Action) {
            if self.config.history_capacity == 0 {
                return;
            }
            while self.history.len() >= self.config.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(action.clone());
        }

        /// Read the current state
        ///
        /// The state is replaced (never mutated in place) by `dispatch`, so a
        /// clone taken here stays a faithful snapshot.
        #[must_use]
        pub const fn state(&self) -> &R::State {
            &self.state
        }

        /// Register a listener called after every dispatch
        ///
        /// Listeners receive the new state and the dispatched action.
        pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
        where
            F: FnMut(&R::State, &R::Action) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.listeners.push((id, Box::new(listener)));
            tracing::debug!(subscribers = self.listeners.len(), "Listener subscribed");
            id
        }

        /// Remove a listener
        ///
        /// Returns `false` if the subscription was already removed.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.listeners.len();
            self.listeners.retain(|(existing, _)| *existing != id);
            before != self.listeners.len()
        }

        /// Recently dispatched actions, oldest first
        pub fn history(&self) -> impl Iterator<Item = &R::Action> {
            self.history.iter()
        }

        /// Total number of actions dispatched since creation
        #[must_use]
        pub const fn dispatched(&self) -> u64 {
            self.dispatched
        }

        /// The reducer driving this store
        #[must_use]
        pub const fn reducer(&self) -> &R {
            &self.reducer
        }

        /// The configuration this store was created with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Consume the store and return its final state
        #[must_use]
        pub fn into_state(self) -> R::State {
            self.state
        }
    }

    impl<R> std::fmt::Debug for Store<R>
    where
        R: Reducer,
        R::State: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .field("subscribers", &self.listeners.len())
                .field("dispatched", &self.dispatched)
                .finish_non_exhaustive()
        }
    }
}

pub use config::StoreConfig;
pub use error::ConfigError;
pub use store::{Store, SubscriptionId};
