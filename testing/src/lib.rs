//! # Oneway Testing
//!
//! Testing utilities and helpers for the Oneway architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers checking reducer purity
//! - [`init_test_tracing`] to see store logs while debugging a test
//!
//! ## Example
//!
//! ```ignore
//! use oneway_testing::ReducerTest;
//!
//! ReducerTest::new(CounterReducer)
//!     .given_state(CounterState { count: 0 })
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Install a `tracing` subscriber writing to the test output
///
/// Honors `RUST_LOG` and falls back to `debug`. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
