//! # Rail Ticketing Runtime
//!
//! Runtime implementation for the rail ticketing reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, runs the reducer and executes effects
//! - **Effect Executor**: Writes emitted text to the console in order
//!
//! ## Example
//!
//! ```ignore
//! use rail_ticketing_runtime::Store;
//!
//! let store = Store::new(
//!     RegistryState::new(),
//!     RegistryReducer::new(),
//!     environment,
//!     Arc::new(StdoutConsole),
//! );
//!
//! // Send an action
//! store.send(RegistryAction::ShowAllTickets)?;
//!
//! // Read state
//! let count = store.state(RegistryState::count)?;
//! ```

/// Metric names recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The state lock was poisoned by a panic in another holder
        ///
        /// The state may be partially updated, so the store refuses to
        /// continue.
        #[error("Store state lock poisoned")]
        LockPoisoned,
    }
}

pub use error::StoreError;

/// Store module - The runtime for reducers
pub mod store {
    use super::metrics::{counter, ACTIONS_TOTAL, EFFECTS_EMITTED};
    use super::StoreError;
    use rail_ticketing_core::{effect::Effect, environment::Console, reducer::Reducer};
    use std::fmt::Display;
    use std::sync::{Arc, RwLock};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The state sits behind a single lock so the store can be shared by
    /// reference. The lock is released before effects run, so console
    /// output never happens while the state is held.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: RwLock<S>,
        reducer: R,
        environment: E,
        console: Arc<dyn Console>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, environment and console
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E, console: Arc<dyn Console>) -> Self {
            Self {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                console,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state lock, then executes the returned
        /// effects in order.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::LockPoisoned`] if the state lock is poisoned.
        #[tracing::instrument(skip(self), name = "store_send")]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            counter!(ACTIONS_TOTAL).increment(1);

            let effects = {
                let mut state = self.state.write().map_err(|_| {
                    tracing::error!("State lock poisoned");
                    StoreError::LockPoisoned
                })?;
                self.reducer.reduce(&mut *state, action, &self.environment)
            };

            tracing::trace!(count = effects.len(), "Executing effects");
            for effect in effects {
                self.execute_effect(effect);
            }
            Ok(())
        }

        fn execute_effect(&self, effect: Effect) {
            match effect {
                Effect::None => {},
                Effect::Sequential(effects) => {
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                },
                Effect::Emit(text) => {
                    counter!(EFFECTS_EMITTED).increment(1);
                    self.console.write_block(&text);
                },
            }
        }

        /// Read state via a closure
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::LockPoisoned`] if the state lock is poisoned.
        pub fn state<F, T>(&self, f: F) -> Result<T, StoreError>
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
            Ok(f(&*state))
        }

        /// Write messages produced outside the reducer to the store's console
        ///
        /// Used for operations invoked directly on values the caller owns.
        pub fn emit<I>(&self, messages: I)
        where
            I: IntoIterator,
            I::Item: Display,
        {
            for message in messages {
                counter!(EFFECTS_EMITTED).increment(1);
                self.console.write_block(&message.to_string());
            }
        }
    }
}

pub use store::Store;
