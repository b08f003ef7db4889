//! # Rail Ticketing Core
//!
//! Core traits and types for the rail ticketing reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (e.g. the ticket registry)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```ignore
//! use rail_ticketing_core::*;
//!
//! impl Reducer for RegistryReducer {
//!     type State = RegistryState;
//!     type Action = RegistryAction;
//!     type Environment = RegistryEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut RegistryState,
//!         action: RegistryAction,
//!         env: &RegistryEnvironment,
//!     ) -> SmallVec<[Effect; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Declarative macros for building effects
pub mod effect_macros;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates state in place and returns effect descriptions to be
        /// executed by the store. Must not perform I/O itself.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers and executed by the Store.
pub mod effect {
    use std::fmt;

    /// Effect type - describes a side effect to be executed
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// No-op effect
        None,

        /// Run effects in order
        Sequential(Vec<Effect>),

        /// Write a block of text to the console
        Emit(String),
    }

    impl Effect {
        /// Build an `Emit` effect from anything displayable
        #[must_use]
        pub fn emit(message: impl fmt::Display) -> Self {
            Self::Emit(message.to_string())
        }

        /// Returns true for `Effect::None` and empty sequences
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
                Self::Emit(_) => false,
            }
        }

        /// All console text this effect would emit, in execution order
        #[must_use]
        pub fn emitted(&self) -> Vec<&str> {
            let mut lines = Vec::new();
            self.collect_emitted(&mut lines);
            lines
        }

        fn collect_emitted<'a>(&'a self, out: &mut Vec<&'a str>) {
            match self {
                Self::Emit(text) => out.push(text),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_emitted(out);
                    }
                },
                Self::None => {},
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter or the Store.
pub mod environment {
    use std::io::Write;

    /// Console trait - the sink for human-readable transcript output
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - writes to stdout
    /// let console = StdoutConsole;
    ///
    /// // Test - captures output for assertions
    /// let console = RecordingConsole::new();
    /// ```
    pub trait Console: Send + Sync {
        /// Write one block of text followed by a newline
        fn write_block(&self, text: &str);
    }

    /// Console that writes to standard output
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StdoutConsole;

    impl Console for StdoutConsole {
        fn write_block(&self, text: &str) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{text}");
        }
    }
}
