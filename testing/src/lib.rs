//! # Rail Ticketing Testing
//!
//! Testing utilities and helpers for the rail ticketing reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use rail_ticketing_testing::RecordingConsole;
//! use rail_ticketing_runtime::Store;
//!
//! #[test]
//! fn test_registry_flow() {
//!     let console = Arc::new(RecordingConsole::new());
//!     let store = Store::new(RegistryState::new(), RegistryReducer::new(), env, console.clone());
//!
//!     store.send(RegistryAction::ShowAllTickets).unwrap();
//!
//!     assert!(console.contains("No available tickets."));
//! }
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use rail_ticketing_core::environment::Console;
    use std::sync::Mutex;

    /// Console that records every block instead of printing it
    ///
    /// # Example
    ///
    /// ```
    /// use rail_ticketing_testing::mocks::RecordingConsole;
    /// use rail_ticketing_core::environment::Console;
    ///
    /// let console = RecordingConsole::new();
    /// console.write_block("Receipt:");
    /// assert_eq!(console.blocks(), vec!["Receipt:".to_string()]);
    /// ```
    #[derive(Debug, Default)]
    pub struct RecordingConsole {
        blocks: Mutex<Vec<String>>,
    }

    impl RecordingConsole {
        /// Create an empty recording console
        #[must_use]
        pub const fn new() -> Self {
            Self {
                blocks: Mutex::new(Vec::new()),
            }
        }

        /// Every block written so far, in order
        #[must_use]
        pub fn blocks(&self) -> Vec<String> {
            self.blocks
                .lock()
                .map(|blocks| blocks.clone())
                .unwrap_or_default()
        }

        /// The whole transcript joined with newlines
        #[must_use]
        pub fn transcript(&self) -> String {
            self.blocks().join("\n")
        }

        /// Whether any block contains `needle`
        #[must_use]
        pub fn contains(&self, needle: &str) -> bool {
            self.blocks().iter().any(|block| block.contains(needle))
        }

        /// Drop everything recorded so far
        pub fn clear(&self) {
            if let Ok(mut blocks) = self.blocks.lock() {
                blocks.clear();
            }
        }
    }

    impl Console for RecordingConsole {
        fn write_block(&self, text: &str) {
            if let Ok(mut blocks) = self.blocks.lock() {
                blocks.push(text.to_string());
            }
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness.
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::RecordingConsole;
