//! Metric names and descriptions for the Store runtime.
//!
//! The runtime records through the `metrics` facade only. Nothing is exported
//! unless the host installs a recorder; without one every call is a no-op.

use metrics::{describe_counter, Unit};

// Re-export metrics macros for use in other modules
pub use metrics::counter;

/// Actions sent to a store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// `Effect::Emit` blocks written to the console
pub const EFFECTS_EMITTED: &str = "store.effects.emitted";

/// Register descriptions for every runtime metric.
///
/// Call once after installing a recorder so exporters can show help text.
pub fn register_metrics() {
    describe_counter!(
        ACTIONS_TOTAL,
        Unit::Count,
        "Total number of actions reduced by stores"
    );
    describe_counter!(
        EFFECTS_EMITTED,
        Unit::Count,
        "Total number of console blocks emitted by stores"
    );
}
