//! Rail Ticketing Demo
//!
//! Runs the fixed registry scenario and prints the transcript to stdout.
//! Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo
//!
//! # Lower the admission ceiling and show debug logs
//! TICKETING_PRICE_CEILING=50 RUST_LOG=debug cargo run --bin demo
//! ```

use rail_ticketing::{
    demo::run_scenario, Config, RegistryEnvironment, RegistryReducer, RegistryState,
    RegistryStore, TrainTicket,
};
use rail_ticketing_core::environment::StdoutConsole;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    rail_ticketing_runtime::metrics::register_metrics();

    tracing::info!(price_ceiling = %config.registry.price_ceiling, "Starting ticketing demo");

    let store: RegistryStore = RegistryStore::new(
        RegistryState::new(),
        RegistryReducer::new(),
        RegistryEnvironment::from_config(&config.registry),
        Arc::new(StdoutConsole),
    );

    let insured = run_scenario(&store)?;

    let held = store.state(RegistryState::count)?;
    tracing::info!(held, rejected = %insured.ticket_id(), "Demo finished");

    Ok(())
}
