//! Rail Ticketing - train ticket variants and a price-gated registry
//!
//! Built on the rail ticketing reducer architecture:
//!
//! - **Tickets**: student, child and insured variants sharing one base
//!   entity, each with its own discount rule
//! - **Insurance**: a cover composed onto the insured variant
//! - **Registry**: an ordered in-memory collection driven by a reducer;
//!   tickets above the price ceiling are rejected at admission
//!
//! # Architecture
//!
//! ```text
//!  caller ──RegistryAction──▶ Store ──▶ RegistryReducer ──▶ RegistryState
//!                               │               │
//!                               │          Effect::Emit
//!                               ▼               │
//!                            Console ◀──────────┘
//! ```
//!
//! Ticket operations return [`Notice`] values instead of printing, so the
//! same code drives the console transcript and the tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod demo;
pub mod insurance;
pub mod notice;
pub mod registry;
pub mod ticket;
pub mod types;

pub use config::{Config, ConfigError};
pub use insurance::{Insurance, InsuranceCover};
pub use notice::{Notice, Notices, TicketSummary};
pub use registry::{
    print_receipt, RegistryAction, RegistryEnvironment, RegistryReducer, RegistryState,
    RegistryStore,
};
pub use ticket::{
    check_price_range, ChildTicket, InsuredTicket, StudentTicket, Ticket, TicketDetails,
    TrainTicket,
};
pub use types::*;
