//! Ticket registry aggregate.
//!
//! Holds admitted tickets in insertion order. Admission is gated on price:
//! anything above the configured ceiling is rejected and not retained.
//! Domain misses (rejections, unknown ids, empty listings) are reported as
//! notices, never as errors.

use crate::config::RegistryConfig;
use crate::notice::{Notice, Notices};
use crate::ticket::{Ticket, TrainTicket};
use crate::types::{Price, PriceRange, TicketId, PRICE_CEILING};
use rail_ticketing_core::{effect::Effect, emit_all, reducer::Reducer, smallvec, SmallVec};
use rail_ticketing_runtime::Store;
use serde::{Deserialize, Serialize};

// ============================================================================
// State
// ============================================================================

/// Tickets currently held by the registry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryState {
    tickets: Vec<Ticket>,
}

impl RegistryState {
    /// Creates an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tickets: Vec::new(),
        }
    }

    /// Held tickets in insertion order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// First ticket with this id
    #[must_use]
    pub fn get(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.ticket_id() == ticket_id)
    }

    fn get_mut(&mut self, ticket_id: TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.ticket_id() == ticket_id)
    }

    /// Whether a ticket with this id is held
    #[must_use]
    pub fn contains(&self, ticket_id: TicketId) -> bool {
        self.get(ticket_id).is_some()
    }

    /// Number of held tickets
    #[must_use]
    pub fn count(&self) -> usize {
        self.tickets.len()
    }

    /// True when no tickets are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Append a ticket without checking its price
    pub fn admit(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Cancel the first ticket with this id and remove it.
    ///
    /// Returns the removed ticket, now invalid, with the notices its
    /// cancellation produced. Other tickets are untouched.
    pub fn cancel_by_id(&mut self, ticket_id: TicketId) -> Option<(Ticket, Notices)> {
        let position = self.tickets.iter().position(|t| t.ticket_id() == ticket_id)?;
        let notices = self.tickets[position].cancel_ticket();
        let ticket = self.tickets.remove(position);
        Some((ticket, notices))
    }
}

/// Receipt for any ticket, held by a registry or not
#[must_use]
pub fn print_receipt<T: TrainTicket + ?Sized>(ticket: &T) -> Notice {
    Notice::Receipt(ticket.summary())
}

// ============================================================================
// Actions
// ============================================================================

/// Commands accepted by the registry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RegistryAction {
    /// Admit a ticket if its price is within the ceiling
    AddTicket {
        /// Ticket to admit
        ticket: Ticket,
    },

    /// List every held ticket
    ShowAllTickets,

    /// Cancel and remove the first ticket with this id
    CancelTicketById {
        /// Ticket to cancel
        ticket_id: TicketId,
    },

    /// Apply the variant discount to a held ticket
    ApplyDiscount {
        /// Ticket to discount
        ticket_id: TicketId,
    },

    /// Change the destination of a held ticket
    ChangeDestination {
        /// Ticket to change
        ticket_id: TicketId,
        /// New destination
        destination: String,
    },

    /// Change the departure station of a held ticket
    ChangeArrival {
        /// Ticket to change
        ticket_id: TicketId,
        /// New departure station
        arrival: String,
    },
}

// ============================================================================
// Environment
// ============================================================================

/// Environment dependencies for the registry
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryEnvironment {
    /// Highest price still admitted
    pub price_ceiling: Price,
}

impl RegistryEnvironment {
    /// Creates a `RegistryEnvironment`
    #[must_use]
    pub const fn new(price_ceiling: Price) -> Self {
        Self { price_ceiling }
    }

    /// Environment built from loaded configuration
    #[must_use]
    pub const fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.price_ceiling)
    }
}

impl Default for RegistryEnvironment {
    fn default() -> Self {
        Self::new(PRICE_CEILING)
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Store type driving the registry
pub type RegistryStore = Store<RegistryState, RegistryAction, RegistryEnvironment, RegistryReducer>;

/// Reducer for the registry aggregate
#[derive(Clone, Debug, Default)]
pub struct RegistryReducer;

impl RegistryReducer {
    /// Creates a new `RegistryReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn emit(notices: Notices) -> Effect {
        emit_all!(notices)
    }

    fn not_found(ticket_id: TicketId) -> SmallVec<[Effect; 4]> {
        tracing::warn!(%ticket_id, "Ticket not found");
        smallvec![Effect::emit(Notice::TicketNotFound { ticket_id })]
    }

    fn add_ticket(
        state: &mut RegistryState,
        ticket: Ticket,
        env: &RegistryEnvironment,
    ) -> SmallVec<[Effect; 4]> {
        match PriceRange::classify(ticket.price(), env.price_ceiling) {
            PriceRange::Cheap => {
                let admitted = Notice::TicketAdmitted {
                    passenger: ticket.full_name(),
                    arrival: ticket.arrival().to_string(),
                    destination: ticket.destination().to_string(),
                    price: ticket.price(),
                };
                let receipt = print_receipt(&ticket);
                tracing::info!(
                    ticket_id = %ticket.ticket_id(),
                    kind = ticket.kind(),
                    price = %ticket.price(),
                    "Ticket admitted"
                );
                state.admit(ticket);
                smallvec![Effect::emit(admitted), Effect::emit(receipt)]
            },
            PriceRange::Expensive => {
                tracing::warn!(
                    ticket_id = %ticket.ticket_id(),
                    price = %ticket.price(),
                    ceiling = %env.price_ceiling,
                    "Ticket rejected above price ceiling"
                );
                smallvec![Effect::emit(Notice::TicketRejected {
                    passenger: ticket.full_name(),
                })]
            },
        }
    }

    fn show_all_tickets(state: &RegistryState) -> SmallVec<[Effect; 4]> {
        if state.is_empty() {
            return smallvec![Effect::emit(Notice::NoTickets)];
        }
        let tickets = state.tickets().iter().map(TrainTicket::summary).collect();
        smallvec![Effect::emit(Notice::TicketListing { tickets })]
    }

    fn update_ticket<F>(
        state: &mut RegistryState,
        ticket_id: TicketId,
        update: F,
    ) -> SmallVec<[Effect; 4]>
    where
        F: FnOnce(&mut Ticket) -> Notices,
    {
        match state.get_mut(ticket_id) {
            Some(ticket) => smallvec![Self::emit(update(ticket))],
            None => Self::not_found(ticket_id),
        }
    }
}

impl Reducer for RegistryReducer {
    type State = RegistryState;
    type Action = RegistryAction;
    type Environment = RegistryEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        tracing::debug!(?action, held = state.count(), "Reducing registry action");

        match action {
            RegistryAction::AddTicket { ticket } => Self::add_ticket(state, ticket, env),

            RegistryAction::ShowAllTickets => Self::show_all_tickets(state),

            RegistryAction::CancelTicketById { ticket_id } => match state.cancel_by_id(ticket_id) {
                Some((_canceled, notices)) => smallvec![Self::emit(notices)],
                None => Self::not_found(ticket_id),
            },

            RegistryAction::ApplyDiscount { ticket_id } => {
                Self::update_ticket(state, ticket_id, TrainTicket::apply_discount)
            },

            RegistryAction::ChangeDestination {
                ticket_id,
                destination,
            } => Self::update_ticket(state, ticket_id, |ticket| {
                ticket.change_destination(&destination)
            }),

            RegistryAction::ChangeArrival { ticket_id, arrival } => {
                Self::update_ticket(state, ticket_id, |ticket| ticket.change_arrival(&arrival))
            },
        }
    }
}
