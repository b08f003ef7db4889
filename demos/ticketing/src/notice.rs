//! Console notices emitted by ticket and registry operations.
//!
//! Operations never print. They return `Notice` values and the caller (or
//! the store, through `Effect::Emit`) decides where the text goes. The
//! `Display` impls produce the human-readable transcript.

use crate::types::{Price, TicketId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Notices returned by a single operation, usually one or two
pub type Notices = SmallVec<[Notice; 2]>;

const RECEIPT_RULE: usize = 30;
const LISTING_RULE: usize = 50;

/// The fields shown for a ticket in receipts and listings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    /// Ticket identifier
    pub ticket_id: TicketId,
    /// Passenger full name
    pub passenger: String,
    /// Departure station
    pub arrival: String,
    /// Destination station
    pub destination: String,
    /// Current price
    pub price: Price,
}

impl TicketSummary {
    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket ID: {}", self.ticket_id)?;
        writeln!(f, "Passenger: {}", self.passenger)?;
        writeln!(f, "Route: {} to {}", self.arrival, self.destination)?;
        writeln!(f, "Price: {} USD", self.price)
    }
}

/// One console message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// A ticket was marked invalid
    TicketCanceled {
        /// Canceled ticket
        ticket_id: TicketId,
        /// Passenger full name
        passenger: String,
    },

    /// Follow-up for student tickets
    StudentTicketCanceled {
        /// Student card identifier
        student_id: String,
    },

    /// Destination was changed
    DestinationChanged {
        /// New destination
        destination: String,
    },

    /// Departure station was changed
    ArrivalChanged {
        /// New departure station
        arrival: String,
    },

    /// Student discount applied
    DiscountApplied {
        /// Price after the discount
        price: Price,
    },

    /// Child discount applied
    ChildDiscountApplied {
        /// Price after the discount
        price: Price,
    },

    /// Insured-ticket discount applied
    InsuredDiscountApplied {
        /// Price after the discount
        price: Price,
    },

    /// Insurance cover applied
    InsuranceApplied {
        /// Covered amount
        amount: f64,
    },

    /// Insurance details of an insured ticket
    InsuranceDisplayed {
        /// Insured ticket
        ticket_id: TicketId,
        /// Passenger full name
        passenger: String,
        /// Covered amount
        amount: f64,
    },

    /// Ticket accepted by the registry
    TicketAdmitted {
        /// Passenger full name
        passenger: String,
        /// Departure station
        arrival: String,
        /// Destination station
        destination: String,
        /// Price at admission
        price: Price,
    },

    /// Ticket refused by the admission gate
    TicketRejected {
        /// Passenger full name
        passenger: String,
    },

    /// Purchase receipt
    Receipt(TicketSummary),

    /// Every ticket currently held, in order
    TicketListing {
        /// One summary per held ticket
        tickets: Vec<TicketSummary>,
    },

    /// Listing requested on an empty registry
    NoTickets,

    /// No ticket with this id is held
    TicketNotFound {
        /// Requested id
        ticket_id: TicketId,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TicketCanceled {
                ticket_id,
                passenger,
            } => write!(f, "\nTicket {ticket_id} for {passenger} has been canceled.\n"),
            Self::StudentTicketCanceled { student_id } => {
                write!(f, "Student ticket {student_id} has been canceled.")
            },
            Self::DestinationChanged { destination } => {
                write!(f, "Destination changed to: {destination}")
            },
            Self::ArrivalChanged { arrival } => write!(f, "Arrival station changed to: {arrival}"),
            Self::DiscountApplied { price } => write!(f, "Discount applied. New price: {price}"),
            Self::ChildDiscountApplied { price } => {
                write!(f, "Child discount applied. New price: {price}")
            },
            Self::InsuredDiscountApplied { price } => {
                write!(f, "Discount applied for insured ticket. New price: {price}")
            },
            Self::InsuranceApplied { amount } => write!(f, "Insurance of {amount} applied."),
            Self::InsuranceDisplayed {
                ticket_id,
                passenger,
                amount,
            } => write!(f, "Ticket {ticket_id} for {passenger} is insured for {amount}"),
            Self::TicketAdmitted {
                passenger,
                arrival,
                destination,
                price,
            } => write!(
                f,
                "Ticket for {passenger} added from {arrival} to {destination}, price: {price}"
            ),
            Self::TicketRejected { passenger } => {
                write!(f, "Ticket price for {passenger} is invalid. Exceeds budget.")
            },
            Self::Receipt(summary) => {
                let rule = "-".repeat(RECEIPT_RULE);
                writeln!(f, "\nReceipt:")?;
                writeln!(f, "{rule}")?;
                summary.write_fields(f)?;
                writeln!(f, "{rule}")?;
                writeln!(f, "Thank you for your purchase!")
            },
            Self::TicketListing { tickets } => {
                let rule = "-".repeat(LISTING_RULE);
                writeln!(f, "\nAvailable Tickets:")?;
                write!(f, "{rule}")?;
                for summary in tickets {
                    writeln!(f)?;
                    summary.write_fields(f)?;
                    write!(f, "{rule}")?;
                }
                Ok(())
            },
            Self::NoTickets => write!(f, "\nNo available tickets."),
            Self::TicketNotFound { ticket_id } => write!(f, "Ticket with ID {ticket_id} not found."),
        }
    }
}
