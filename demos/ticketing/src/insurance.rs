//! Insurance cover that can be composed onto a ticket.

use crate::notice::Notice;
use crate::ticket::TrainTicket;
use serde::{Deserialize, Serialize};

/// An insurance policy attached to one ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    /// Policy identifier
    pub insurance_id: String,
    /// Covered amount; fixed at construction
    pub insurance_amount: f64,
}

impl Insurance {
    /// Creates a policy
    #[must_use]
    pub fn new(insurance_id: impl Into<String>, insurance_amount: f64) -> Self {
        Self {
            insurance_id: insurance_id.into(),
            insurance_amount,
        }
    }

    /// Report the covered amount. Changes nothing.
    #[must_use]
    pub fn apply_insurance(&self) -> Notice {
        Notice::InsuranceApplied {
            amount: self.insurance_amount,
        }
    }
}

/// A ticket that also carries insurance cover
pub trait InsuranceCover: TrainTicket {
    /// The attached policy
    fn insurance(&self) -> &Insurance;

    /// Report the covered amount
    fn apply_insurance(&self) -> Notice {
        self.insurance().apply_insurance()
    }

    /// Passenger, ticket id and covered amount
    fn display_insurance(&self) -> Notice {
        Notice::InsuranceDisplayed {
            ticket_id: self.ticket_id(),
            passenger: self.full_name(),
            amount: self.insurance().insurance_amount,
        }
    }
}
