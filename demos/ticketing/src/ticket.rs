//! Ticket entity and its variants.
//!
//! `TicketDetails` holds the fields every ticket shares. Each variant wraps
//! it and supplies its own discount rule through [`TrainTicket`]; a variant
//! without `apply_discount` does not compile. [`Ticket`] is the closed set of
//! variants the registry stores.

use crate::insurance::{Insurance, InsuranceCover};
use crate::notice::{Notice, Notices, TicketSummary};
use crate::types::{Price, PriceRange, TicketId};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Student tickets cost this fraction of the price
pub const STUDENT_DISCOUNT: f64 = 0.8;

/// Child tickets cost this fraction of the price
pub const CHILD_DISCOUNT: f64 = 0.5;

/// Insured tickets cost this fraction of the price
pub const INSURED_DISCOUNT: f64 = 0.9;

/// Oldest age that still counts as a child
pub const CHILD_AGE_LIMIT: u32 = 14;

// ============================================================================
// Base entity
// ============================================================================

/// Fields shared by every ticket variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketDetails {
    ticket_id: TicketId,
    arrival: String,
    destination: String,
    /// Current price; discounts compound on it
    pub price: Price,
    /// Passenger first name
    pub first_name: String,
    /// Passenger last name
    pub last_name: String,
    is_valid: bool,
    is_child: bool,
}

impl TicketDetails {
    /// Creates valid, non-child ticket details
    #[must_use]
    pub fn new(
        ticket_id: TicketId,
        arrival: impl Into<String>,
        destination: impl Into<String>,
        price: Price,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            ticket_id,
            arrival: arrival.into(),
            destination: destination.into(),
            price,
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_valid: true,
            is_child: false,
        }
    }

    /// Ticket identifier; fixed at construction
    #[must_use]
    pub const fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    /// Departure station
    #[must_use]
    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    /// Destination station
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// False once the ticket has been canceled
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Whether the passenger counts as a child
    #[must_use]
    pub const fn is_child(&self) -> bool {
        self.is_child
    }

    /// `"{first_name} {last_name}"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn scale_price(&mut self, factor: f64) -> Price {
        self.price = self.price.scaled(factor);
        self.price
    }
}

// ============================================================================
// Capability
// ============================================================================

/// Behaviour shared by every ticket variant
///
/// Implementors supply access to their [`TicketDetails`] and a discount
/// rule; everything else is provided.
pub trait TrainTicket {
    /// Shared ticket fields
    fn details(&self) -> &TicketDetails;

    /// Shared ticket fields, mutably
    fn details_mut(&mut self) -> &mut TicketDetails;

    /// Reduce the price by this variant's multiplier.
    ///
    /// Not guarded: applying twice compounds, and canceled tickets are
    /// discounted too.
    fn apply_discount(&mut self) -> Notices;

    /// Ticket identifier
    fn ticket_id(&self) -> TicketId {
        self.details().ticket_id()
    }

    /// Departure station
    fn arrival(&self) -> &str {
        self.details().arrival()
    }

    /// Destination station
    fn destination(&self) -> &str {
        self.details().destination()
    }

    /// Current price
    fn price(&self) -> Price {
        self.details().price
    }

    /// False once canceled
    fn is_valid(&self) -> bool {
        self.details().is_valid()
    }

    /// Whether the passenger counts as a child
    fn is_child(&self) -> bool {
        self.details().is_child()
    }

    /// Passenger first and last name
    fn full_name(&self) -> String {
        self.details().full_name()
    }

    /// Mark the ticket invalid.
    ///
    /// Repeated calls keep it invalid and report the cancellation again.
    fn cancel_ticket(&mut self) -> Notices {
        let details = self.details_mut();
        details.is_valid = false;
        tracing::info!(ticket_id = %details.ticket_id, "Ticket canceled");
        smallvec![Notice::TicketCanceled {
            ticket_id: details.ticket_id,
            passenger: details.full_name(),
        }]
    }

    /// Replace the destination; no validation
    fn change_destination(&mut self, new_destination: &str) -> Notices {
        let details = self.details_mut();
        details.destination = new_destination.to_string();
        smallvec![Notice::DestinationChanged {
            destination: details.destination.clone(),
        }]
    }

    /// Replace the departure station; no validation
    fn change_arrival(&mut self, new_arrival: &str) -> Notices {
        let details = self.details_mut();
        details.arrival = new_arrival.to_string();
        smallvec![Notice::ArrivalChanged {
            arrival: details.arrival.clone(),
        }]
    }

    /// Fields shown in receipts and listings
    fn summary(&self) -> TicketSummary {
        let details = self.details();
        TicketSummary {
            ticket_id: details.ticket_id,
            passenger: details.full_name(),
            arrival: details.arrival.clone(),
            destination: details.destination.clone(),
            price: details.price,
        }
    }
}

/// Classify a ticket against the default price ceiling
#[must_use]
pub fn check_price_range<T: TrainTicket + ?Sized>(ticket: &T) -> PriceRange {
    PriceRange::of(ticket.price())
}

// ============================================================================
// Variants
// ============================================================================

/// Ticket for a passenger with a student card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentTicket {
    details: TicketDetails,
    /// Student card identifier
    pub student_id: String,
}

impl StudentTicket {
    /// Creates a student ticket
    #[must_use]
    pub fn new(details: TicketDetails, student_id: impl Into<String>) -> Self {
        Self {
            details,
            student_id: student_id.into(),
        }
    }
}

impl TrainTicket for StudentTicket {
    fn details(&self) -> &TicketDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TicketDetails {
        &mut self.details
    }

    fn apply_discount(&mut self) -> Notices {
        let price = self.details.scale_price(STUDENT_DISCOUNT);
        smallvec![Notice::DiscountApplied { price }]
    }

    fn cancel_ticket(&mut self) -> Notices {
        let details = &mut self.details;
        details.is_valid = false;
        tracing::info!(ticket_id = %details.ticket_id, student_id = %self.student_id, "Student ticket canceled");
        smallvec![
            Notice::TicketCanceled {
                ticket_id: details.ticket_id,
                passenger: details.full_name(),
            },
            Notice::StudentTicketCanceled {
                student_id: self.student_id.clone(),
            },
        ]
    }
}

/// Ticket with a passenger age; half price up to [`CHILD_AGE_LIMIT`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildTicket {
    details: TicketDetails,
    /// Passenger age in years
    pub child_age: u32,
}

impl ChildTicket {
    /// Creates a child ticket; `is_child` is derived from the age
    #[must_use]
    pub fn new(mut details: TicketDetails, child_age: u32) -> Self {
        details.is_child = child_age <= CHILD_AGE_LIMIT;
        Self { details, child_age }
    }
}

impl TrainTicket for ChildTicket {
    fn details(&self) -> &TicketDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TicketDetails {
        &mut self.details
    }

    fn apply_discount(&mut self) -> Notices {
        if !self.details.is_child {
            return Notices::new();
        }
        let price = self.details.scale_price(CHILD_DISCOUNT);
        smallvec![Notice::ChildDiscountApplied { price }]
    }
}

/// Ticket composed with an insurance cover
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsuredTicket {
    details: TicketDetails,
    insurance: Insurance,
}

impl InsuredTicket {
    /// Creates an insured ticket owning `insurance`
    #[must_use]
    pub const fn new(details: TicketDetails, insurance: Insurance) -> Self {
        Self { details, insurance }
    }
}

impl TrainTicket for InsuredTicket {
    fn details(&self) -> &TicketDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TicketDetails {
        &mut self.details
    }

    // Flat multiplier; the covered amount plays no part.
    fn apply_discount(&mut self) -> Notices {
        let price = self.details.scale_price(INSURED_DISCOUNT);
        smallvec![Notice::InsuredDiscountApplied { price }]
    }
}

impl InsuranceCover for InsuredTicket {
    fn insurance(&self) -> &Insurance {
        &self.insurance
    }
}

// ============================================================================
// Closed set of variants
// ============================================================================

/// Any ticket variant, as stored by the registry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ticket {
    /// Student ticket
    Student(StudentTicket),
    /// Child ticket
    Child(ChildTicket),
    /// Insured ticket
    Insured(InsuredTicket),
}

impl Ticket {
    /// Short variant name for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Student(_) => "student",
            Self::Child(_) => "child",
            Self::Insured(_) => "insured",
        }
    }
}

impl TrainTicket for Ticket {
    fn details(&self) -> &TicketDetails {
        match self {
            Self::Student(ticket) => ticket.details(),
            Self::Child(ticket) => ticket.details(),
            Self::Insured(ticket) => ticket.details(),
        }
    }

    fn details_mut(&mut self) -> &mut TicketDetails {
        match self {
            Self::Student(ticket) => ticket.details_mut(),
            Self::Child(ticket) => ticket.details_mut(),
            Self::Insured(ticket) => ticket.details_mut(),
        }
    }

    fn apply_discount(&mut self) -> Notices {
        match self {
            Self::Student(ticket) => ticket.apply_discount(),
            Self::Child(ticket) => ticket.apply_discount(),
            Self::Insured(ticket) => ticket.apply_discount(),
        }
    }

    fn cancel_ticket(&mut self) -> Notices {
        match self {
            Self::Student(ticket) => ticket.cancel_ticket(),
            Self::Child(ticket) => ticket.cancel_ticket(),
            Self::Insured(ticket) => ticket.cancel_ticket(),
        }
    }
}

impl From<StudentTicket> for Ticket {
    fn from(ticket: StudentTicket) -> Self {
        Self::Student(ticket)
    }
}

impl From<ChildTicket> for Ticket {
    fn from(ticket: ChildTicket) -> Self {
        Self::Child(ticket)
    }
}

impl From<InsuredTicket> for Ticket {
    fn from(ticket: InsuredTicket) -> Self {
        Self::Insured(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn details(id: u32, price: f64) -> TicketDetails {
        TicketDetails::new(
            TicketId::new(id),
            "Lviv",
            "Kyiv",
            Price::new(price),
            "Maria",
            "Ivanenko",
        )
    }

    #[test]
    fn test_new_ticket_is_valid_and_not_child() {
        let ticket = StudentTicket::new(details(102, 80.0), "ST123");

        assert!(ticket.is_valid());
        assert!(!ticket.is_child());
        assert_eq!(ticket.full_name(), "Maria Ivanenko");
        assert_eq!(ticket.ticket_id(), TicketId::new(102));
    }

    #[test]
    fn test_student_discount() {
        let mut ticket = StudentTicket::new(details(102, 80.0), "ST123");
        let notices = ticket.apply_discount();

        assert!((ticket.price().value() - 64.0).abs() < EPSILON);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].to_string(), "Discount applied. New price: 64.00");
    }

    #[test]
    fn test_discount_compounds() {
        let mut ticket = StudentTicket::new(details(102, 100.0), "ST123");
        ticket.apply_discount();
        ticket.apply_discount();

        assert!((ticket.price().value() - 64.0).abs() < EPSILON);
    }

    #[test]
    fn test_child_discount_depends_on_age() {
        let mut young = ChildTicket::new(details(103, 60.0), 7);
        let mut boundary = ChildTicket::new(details(104, 60.0), 14);
        let mut teen = ChildTicket::new(details(105, 60.0), 15);

        assert!(young.is_child());
        assert!(boundary.is_child());
        assert!(!teen.is_child());

        assert_eq!(young.apply_discount().len(), 1);
        assert_eq!(boundary.apply_discount().len(), 1);
        assert!(teen.apply_discount().is_empty());

        assert!((young.price().value() - 30.0).abs() < EPSILON);
        assert!((boundary.price().value() - 30.0).abs() < EPSILON);
        assert!((teen.price().value() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_insured_discount_ignores_cover() {
        let mut small = InsuredTicket::new(details(105, 200.0), Insurance::new("INS1", 10.0));
        let mut large = InsuredTicket::new(details(106, 200.0), Insurance::new("INS2", 50000.0));
        small.apply_discount();
        large.apply_discount();

        assert!((small.price().value() - 180.0).abs() < EPSILON);
        assert!((large.price().value() - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_cancel_is_idempotent_but_reports_each_time() {
        let mut ticket = ChildTicket::new(details(103, 60.0), 7);

        let first = ticket.cancel_ticket();
        let second = ticket.cancel_ticket();

        assert!(!ticket.is_valid());
        assert_eq!(first, second);
        assert_eq!(
            first[0].to_string(),
            "\nTicket 103 for Maria Ivanenko has been canceled.\n"
        );
    }

    #[test]
    fn test_student_cancel_adds_student_notice() {
        let mut ticket = StudentTicket::new(details(102, 80.0), "ST123");
        let notices = ticket.cancel_ticket();

        assert!(!ticket.is_valid());
        assert_eq!(notices.len(), 2);
        assert!(matches!(notices[0], Notice::TicketCanceled { .. }));
        assert_eq!(
            notices[1],
            Notice::StudentTicketCanceled {
                student_id: "ST123".to_string()
            }
        );
    }

    #[test]
    fn test_enum_dispatch_keeps_student_cancel_override() {
        let mut ticket = Ticket::from(StudentTicket::new(details(102, 80.0), "ST123"));

        assert_eq!(ticket.cancel_ticket().len(), 2);
        assert!(!ticket.is_valid());
    }

    #[test]
    fn test_discount_applies_to_canceled_ticket() {
        let mut ticket = Ticket::from(StudentTicket::new(details(102, 80.0), "ST123"));
        ticket.cancel_ticket();
        ticket.apply_discount();

        assert!((ticket.price().value() - 64.0).abs() < EPSILON);
    }

    #[test]
    fn test_change_route_keeps_id() {
        let mut ticket = Ticket::from(ChildTicket::new(details(103, 60.0), 7));

        let to = ticket.change_destination("Odesa");
        let from = ticket.change_arrival("Dnipro");

        assert_eq!(ticket.destination(), "Odesa");
        assert_eq!(ticket.arrival(), "Dnipro");
        assert_eq!(ticket.ticket_id(), TicketId::new(103));
        assert_eq!(to[0].to_string(), "Destination changed to: Odesa");
        assert_eq!(from[0].to_string(), "Arrival station changed to: Dnipro");
    }

    #[test]
    fn test_check_price_range() {
        let cheap = StudentTicket::new(details(1, 100.0), "S");
        let pricey = InsuredTicket::new(details(2, 200.0), Insurance::new("I", 1.0));

        assert_eq!(check_price_range(&cheap), PriceRange::Cheap);
        assert_eq!(check_price_range(&pricey), PriceRange::Expensive);
    }

    #[test]
    fn test_ticket_serializes_with_kind_tag() {
        let ticket = Ticket::from(ChildTicket::new(details(103, 60.0), 7));
        let json = serde_json::to_value(&ticket).unwrap_or_default();

        assert_eq!(json["kind"], "child");
        assert_eq!(json["child_age"], 7);

        let back: Option<Ticket> = serde_json::from_value(json).ok();
        assert_eq!(back, Some(ticket));
    }
}
