//! The fixed demonstration scenario run by the `demo` binary.

use crate::insurance::{Insurance, InsuranceCover};
use crate::registry::{RegistryAction, RegistryStore};
use crate::ticket::{ChildTicket, InsuredTicket, StudentTicket, TicketDetails, TrainTicket};
use crate::types::{Price, TicketId};
use rail_ticketing_runtime::StoreError;

/// Student ticket of the scenario; canceled at the end
pub const STUDENT_TICKET_ID: TicketId = TicketId::new(102);

/// Child ticket of the scenario; the only one left listed
pub const CHILD_TICKET_ID: TicketId = TicketId::new(103);

/// Insured ticket of the scenario; too expensive to be admitted
pub const INSURED_TICKET_ID: TicketId = TicketId::new(105);

/// Run the scenario against `store`.
///
/// Adds a student, a child and an insured ticket and lists them. Discounts
/// the student and child tickets whether or not they were admitted, shows
/// the cover of the rejected insured ticket, cancels the student ticket and
/// lists again. Returns the insured ticket, which the registry refused and
/// the caller still owns.
///
/// # Errors
///
/// Propagates [`StoreError`] from the store.
pub fn run_scenario(store: &RegistryStore) -> Result<InsuredTicket, StoreError> {
    let mut student = StudentTicket::new(
        TicketDetails::new(STUDENT_TICKET_ID, "Lviv", "Kyiv", Price::new(80.0), "Maria", "Ivanenko"),
        "ST123",
    );
    let mut child = ChildTicket::new(
        TicketDetails::new(CHILD_TICKET_ID, "Odesa", "Lviv", Price::new(60.0), "Ivan", "Petrenko"),
        7,
    );
    let insured = InsuredTicket::new(
        TicketDetails::new(
            INSURED_TICKET_ID,
            "Kharkiv",
            "Kyiv",
            Price::new(200.0),
            "Anna",
            "Kovalenko",
        ),
        Insurance::new("INS789", 50000.0),
    );

    store.send(RegistryAction::AddTicket {
        ticket: student.clone().into(),
    })?;
    store.send(RegistryAction::AddTicket {
        ticket: child.clone().into(),
    })?;
    store.send(RegistryAction::AddTicket {
        ticket: insured.clone().into(),
    })?;

    store.send(RegistryAction::ShowAllTickets)?;

    apply_discount(store, &mut student)?;
    apply_discount(store, &mut child)?;
    store.emit([insured.display_insurance()]);

    store.send(RegistryAction::CancelTicketById {
        ticket_id: STUDENT_TICKET_ID,
    })?;
    store.send(RegistryAction::ShowAllTickets)?;

    Ok(insured)
}

/// Discount the registry's ticket when it holds one with this id, otherwise
/// the caller's own copy.
fn apply_discount<T: TrainTicket>(store: &RegistryStore, ticket: &mut T) -> Result<(), StoreError> {
    let ticket_id = ticket.ticket_id();
    if store.state(|registry| registry.contains(ticket_id))? {
        store.send(RegistryAction::ApplyDiscount { ticket_id })
    } else {
        tracing::debug!(%ticket_id, "Discounting ticket not held by the registry");
        store.emit(ticket.apply_discount());
        Ok(())
    }
}
