//! End-to-end tests driving the registry through the Store.
//!
//! Run with: `cargo test --test scenario_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use rail_ticketing::demo::{run_scenario, CHILD_TICKET_ID, INSURED_TICKET_ID, STUDENT_TICKET_ID};
use rail_ticketing::{
    ChildTicket, Price, RegistryAction, RegistryEnvironment, RegistryReducer, RegistryState,
    RegistryStore, StudentTicket, TicketDetails, TicketId, TrainTicket,
};
use rail_ticketing_testing::{init_test_tracing, RecordingConsole};
use std::sync::Arc;

fn store_with(console: &Arc<RecordingConsole>, env: RegistryEnvironment) -> RegistryStore {
    RegistryStore::new(RegistryState::new(), RegistryReducer::new(), env, console.clone())
}

#[test]
fn test_demo_scenario_transcript() {
    init_test_tracing();
    let console = Arc::new(RecordingConsole::new());
    let store = store_with(&console, RegistryEnvironment::default());

    let insured = run_scenario(&store).unwrap();
    let blocks = console.blocks();

    // Student and child admitted with receipts; insured rejected.
    assert!(console.contains("Ticket for Maria Ivanenko added from Lviv to Kyiv, price: 80.00"));
    assert!(console.contains("Ticket for Ivan Petrenko added from Odesa to Lviv, price: 60.00"));
    assert!(console.contains("Ticket price for Anna Kovalenko is invalid. Exceeds budget."));
    assert_eq!(blocks.iter().filter(|b| b.contains("Receipt:")).count(), 2);

    // Discounts on the held tickets.
    assert!(console.contains("Discount applied. New price: 64.00"));
    assert!(console.contains("Child discount applied. New price: 30.00"));
    assert!(!console.contains("not found"));

    // Cover of the rejected ticket is still reachable.
    assert!(console.contains("Ticket 105 for Anna Kovalenko is insured for 50000"));
    assert_eq!(insured.ticket_id(), INSURED_TICKET_ID);

    // Cancellation of the student ticket, both notices.
    assert!(console.contains("Ticket 102 for Maria Ivanenko has been canceled."));
    assert!(console.contains("Student ticket ST123 has been canceled."));

    // Final listing shows only the discounted child ticket.
    let last = blocks.last().unwrap();
    assert!(last.contains("Available Tickets:"));
    assert!(last.contains("Ticket ID: 103"));
    assert!(last.contains("Price: 30.00 USD"));
    assert!(!last.contains("Ticket ID: 102"));

    let ids: Vec<TicketId> = store
        .state(|s| s.tickets().iter().map(TrainTicket::ticket_id).collect())
        .unwrap();
    assert_eq!(ids, vec![CHILD_TICKET_ID]);
    assert!(!ids.contains(&STUDENT_TICKET_ID));
}

#[test]
fn test_first_listing_precedes_discounts() {
    let console = Arc::new(RecordingConsole::new());
    let store = store_with(&console, RegistryEnvironment::default());

    run_scenario(&store).unwrap();
    let blocks = console.blocks();

    let first_listing = blocks
        .iter()
        .position(|b| b.contains("Available Tickets:"))
        .unwrap();
    assert!(blocks[first_listing].contains("Price: 80.00 USD"));
    assert!(blocks[first_listing].contains("Price: 60.00 USD"));
    assert!(!blocks[first_listing].contains("Ticket ID: 105"));
}

#[test]
fn test_scenario_with_lower_ceiling_rejects_everything() {
    let console = Arc::new(RecordingConsole::new());
    let store = store_with(&console, RegistryEnvironment::new(Price::new(50.0)));

    run_scenario(&store).unwrap();

    assert!(store.state(RegistryState::is_empty).unwrap());
    // Rejected tickets are still discounted on the caller's side.
    assert!(console.contains("Discount applied. New price: 64.00"));
    assert!(console.contains("Child discount applied. New price: 30.00"));
    let not_found: Vec<String> = console
        .blocks()
        .into_iter()
        .filter(|b| b.contains("not found"))
        .collect();
    assert_eq!(not_found, vec!["Ticket with ID 102 not found.".to_string()]);
    assert_eq!(
        console.blocks().last().map(String::as_str),
        Some("\nNo available tickets.")
    );
}

#[test]
fn test_cancel_then_listing_through_store() {
    let console = Arc::new(RecordingConsole::new());
    let store = store_with(&console, RegistryEnvironment::default());

    let details = |id: u32| {
        TicketDetails::new(TicketId::new(id), "Lviv", "Kyiv", Price::new(40.0), "Olena", "Shevchenko")
    };
    store
        .send(RegistryAction::AddTicket {
            ticket: StudentTicket::new(details(1), "ST1").into(),
        })
        .unwrap();
    store
        .send(RegistryAction::AddTicket {
            ticket: ChildTicket::new(details(2), 10).into(),
        })
        .unwrap();
    console.clear();

    store
        .send(RegistryAction::CancelTicketById {
            ticket_id: TicketId::new(2),
        })
        .unwrap();
    store
        .send(RegistryAction::CancelTicketById {
            ticket_id: TicketId::new(2),
        })
        .unwrap();
    store.send(RegistryAction::ShowAllTickets).unwrap();

    // Child cancellation is a single notice; no student follow-up.
    let blocks = console.blocks();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], "\nTicket 2 for Olena Shevchenko has been canceled.\n");
    assert_eq!(blocks[1], "Ticket with ID 2 not found.");
    assert!(blocks[2].contains("Ticket ID: 1"));
    assert!(!blocks[2].contains("Ticket ID: 2"));
}
