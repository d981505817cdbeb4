// This module groups wallet lifecycle events in 2018 style.
//
// Structure
// - event.rs + event/: wallet domain events consumed by the expiration queue
// - logging_event.rs + logging_event/: audit events forwarded by the CDC queue

pub mod event;
pub mod logging_event;
