// LogCard - app/mod.rs
//
// Application layer: the persisted event log and event recording.
// Depends on core and util; never on platform.

pub mod events;
pub mod store;
