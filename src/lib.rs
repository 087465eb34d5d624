// LogCard - lib.rs
//
// Library entry point, exposing the card builder, page rendering, event log
// store, and configuration for integration testing and programmatic use.
//
// The CLI lives in `main.rs` and is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
