// LogCard - platform/mod.rs
//
// Platform abstraction layer: directory resolution and config.toml.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: app.

pub mod config;
