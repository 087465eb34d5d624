// LogCard - core/mod.rs
//
// Core layer: entry model, node tree, card and page rendering, export.
// Dependencies: standard library plus serialisation crates.
// Must NOT depend on: platform or app.

pub mod card;
pub mod export;
pub mod markup;
pub mod model;
pub mod page;
