// LogSift - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
