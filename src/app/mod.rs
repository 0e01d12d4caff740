// LogSift - app/mod.rs
//
// Application layer: run orchestration.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod run;
