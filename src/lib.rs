// LogSift - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// potential future programmatic use. The binary in `main.rs` is a thin
// CLI wrapper over `app::run`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
