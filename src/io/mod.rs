/// Command-line parsing and session wiring
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Terminal operator implementation
pub mod console;
/// Error types and helpers
pub mod error;
/// PNG preview export
pub mod image;
