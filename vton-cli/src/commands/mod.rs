//! Command handlers for the vton-cli surface.

pub mod probe;
pub mod setup;

pub use probe::handle_probe_command;
pub use setup::{handle_setup_command, SetupCommands};
