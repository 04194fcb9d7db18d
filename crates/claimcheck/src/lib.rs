//! claimcheck library - exposes modules for testing

pub mod cli;
pub mod errors;
pub mod logging;
pub mod validate_command;
