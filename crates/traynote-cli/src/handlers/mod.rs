//! Command handlers that delegate to `AppCore`.
//!
//! Handlers parse CLI-specific input, call one core operation and format
//! the result for the terminal. No settings or note logic lives here.

pub mod note;
pub mod paths;
pub mod run;
pub mod settings;
