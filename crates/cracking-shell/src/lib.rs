//! cracking-shell library root.
//!
//! The application state container and its reducer, the text views, the
//! line-command parser and the shell configuration. Exposed as a library
//! so integration tests can drive a whole session without a terminal.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod view;
