//! Command action handlers.
//!
//! Individual handler functions for each bot action. Each handler processes
//! one [`Command`](crate::commands::command::Command) variant and returns a
//! [`CommandResult`](crate::commands::CommandResult).
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Receive the parsed command and, when needed, the execution context
//! 2. Compute the reply text
//! 3. Return a result with the Markdown response and optional state changes
//!
//! # Available Handlers
//!
//! - [`handle_add`] - Format a new entry and request its addition
//! - [`handle_remove`] - Find the first matching entry and request its removal
//! - [`handle_view`] - List the user's entries
//! - [`handle_help`] - Display help information
//!
//! # State Changes
//!
//! Handlers don't modify the watchlist directly. Instead, they return state
//! change requests via `entry_to_add` or `entry_to_remove` in the
//! [`CommandResult`](crate::commands::CommandResult).

mod add;
mod help;
mod remove;
mod view;

pub use crate::commands::actions::{
    add::handle_add, help::handle_help, remove::handle_remove, view::handle_view,
};
