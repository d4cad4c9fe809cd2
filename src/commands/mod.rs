//! Bot command parsing and response formatting.
//!
//! This module provides the complete command processing pipeline for the
//! scout bot, letting Matrix users manage their personal player watchlist.
//!
//! # Overview
//!
//! The commands module handles the entire lifecycle of bot commands:
//! 1. **Parsing** - Converting Matrix messages into structured [`command::Command`] enums
//! 2. **Validation** - Ensuring commands have correct syntax and required arguments
//! 3. **Execution** - Routing commands to specialized handlers
//! 4. **Response** - Formatting results as Markdown for Matrix display
//! 5. **State Changes** - Describing watchlist mutations for the caller to apply
//!
//! # Command Structure
//!
//! All commands follow the format: `!scout <action> [args...]`
//!
//! | Action | Arguments | Description |
//! |--------|-----------|-------------|
//! | `add` | `<position> <team> <name>` | Add a player to the watchlist |
//! | `remove` | `<name>` | Remove the first matching player |
//! | `view` | None | List the watchlist entries |
//! | `help` | None | Display help information |
//!
//! The position and the team are single words; every word after them belongs
//! to the player name, so multi-word names need no quoting. Any other action
//! word gets an invalid-action reply.
//!
//! # Error Handling
//!
//! The module distinguishes between two error categories:
//!
//! - **Silent Errors** ([`CommandParseError::NotForBot`]): Messages that
//!   aren't commands or are for a different bot. These get no response.
//! - **User Errors** ([`CommandParseError::InvalidCommand`]): Invalid action
//!   or missing arguments. These carry a user-facing error message.
//!
//! # State Changes
//!
//! Command handlers never mutate the watchlist directly. They return state
//! change requests through `entry_to_add` and `entry_to_remove` in the
//! [`CommandResult`]; the bot applies those to the
//! [`WatchlistController`](crate::watchlist::WatchlistController) and sends
//! the response.
//!
//! # Module Organization
//!
//! - [`commander`] - Main orchestrator for parsing and executing commands
//! - [`command`] - Command enum definitions and parsing logic
//! - [`actions`] - Individual command handler implementations
//! - [`markdown_response`] - Response formatting utilities

mod actions;
mod command;
mod commander;
mod markdown_response;

pub use crate::commands::commander::Commander;
use crate::watchlist::Entry;

/// Runtime context for command execution.
///
/// Carries the snapshot of state a handler needs: the invoking user's id and
/// a copy of that user's current watchlist.
#[derive(Debug)]
pub struct CommandContext {
    /// Matrix user id of the command issuer
    pub user_id: String,
    /// Snapshot of the issuer's watchlist entries, in insertion order
    pub watchlist: Vec<Entry>,
}

/// Result of command execution.
///
/// Contains the reply to send to the user and the watchlist changes to
/// apply. Handlers describe mutations here instead of performing them, so the
/// caller stays in control of the store.
#[derive(Debug)]
pub struct CommandResult {
    /// Markdown-formatted response message
    pub response: String,
    /// Optional entry to append to the issuer's watchlist
    pub entry_to_add: Option<Entry>,
    /// Optional entry to delete from the issuer's watchlist
    pub entry_to_remove: Option<Entry>,
}

/// Errors that can occur during command parsing.
///
/// Distinguishes errors that should produce a reply from those that must be
/// ignored silently.
#[derive(Debug)]
pub enum CommandParseError {
    /// Message is not a command or is for a different bot.
    ///
    /// Handled silently, without responding to the user.
    NotForBot,
    /// Action or arguments are invalid.
    ///
    /// Contains a user-facing error message to send back.
    InvalidCommand(String),
}
