//! Markdown response formatters for bot commands.
//!
//! This module provides functions to format bot responses in Markdown format
//! for display in Matrix chat rooms. All responses are designed to be
//! user-friendly and informative.

use crate::watchlist::Entry;

/// Formats the help message showing available bot commands.
///
/// # Examples
///
/// ```
/// # use scout::commands::markdown_response::format_help;
/// let help = format_help();
/// assert!(help.contains("Commands:"));
/// ```
pub fn format_help() -> String {
    let body = "Commands:\n\
        - `add <position> <team> <name>`: add a player to your watchlist\n\
        - `remove <name>`: remove the first player whose entry matches the name\n\
        - `view`: list the players on your watchlist\n\
        - `help`: show this help message\n\n\
        Watchlists are kept per user, so everyone manages their own list.";

    body.to_owned()
}

/// Formats a response for an unrecognized action word.
///
/// # Examples
///
/// ```
/// # use scout::commands::markdown_response::format_invalid_action;
/// let msg = format_invalid_action();
/// assert!(msg.contains("Invalid action"));
/// ```
pub fn format_invalid_action() -> String {
    "Invalid action. Use: add, remove, or view.".to_owned()
}

/// Formats an error response for an add action with missing arguments.
///
/// # Examples
///
/// ```
/// # use scout::commands::markdown_response::format_invalid_add;
/// let msg = format_invalid_add();
/// assert!(msg.contains("Usage:"));
/// ```
pub fn format_invalid_add() -> String {
    "Invalid add command. Usage: `!scout add <position> <team> <name>`".to_owned()
}

/// Formats an error response for a remove action with a missing name.
///
/// # Examples
///
/// ```
/// # use scout::commands::markdown_response::format_invalid_remove;
/// let msg = format_invalid_remove();
/// assert!(msg.contains("Usage:"));
/// ```
pub fn format_invalid_remove() -> String {
    "Invalid remove command. Usage: `!scout remove <player name>`".to_owned()
}

/// Formats a confirmation for a newly added entry.
///
/// # Arguments
///
/// * `entry` - The entry that was added to the watchlist
pub fn format_added(entry: &Entry) -> String {
    format!("Added: {}", entry)
}

/// Formats a confirmation for a removed entry.
///
/// # Arguments
///
/// * `entry` - The entry that was removed from the watchlist
pub fn format_removed(entry: &Entry) -> String {
    format!("Removed: {}", entry)
}

/// Formats the reply for a remove action that matched no entry.
pub fn format_not_found() -> String {
    "Player not found in your watchlist.".to_owned()
}

/// Formats the watchlist listing, one entry per line.
///
/// # Arguments
///
/// * `entries` - The user's entries, in insertion order
///
/// # Returns
///
/// A Markdown-formatted listing, or the empty-list message if there are no
/// entries.
///
/// # Examples
///
/// ```
/// # use scout::commands::markdown_response::format_watchlist;
/// let output = format_watchlist(&[]);
/// assert_eq!(output, "Your watchlist is empty.");
/// ```
pub fn format_watchlist(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "Your watchlist is empty.".to_owned();
    }

    let listing = entries
        .iter()
        .map(Entry::to_string)
        .collect::<Vec<String>>()
        .join("\n");

    format!("**Your Watchlist:**\n{}", listing)
}
