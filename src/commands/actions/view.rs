//! View command handler.
//!
//! Lists the invoking user's watchlist entries, one per line, in insertion
//! order. An empty or absent list produces the empty-list message.
//!
//! This is a read-only command that never changes state.

use log::debug;

use crate::commands::{CommandContext, CommandResult, markdown_response::format_watchlist};

/// Lists the user's watchlist entries.
///
/// Formats the entries from the context snapshot into a Markdown listing.
/// Returns the empty-list message when the user has no entries.
pub fn handle_view(context: &CommandContext) -> CommandResult {
    debug!("handling view command");

    let result = CommandResult {
        response: format_watchlist(&context.watchlist),
        entry_to_add: None,
        entry_to_remove: None,
    };

    debug!("view command result {:?}", result);

    result
}
