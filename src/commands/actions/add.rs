//! Add command handler.
//!
//! Formats a new watchlist entry from the player's position, team, and name,
//! and requests its addition to the invoking user's list.
//!
//! # Behavior
//!
//! - The entry text is `"<POSITION> | <Team> | <Name>"` (position uppercased,
//!   team and name title-cased)
//! - Entries are not deduplicated, adding the same player twice stores two
//!   entries
//! - Argument presence is enforced at parse time, so this handler always
//!   succeeds for an `Add` command

use log::debug;

use crate::{
    commands::{CommandResult, command::Command, markdown_response::format_added},
    watchlist::Entry,
};

/// Formats an entry for the player and requests its addition.
///
/// # Returns
///
/// - `Some(CommandResult)`: Confirmation message with `entry_to_add` set
/// - `None`: Only if the command is not an `Add` variant
pub fn handle_add(command: &Command) -> Option<CommandResult> {
    debug!("handling add command: {:?}", command);

    let (position, team, name) = match command {
        Command::Add {
            position,
            team,
            name,
        } => (position, team, name),
        _ => return None,
    };

    let entry = Entry::new(position, team, name);

    let result = CommandResult {
        response: format_added(&entry),
        entry_to_add: Some(entry),
        entry_to_remove: None,
    };

    debug!("add command result {:?}", result);

    Some(result)
}
