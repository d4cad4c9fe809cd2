//! Remove command handler.
//!
//! Deletes at most one entry from the invoking user's watchlist: the first
//! entry whose lowercase text contains the lowercase name given by the user.
//!
//! # Behavior
//!
//! - Matching is a case-insensitive substring search over the entry text
//! - Only the first match is ever removed, later duplicates stay
//! - A user without a stored list is treated as having an empty one, so the
//!   reply is the not-found message rather than a fault

use log::debug;

use crate::commands::{
    CommandContext, CommandResult,
    command::Command,
    markdown_response::{format_not_found, format_removed},
};

/// Finds the first entry matching the name and requests its removal.
///
/// # Returns
///
/// - `Some(CommandResult)`: Either the removed entry with `entry_to_remove`
///   set, or the not-found message with no state change
/// - `None`: Only if the command is not a `Remove` variant
pub fn handle_remove(context: &CommandContext, command: &Command) -> Option<CommandResult> {
    debug!("handling remove command: {:?}", command);

    let name = match command {
        Command::Remove { name } => name,
        _ => return None,
    };

    let result = match context.watchlist.iter().find(|entry| entry.matches(name)) {
        Some(entry) => CommandResult {
            response: format_removed(entry),
            entry_to_add: None,
            entry_to_remove: Some(entry.clone()),
        },
        None => {
            debug!("no entry matching '{}' for user {}", name, context.user_id);
            CommandResult {
                response: format_not_found(),
                entry_to_add: None,
                entry_to_remove: None,
            }
        }
    };

    debug!("remove command result {:?}", result);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::Entry;

    fn create_test_context(watchlist: Vec<Entry>) -> CommandContext {
        CommandContext {
            user_id: "@test_user:matrix.org".to_string(),
            watchlist,
        }
    }

    #[test]
    fn test_handle_remove_matches_case_insensitively() {
        let entry = Entry::new("qb", "cowboys", "dak prescott");
        let context = create_test_context(vec![entry.clone()]);
        let command = Command::Remove {
            name: "DAK".to_string(),
        };

        let result = handle_remove(&context, &command);

        assert!(result.is_some());
        let result = result.unwrap();
        assert_eq!(result.response, "Removed: QB | Cowboys | Dak Prescott");
        assert_eq!(result.entry_to_add, None);
        assert_eq!(result.entry_to_remove, Some(entry));
    }

    #[test]
    fn test_handle_remove_picks_first_match_only() {
        let first = Entry::new("qb", "cowboys", "dak prescott");
        let second = Entry::new("qb", "eagles", "jalen hurts");
        let context = create_test_context(vec![first.clone(), second]);
        let command = Command::Remove {
            name: "qb".to_string(),
        };

        let result = handle_remove(&context, &command).unwrap();

        assert_eq!(result.entry_to_remove, Some(first));
    }

    #[test]
    fn test_handle_remove_no_match() {
        let context = create_test_context(vec![Entry::new("qb", "cowboys", "dak prescott")]);
        let command = Command::Remove {
            name: "romo".to_string(),
        };

        let result = handle_remove(&context, &command).unwrap();

        assert_eq!(result.response, "Player not found in your watchlist.");
        assert_eq!(result.entry_to_add, None);
        assert_eq!(result.entry_to_remove, None);
    }

    #[test]
    fn test_handle_remove_empty_watchlist() {
        let context = create_test_context(vec![]);
        let command = Command::Remove {
            name: "dak".to_string(),
        };

        let result = handle_remove(&context, &command).unwrap();

        assert_eq!(result.response, "Player not found in your watchlist.");
        assert_eq!(result.entry_to_remove, None);
    }

    #[test]
    fn test_handle_remove_wrong_command_type() {
        let context = create_test_context(vec![]);

        let result = handle_remove(&context, &Command::Help);

        assert!(result.is_none());
    }
}
