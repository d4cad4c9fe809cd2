//! Help command handler.
//!
//! Displays help information listing the available actions and their syntax.
//!
//! This is a stateless command that always returns the same help message.

use log::debug;

use crate::commands::{CommandResult, markdown_response::format_help};

/// Returns formatted help information about available commands.
///
/// This command is read-only and doesn't modify any state.
pub fn handle_help() -> CommandResult {
    debug!("handling help command");

    CommandResult {
        response: format_help(),
        entry_to_add: None,
        entry_to_remove: None,
    }
}
