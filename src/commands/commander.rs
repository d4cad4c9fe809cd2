//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main
//! entry point for processing bot commands. It coordinates command parsing
//! and execution, routing commands to their appropriate handlers.
//!
//! # Architecture
//!
//! The Commander follows a two-phase processing model:
//!
//! 1. **Parsing Phase** - Validates and parses raw message text into structured [`Command`] enums
//! 2. **Execution Phase** - Routes parsed commands to specialized handlers that produce results
//!
//! # Flow
//!
//! ```text
//! Matrix Message → parse() → Command → execute() → CommandResult
//! ```

use command_parser::Parser;

use crate::commands::{
    CommandContext, CommandParseError, CommandResult,
    actions::{handle_add, handle_help, handle_remove, handle_view},
    command::{Command, format_command_error},
};

/// Command orchestrator for parsing and executing bot commands.
///
/// The Commander is responsible for:
/// - Parsing raw message text into structured commands
/// - Validating the action word and its arguments
/// - Routing commands to appropriate handlers
/// - Converting errors into user-friendly messages
///
/// # Command Prefix
///
/// All commands must start with the `!scout` prefix. Messages without this
/// prefix are silently ignored (returning [`CommandParseError::NotForBot`]).
///
/// # Supported Actions
///
/// - `add <position> <team> <name>` - Add a player to the watchlist
/// - `remove <name>` - Remove the first player matching the name
/// - `view` - List the watchlist entries
/// - `help` - Display help information
pub struct Commander {
    /// Command parser for processing user commands
    parser: Parser,
}

impl Commander {
    /// Creates a new Commander instance with a configured command parser.
    ///
    /// The parser is configured to recognize commands starting with `!` as the
    /// command prefix and `-` as the option prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scout::commands::Commander;
    /// let commander = Commander::new();
    /// ```
    pub fn new() -> Self {
        let parser = Parser::new('!', '-');
        Commander { parser }
    }

    /// Parses a Matrix message body into a structured command.
    ///
    /// This method validates that the message is:
    /// 1. A valid command format (starts with `!`)
    /// 2. Directed at this bot (uses `scout` as the command name)
    /// 3. Contains a known action with the required arguments
    ///
    /// # Arguments
    ///
    /// * `body` - The raw message text from Matrix
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(CommandParseError::NotForBot)` - Message is not a command or for a different bot
    /// * `Err(CommandParseError::InvalidCommand)` - Action or arguments are invalid
    ///
    /// # Error Handling
    ///
    /// - Non-command messages return `NotForBot` to avoid responding to regular chat
    /// - An unknown action or missing arguments return `InvalidCommand` with a
    ///   user-friendly error message
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        match Command::parse(&self.parser, body) {
            Ok(command) => Ok(command),
            Err(error) => {
                // Raise an error message if the command is invalid,
                // return silently if the command is not for the bot
                if let Some(message) = format_command_error(error) {
                    return Err(CommandParseError::InvalidCommand(message));
                }
                Err(CommandParseError::NotForBot)
            }
        }
    }

    /// Executes a parsed command and returns the result.
    ///
    /// This method routes commands to their appropriate handlers and collects
    /// the results. Handlers are pure: they read the context snapshot and
    /// describe the watchlist changes in the returned [`CommandResult`]
    /// without mutating anything themselves.
    ///
    /// # Arguments
    ///
    /// * `command` - The parsed command to execute
    /// * `context` - Runtime context containing the issuer's user id and a
    ///   snapshot of their watchlist
    ///
    /// # Returns
    ///
    /// * `Some(CommandResult)` - Command executed with a response to send
    /// * `None` - Command handler rejected the command (wrong command type)
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Add`] → [`handle_add`]
    /// - [`Command::Remove`] → [`handle_remove`]
    /// - [`Command::View`] → [`handle_view`]
    /// - [`Command::Help`] → [`handle_help`]
    pub fn execute(&self, command: &Command, context: &CommandContext) -> Option<CommandResult> {
        let result = match command {
            Command::Help => handle_help(),
            Command::Add { .. } => match handle_add(command) {
                Some(result) => result,
                None => return None,
            },
            Command::Remove { .. } => match handle_remove(context, command) {
                Some(result) => result,
                None => return None,
            },
            Command::View => handle_view(context),
        };

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::{Entry, WatchlistController};

    fn create_test_context(watchlist: Vec<Entry>) -> CommandContext {
        CommandContext {
            user_id: "@user:example.com".to_string(),
            watchlist,
        }
    }

    /// Parses, executes, and applies one message against the controller,
    /// returning the reply, the way the bot drives the pipeline.
    fn run_message(
        commander: &Commander,
        controller: &mut WatchlistController,
        user_id: &str,
        body: &str,
    ) -> String {
        let command = match commander.parse(body) {
            Ok(command) => command,
            Err(CommandParseError::InvalidCommand(message)) => return message,
            Err(CommandParseError::NotForBot) => panic!("message should be for the bot"),
        };

        let context = CommandContext {
            user_id: user_id.to_string(),
            watchlist: controller.entries(user_id),
        };

        let result = commander.execute(&command, &context).unwrap();

        if let Some(entry) = result.entry_to_add {
            controller.add_entry(user_id, entry);
        }
        if let Some(entry) = result.entry_to_remove {
            controller.remove_entry(user_id, &entry);
        }

        result.response
    }

    #[test]
    fn test_parse_valid_help_command() {
        let commander = Commander::new();
        let result = commander.parse("!scout help");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Help));
    }

    #[test]
    fn test_parse_valid_view_command() {
        let commander = Commander::new();
        let result = commander.parse("!scout view");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::View));
    }

    #[test]
    fn test_parse_valid_add_command() {
        let commander = Commander::new();
        let result = commander.parse("!scout add qb cowboys dak prescott");
        assert!(result.is_ok());
        match result.unwrap() {
            Command::Add {
                position,
                team,
                name,
            } => {
                assert_eq!(position, "qb");
                assert_eq!(team, "cowboys");
                assert_eq!(name, "dak prescott");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_valid_remove_command() {
        let commander = Commander::new();
        let result = commander.parse("!scout remove dak");
        assert!(result.is_ok());
        match result.unwrap() {
            Command::Remove { name } => {
                assert_eq!(name, "dak");
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_parse_unknown_action_returns_error() {
        let commander = Commander::new();
        let result = commander.parse("!scout clear");
        assert!(result.is_err());
        match result.err().unwrap() {
            CommandParseError::InvalidCommand(msg) => {
                assert_eq!(msg, "Invalid action. Use: add, remove, or view.");
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_parse_invalid_add_missing_args() {
        let commander = Commander::new();
        let result = commander.parse("!scout add qb cowboys");
        assert!(result.is_err());
        match result.err().unwrap() {
            CommandParseError::InvalidCommand(msg) => {
                assert!(msg.contains("Invalid add"));
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_parse_invalid_remove_missing_args() {
        let commander = Commander::new();
        let result = commander.parse("!scout remove");
        assert!(result.is_err());
        match result.err().unwrap() {
            CommandParseError::InvalidCommand(msg) => {
                assert!(msg.contains("Invalid remove"));
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_parse_not_for_bot() {
        let commander = Commander::new();
        let result = commander.parse("!other_bot help");
        assert!(result.is_err());
        assert!(matches!(
            result.err().unwrap(),
            CommandParseError::NotForBot
        ));
    }

    #[test]
    fn test_parse_not_a_command() {
        let commander = Commander::new();
        let result = commander.parse("This is just a regular message");
        assert!(result.is_err());
        assert!(matches!(
            result.err().unwrap(),
            CommandParseError::NotForBot
        ));
    }

    #[test]
    fn test_execute_help() {
        let commander = Commander::new();
        let context = create_test_context(vec![]);

        let result = commander.execute(&Command::Help, &context);

        assert!(result.is_some());
        let cmd_result = result.unwrap();
        assert!(!cmd_result.response.is_empty());
        assert!(cmd_result.entry_to_add.is_none());
        assert!(cmd_result.entry_to_remove.is_none());
    }

    #[test]
    fn test_execute_view_empty() {
        let commander = Commander::new();
        let context = create_test_context(vec![]);

        let result = commander.execute(&Command::View, &context).unwrap();

        assert_eq!(result.response, "Your watchlist is empty.");
    }

    #[test]
    fn test_execute_add() {
        let commander = Commander::new();
        let context = create_test_context(vec![]);
        let command = Command::Add {
            position: "qb".to_string(),
            team: "cowboys".to_string(),
            name: "dak prescott".to_string(),
        };

        let result = commander.execute(&command, &context).unwrap();

        assert_eq!(result.response, "Added: QB | Cowboys | Dak Prescott");
        assert!(result.entry_to_add.is_some());
    }

    #[test]
    fn test_execute_remove_not_found() {
        let commander = Commander::new();
        let context = create_test_context(vec![]);
        let command = Command::Remove {
            name: "dak".to_string(),
        };

        let result = commander.execute(&command, &context).unwrap();

        assert_eq!(result.response, "Player not found in your watchlist.");
        assert!(result.entry_to_remove.is_none());
    }

    #[test]
    fn test_full_watchlist_scenario() {
        let commander = Commander::new();
        let mut controller = WatchlistController::new();
        let user_id = "@user:example.com";

        // A fresh user has an empty watchlist
        let reply = run_message(&commander, &mut controller, user_id, "!scout view");
        assert_eq!(reply, "Your watchlist is empty.");

        // Adding formats and stores one entry
        let reply = run_message(
            &commander,
            &mut controller,
            user_id,
            "!scout add qb cowboys dak prescott",
        );
        assert_eq!(reply, "Added: QB | Cowboys | Dak Prescott");

        let reply = run_message(&commander, &mut controller, user_id, "!scout view");
        assert_eq!(reply, "**Your Watchlist:**\nQB | Cowboys | Dak Prescott");

        // Removing by name fragment deletes the entry
        let reply = run_message(&commander, &mut controller, user_id, "!scout remove dak");
        assert_eq!(reply, "Removed: QB | Cowboys | Dak Prescott");

        let reply = run_message(&commander, &mut controller, user_id, "!scout view");
        assert_eq!(reply, "Your watchlist is empty.");

        // Removing again finds nothing
        let reply = run_message(&commander, &mut controller, user_id, "!scout remove dak");
        assert_eq!(reply, "Player not found in your watchlist.");
    }

    #[test]
    fn test_invalid_add_does_not_mutate() {
        let commander = Commander::new();
        let mut controller = WatchlistController::new();
        let user_id = "@user:example.com";

        let reply = run_message(&commander, &mut controller, user_id, "!scout add qb cowboys");
        assert!(reply.contains("Invalid add"));
        assert!(controller.entries(user_id).is_empty());
    }

    #[test]
    fn test_unknown_action_does_not_mutate() {
        let commander = Commander::new();
        let mut controller = WatchlistController::new();
        let user_id = "@user:example.com";

        let reply = run_message(&commander, &mut controller, user_id, "!scout clear");
        assert_eq!(reply, "Invalid action. Use: add, remove, or view.");
        assert!(controller.entries(user_id).is_empty());
    }

    #[test]
    fn test_remove_deletes_only_first_of_duplicates() {
        let commander = Commander::new();
        let mut controller = WatchlistController::new();
        let user_id = "@user:example.com";

        run_message(
            &commander,
            &mut controller,
            user_id,
            "!scout add qb cowboys dak prescott",
        );
        run_message(
            &commander,
            &mut controller,
            user_id,
            "!scout add qb cowboys dak prescott",
        );

        run_message(&commander, &mut controller, user_id, "!scout remove dak");

        assert_eq!(controller.entries(user_id).len(), 1);
    }
}
