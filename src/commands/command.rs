//! Command parsing and handling.
//!
//! This module provides command parsing functionality for the bot, converting
//! Matrix message text into structured [`Command`] enums that can be processed
//! by the application.

use command_parser::{Command as ParserCommand, Parser};
use log::debug;

use crate::commands::markdown_response::{
    format_invalid_action, format_invalid_add, format_invalid_remove,
};

/// Represents a parsed bot command.
///
/// Commands are parsed from Matrix message text and represent the watchlist
/// operations users can perform with the bot.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a player to the watchlist
    Add {
        /// Player's position, e.g. `qb`
        position: String,
        /// Player's team, e.g. `cowboys`
        team: String,
        /// Player's name, possibly several words
        name: String,
    },
    /// Remove the first player whose entry matches the name
    Remove {
        /// Name (or name fragment) to match against entries
        name: String,
    },
    /// List the watchlist entries
    View,
    /// Display help information
    Help,
}

/// Errors that can occur during command parsing.
#[derive(Debug)]
pub enum CommandParsingError {
    /// The message could not be parsed as a command
    UnableToParse,
    /// The command is not for this bot (wrong prefix)
    NotScout,
    /// The action word is not one of `add`, `remove`, `view`, `help`
    UnknownAction,
    /// The add action is missing the position, team, or name
    InvalidAdd,
    /// The remove action is missing the name
    InvalidRemove,
}

impl Command {
    /// Parses a message string into a Command.
    ///
    /// The first argument word is the action, matched case-sensitively. The
    /// bare `!scout` invocation shows the help message.
    ///
    /// # Arguments
    ///
    /// * `parser` - The command parser instance configured for the bot
    /// * `body` - The message text to parse
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The message is not a command format - [`CommandParsingError::UnableToParse`]
    /// - The command is for a different bot - [`CommandParsingError::NotScout`]
    /// - The action word is not recognized - [`CommandParsingError::UnknownAction`]
    /// - The add action is missing arguments - [`CommandParsingError::InvalidAdd`]
    /// - The remove action is missing arguments - [`CommandParsingError::InvalidRemove`]
    pub fn parse(parser: &Parser, body: &str) -> Result<Self, CommandParsingError> {
        // For an unknown reason the parser ignores the last word, so we add a dummy word at the end
        let body = body.to_string() + " dummy";

        // This is normal to fails if the message is not a command
        let command = match parser.parse(&body) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        // Ignore commands that are not for the bot
        if command.name != "scout" {
            return Err(CommandParsingError::NotScout);
        }

        debug!("parsing command: {:?}", command);

        // If no arguments, return help
        if command.arguments.is_empty() {
            return Ok(Command::Help);
        }

        match command.arguments[0].as_str() {
            "help" => Ok(Command::Help),
            "view" => Ok(Command::View),
            "add" => {
                let (position, team, name) = Self::parse_add(&command)?;
                Ok(Command::Add {
                    position,
                    team,
                    name,
                })
            }
            "remove" => Ok(Command::Remove {
                name: Self::parse_remove(&command)?,
            }),
            _ => Err(CommandParsingError::UnknownAction),
        }
    }

    fn parse_add(command: &ParserCommand) -> Result<(String, String, String), CommandParsingError> {
        debug!("parsing add command: {:?}", command);

        // 4 arguments at least: add, position, team and name
        if command.arguments.len() < 4 {
            return Err(CommandParsingError::InvalidAdd);
        }

        let position = command.arguments[1].clone();
        let team = command.arguments[2].clone();
        // Player names may span several words, every remaining word belongs to the name
        let name = command.arguments[3..].join(" ");

        debug!(
            "parsed add command - position: {}, team: {}, name: {}",
            position, team, name
        );

        Ok((position, team, name))
    }

    fn parse_remove(command: &ParserCommand) -> Result<String, CommandParsingError> {
        debug!("parsing remove command: {:?}", command);

        // 2 arguments at least: remove and the name
        if command.arguments.len() < 2 {
            return Err(CommandParsingError::InvalidRemove);
        }

        let name = command.arguments[1..].join(" ");

        debug!("parsed remove command - name: {}", name);

        Ok(name)
    }
}

/// Formats a command error into a user-friendly message.
///
/// Converts certain [`CommandParsingError`] variants into formatted error
/// messages for display to the user. `UnableToParse` and `NotScout` return
/// `None` to avoid responding to non-command messages.
///
/// # Examples
///
/// ```
/// # use scout::commands::command::{format_command_error, CommandParsingError};
/// let error = CommandParsingError::UnknownAction;
/// let message = format_command_error(error);
/// assert!(message.is_some());
/// ```
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::UnknownAction => Some(format_invalid_action()),
        CommandParsingError::InvalidAdd => Some(format_invalid_add()),
        CommandParsingError::InvalidRemove => Some(format_invalid_remove()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_parser() -> Parser {
        Parser::new('!', '-')
    }

    #[test]
    fn test_parse_help_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout help");
        assert!(matches!(result, Ok(Command::Help)));
    }

    #[test]
    fn test_parse_help_command_no_args() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout");
        assert!(matches!(result, Ok(Command::Help)));
    }

    #[test]
    fn test_parse_view_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout view");
        assert!(matches!(result, Ok(Command::View)));
    }

    #[test]
    fn test_parse_add_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout add qb cowboys dak prescott");
        assert!(matches!(
            result,
            Ok(Command::Add { position, team, name })
            if position == "qb" && team == "cowboys" && name == "dak prescott"
        ));
    }

    #[test]
    fn test_parse_add_command_single_word_name() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout add rb giants saquon");
        assert!(matches!(
            result,
            Ok(Command::Add { position, team, name })
            if position == "rb" && team == "giants" && name == "saquon"
        ));
    }

    #[test]
    fn test_parse_add_command_missing_name() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout add qb cowboys");
        assert!(matches!(result, Err(CommandParsingError::InvalidAdd)));
    }

    #[test]
    fn test_parse_add_command_missing_team_and_name() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout add qb");
        assert!(matches!(result, Err(CommandParsingError::InvalidAdd)));
    }

    #[test]
    fn test_parse_add_command_no_arguments() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout add");
        assert!(matches!(result, Err(CommandParsingError::InvalidAdd)));
    }

    #[test]
    fn test_parse_remove_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout remove dak");
        assert!(matches!(
            result,
            Ok(Command::Remove { name }) if name == "dak"
        ));
    }

    #[test]
    fn test_parse_remove_command_multi_word_name() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout remove dak prescott");
        assert!(matches!(
            result,
            Ok(Command::Remove { name }) if name == "dak prescott"
        ));
    }

    #[test]
    fn test_parse_remove_command_missing_name() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout remove");
        assert!(matches!(result, Err(CommandParsingError::InvalidRemove)));
    }

    #[test]
    fn test_parse_unknown_action() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout clear");
        assert!(matches!(result, Err(CommandParsingError::UnknownAction)));
    }

    #[test]
    fn test_parse_action_is_case_sensitive() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!scout Add qb cowboys dak");
        assert!(matches!(result, Err(CommandParsingError::UnknownAction)));
    }

    #[test]
    fn test_parse_not_scout_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!other_bot help");
        assert!(matches!(result, Err(CommandParsingError::NotScout)));
    }

    #[test]
    fn test_parse_unable_to_parse() {
        let parser = create_parser();
        let result = Command::parse(&parser, "This is not a command");
        assert!(matches!(result, Err(CommandParsingError::UnableToParse)));
    }

    #[test]
    fn test_format_command_error_unknown_action() {
        let result = format_command_error(CommandParsingError::UnknownAction);
        assert!(result.is_some());
        assert!(result.unwrap().contains("Invalid action"));
    }

    #[test]
    fn test_format_command_error_invalid_add() {
        let result = format_command_error(CommandParsingError::InvalidAdd);
        assert!(result.is_some());
        assert!(result.unwrap().contains("Usage:"));
    }

    #[test]
    fn test_format_command_error_invalid_remove() {
        let result = format_command_error(CommandParsingError::InvalidRemove);
        assert!(result.is_some());
        assert!(result.unwrap().contains("Usage:"));
    }

    #[test]
    fn test_format_command_error_unable_to_parse() {
        let result = format_command_error(CommandParsingError::UnableToParse);
        assert!(result.is_none());
    }

    #[test]
    fn test_format_command_error_not_scout() {
        let result = format_command_error(CommandParsingError::NotScout);
        assert!(result.is_none());
    }
}
