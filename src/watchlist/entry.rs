//! Watchlist entry formatting and matching.
//!
//! This module provides the [`Entry`] struct, one formatted line of a user's
//! watchlist. The entry is built once from a player's position, team, and
//! name, and is opaque text afterwards.

use std::fmt;

/// One player on a user's watchlist.
///
/// An entry is the formatted string `"<POSITION> | <Team> | <Name>"`, built by
/// uppercasing the position and title-casing the team and the name. No
/// structured fields are kept after formatting, which makes the
/// case-insensitive substring match of [`Entry::matches`] the only supported
/// lookup.
///
/// # Examples
///
/// ```
/// # use scout::watchlist::Entry;
/// let entry = Entry::new("qb", "cowboys", "dak prescott");
/// assert_eq!(entry.to_string(), "QB | Cowboys | Dak Prescott");
/// assert!(entry.matches("DAK"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry(String);

impl Entry {
    /// Formats a new entry from a player's position, team, and name.
    ///
    /// The position is uppercased; the team and the name are title-cased.
    ///
    /// # Arguments
    ///
    /// * `position` - The player's position, e.g. `qb`
    /// * `team` - The player's team, e.g. `cowboys`
    /// * `name` - The player's name, e.g. `dak prescott`
    pub fn new(position: &str, team: &str, name: &str) -> Self {
        Entry(format!(
            "{} | {} | {}",
            position.to_uppercase(),
            title_case(team),
            title_case(name)
        ))
    }

    /// Returns `true` when the lowercase entry text contains the lowercase
    /// needle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scout::watchlist::Entry;
    /// let entry = Entry::new("qb", "cowboys", "dak prescott");
    /// assert!(entry.matches("dak"));
    /// assert!(entry.matches("Prescott"));
    /// assert!(!entry.matches("romo"));
    /// ```
    pub fn matches(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns the formatted entry text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title-cases a string: every alphabetic character that follows a
/// non-alphabetic one (or starts the string) is uppercased, every other
/// alphabetic character is lowercased.
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut word_start = true;

    for character in input.chars() {
        if character.is_alphabetic() {
            if word_start {
                output.extend(character.to_uppercase());
            } else {
                output.extend(character.to_lowercase());
            }
            word_start = false;
        } else {
            output.push(character);
            word_start = true;
        }
    }

    output
}
