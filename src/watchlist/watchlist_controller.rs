//! Watchlist controller owning every user's list.
//!
//! This module provides the [`WatchlistController`], the single owner of the
//! in-memory watchlist map. The bot reads a snapshot of a user's entries
//! before executing a command and applies the resulting changes here.

use std::collections::HashMap;

use log::debug;

use crate::watchlist::Entry;

/// Owns the per-user watchlists.
///
/// The controller maps a chat user id to an ordered list of [`Entry`] values.
/// Lists are created lazily when a user adds their first entry. The state is
/// held in memory only and lost on restart.
///
/// Entries are not deduplicated: the same player can be added several times,
/// and [`WatchlistController::remove_entry`] deletes at most one occurrence.
///
/// # Examples
///
/// ```
/// # use scout::watchlist::{Entry, WatchlistController};
/// let mut controller = WatchlistController::new();
/// let entry = Entry::new("qb", "cowboys", "dak prescott");
///
/// controller.add_entry("@user:example.com", entry.clone());
/// assert_eq!(controller.entries("@user:example.com").len(), 1);
///
/// assert!(controller.remove_entry("@user:example.com", &entry));
/// assert!(controller.entries("@user:example.com").is_empty());
/// ```
pub struct WatchlistController {
    /// Map of user id to that user's ordered entries
    watchlists: HashMap<String, Vec<Entry>>,
}

impl WatchlistController {
    /// Creates an empty controller.
    pub fn new() -> Self {
        WatchlistController {
            watchlists: HashMap::new(),
        }
    }

    /// Returns a copy of the user's entries, in insertion order.
    ///
    /// A user without a stored list is treated as having an empty one.
    pub fn entries(&self, user_id: &str) -> Vec<Entry> {
        self.watchlists.get(user_id).cloned().unwrap_or_default()
    }

    /// Appends an entry to the user's list, creating the list if needed.
    pub fn add_entry(&mut self, user_id: &str, entry: Entry) {
        debug!("adding entry '{}' for user {}", entry, user_id);

        self.watchlists
            .entry(user_id.to_owned())
            .or_default()
            .push(entry);
    }

    /// Removes the first occurrence of `entry` from the user's list.
    ///
    /// Returns `true` when an entry was removed, `false` when the user has no
    /// list or the entry is not in it. Later duplicates are left untouched.
    pub fn remove_entry(&mut self, user_id: &str, entry: &Entry) -> bool {
        let Some(list) = self.watchlists.get_mut(user_id) else {
            return false;
        };

        let Some(index) = list.iter().position(|candidate| candidate == entry) else {
            return false;
        };

        list.remove(index);
        debug!("removed entry '{}' for user {}", entry, user_id);

        true
    }
}
