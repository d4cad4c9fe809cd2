//! Per-user watchlist management.
//!
//! This module provides the in-memory watchlist system the bot mutates in
//! response to user commands. It consists of two components:
//!
//! - [`Entry`]: one formatted watchlist line describing a player
//! - [`WatchlistController`]: owns the map of user id to ordered entries
//!
//! # Architecture
//!
//! Each chat user owns an independent, ordered list of entries. Lists are
//! created lazily on the first `add` and live only for the process lifetime;
//! nothing is persisted and nothing is evicted. Entries are opaque text once
//! formatted, so a case-insensitive substring match against the entry text is
//! the only supported lookup.
//!
//! The controller is owned by the bot and handed to the command pipeline as a
//! snapshot, which keeps the command handlers free of shared state and easy
//! to test.
//!
//! # Example Usage
//!
//! ```no_run
//! use scout::watchlist::{Entry, WatchlistController};
//!
//! let mut controller = WatchlistController::new();
//!
//! let entry = Entry::new("qb", "cowboys", "dak prescott");
//! controller.add_entry("@user:example.com", entry.clone());
//!
//! assert_eq!(controller.entries("@user:example.com"), vec![entry.clone()]);
//!
//! controller.remove_entry("@user:example.com", &entry);
//! assert!(controller.entries("@user:example.com").is_empty());
//! ```

mod entry;
mod watchlist_controller;

pub use crate::watchlist::{entry::Entry, watchlist_controller::WatchlistController};
