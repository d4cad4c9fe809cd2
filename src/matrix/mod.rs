//! Matrix protocol integration for the bot.
//!
//! This module provides the transport layer of the bot:
//! - Password login with session persistence and restoration
//! - Real-time event synchronization with auto-join on invite
//! - Threaded Markdown replies to command messages
//!
//! # Architecture
//!
//! The module is structured around [`client::MatrixClient`] which coordinates:
//! - **Session**: login, restoration, and sync-token persistence via the session submodule
//! - **Sync**: real-time event handling and room synchronization via the sync submodule
//!
//! No watchlist logic lives here; the bot hands a message callback to
//! [`client::MatrixClient::sync`] and sends replies through
//! [`client::MatrixClient::send_reply`].

mod client;
mod session;
mod sync;

pub use crate::matrix::client::MatrixClient;

/// User credentials for a Matrix account
#[derive(Debug, Clone)]
pub struct UserCredentials {
    /// User ID of the matrix account
    pub user_id: String,
    /// Password of the matrix account
    pub password: String,
}
