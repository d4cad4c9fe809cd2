//! Matrix client wrapper for bot messaging and synchronization.
//!
//! This module provides a high-level [`MatrixClient`] interface that wraps the
//! Matrix SDK client and handles message sending and synchronization.

use std::path::Path;

use log::{error, info};
use matrix_sdk::{
    Client,
    ruma::{
        EventId, RoomId, UserId,
        events::room::message::{
            AddMentions, ForwardThread, ReplyMetadata, RoomMessageEventContent,
        },
    },
};

use crate::matrix::{
    UserCredentials,
    session::{SessionStore, setup_client},
    sync::MatrixSync,
};

/// High-level Matrix client for bot messaging operations.
///
/// Manages a Matrix SDK client with synchronization capabilities and provides
/// a convenient method for sending threaded replies.
pub struct MatrixClient {
    /// Synchronization service for handling real-time events
    matrix_sync: MatrixSync,
    /// Underlying Matrix SDK client
    client: Client,
}

impl MatrixClient {
    /// Creates and initializes a new Matrix client.
    ///
    /// This method performs the complete initialization workflow:
    /// 1. Creates or restores a Matrix session from the session path
    /// 2. Logs in with the account password when no session exists
    /// 3. Sets the bot's display name
    /// 4. Initializes the synchronization service
    ///
    /// # Arguments
    ///
    /// * `user_credentials` - User credentials containing user ID and password
    /// * `session_path` - Directory path for storing session data and the SQLite database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Session creation or restoration fails
    /// - Login fails (wrong password, unreachable homeserver)
    pub async fn new(
        user_credentials: &UserCredentials,
        session_path: &Path,
    ) -> Result<Self, anyhow::Error> {
        let store = SessionStore::new(session_path).await?;
        let client = setup_client(user_credentials, &store).await?;

        // Set display name
        client.account().set_display_name(Some("Scout")).await?;

        let matrix_sync = MatrixSync::new(&client, &store);

        Ok(MatrixClient {
            matrix_sync,
            client,
        })
    }

    /// Starts the Matrix synchronization loop.
    ///
    /// This method begins syncing with the Matrix server and invokes the
    /// provided callback for each incoming text message. The sync loop runs
    /// indefinitely and automatically handles:
    /// - Auto-joining rooms on invitation
    /// - Filtering for text messages in joined rooms
    /// - Persisting sync tokens for continuity
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each text message with parameters:
    ///   - `body`: The message text content
    ///   - `room_id`: The room where the message was sent
    ///   - `sender_id`: The user who sent the message
    ///   - `event_id`: The unique event identifier
    pub async fn sync<F>(&self, on_message: F) -> Result<(), anyhow::Error>
    where
        F: Fn(String, String, String, String) + Send + Sync + 'static + Clone,
    {
        match self.matrix_sync.sync(on_message).await {
            Ok(_) => info!("matrix sync ended successfully"),
            Err(e) => error!("matrix sync ended with error: {:?}", e),
        }

        Ok(())
    }

    /// Sends a threaded reply to a specific message.
    ///
    /// Creates a reply to an existing message, maintaining proper thread
    /// context in the Matrix room. The message body is formatted as Markdown.
    ///
    /// # Arguments
    ///
    /// * `room_id` - The Matrix room ID where the reply should be sent
    /// * `sender_id` - The user ID of the original message sender
    /// * `event_id` - The event ID of the message being replied to
    /// * `body` - The reply content (supports Markdown formatting)
    pub async fn send_reply(&self, room_id: &str, sender_id: &str, event_id: &str, body: &str) {
        let sender = UserId::parse(sender_id).unwrap();
        let event = EventId::parse(event_id).unwrap();

        let content = RoomMessageEventContent::text_markdown(body).make_reply_to(
            ReplyMetadata::new(&event, &sender, None),
            ForwardThread::No,
            AddMentions::No,
        );

        self.send(room_id, content).await;
    }

    /// Internal helper to send message content to a room.
    ///
    /// # Arguments
    ///
    /// * `room_id` - The Matrix room ID
    /// * `content` - The pre-formatted message content
    async fn send(&self, room_id: &str, content: RoomMessageEventContent) {
        let room_id_obj = RoomId::parse(room_id).unwrap();

        if let Some(room) = self.client.get_room(&room_id_obj)
            && let Err(e) = room.send(content).await
        {
            error!("Failed to send message: {:?}", e);
        }
    }
}
