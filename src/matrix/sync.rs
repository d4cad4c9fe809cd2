//! Matrix client synchronization and event handling.
//!
//! This module provides the [`MatrixSync`] struct for managing the Matrix
//! client's synchronization loop and handling real-time events from the
//! homeserver.
//!
//! # Overview
//!
//! The [`MatrixSync::sync`] method:
//! 1. Performs an initial sync to catch up on offline events (especially invites)
//! 2. Sets up event handlers for auto-joining rooms and message processing
//! 3. Enters a continuous sync loop with automatic token persistence

use anyhow::Result;
use std::sync::Arc;

use log::{error, info, warn};
use matrix_sdk::{
    Client, LoopCtrl, Room, RoomState,
    config::SyncSettings,
    ruma::{
        api::client::filter::FilterDefinition,
        events::room::{
            member::StrippedRoomMemberEvent,
            message::{MessageType, OriginalSyncRoomMessageEvent},
        },
    },
};
use tokio::time::{Duration, sleep};

use crate::matrix::session::SessionStore;

/// Manages Matrix client synchronization and event processing.
///
/// Wraps a Matrix [`Client`] and handles the synchronization lifecycle:
/// - Initial sync to catch up on missed events
/// - Continuous sync loop for real-time event processing
/// - Automatic sync token persistence for session continuity
/// - Event handler registration for invites and messages
pub struct MatrixSync {
    /// The matrix client
    client: Client,
    /// The session store used for sync token persistence
    store: SessionStore,
}

impl MatrixSync {
    /// Creates a new MatrixSync instance.
    ///
    /// This does not start the synchronization process; call
    /// [`MatrixSync::sync`] to begin syncing.
    pub fn new(client: &Client, store: &SessionStore) -> Self {
        MatrixSync {
            client: client.to_owned(),
            store: store.to_owned(),
        }
    }

    /// Starts the synchronization process and enters an infinite loop.
    ///
    /// This method performs the following sequence:
    /// 1. Registers an auto-join handler for room invitations
    /// 2. Performs an initial sync so messages received while the bot was
    ///    offline are not replayed to the handler
    /// 3. Registers a message handler with the provided callback
    /// 4. Enters a continuous sync loop, persisting tokens after each sync
    ///
    /// Sync tokens are persisted after each successful sync so the bot can
    /// resume from the last position after a restart.
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each text message in a joined room.
    ///   Parameters are: `(body, room_id, sender_id, event_id)`
    ///
    /// # Errors
    ///
    /// Returns an error if the initial sync or the sync loop encounters a
    /// fatal error. Sync token persistence errors are logged but don't stop
    /// the sync process.
    pub async fn sync<F>(&self, on_message: F) -> Result<()>
    where
        F: Fn(String, String, String, String) + Send + Sync + 'static + Clone,
    {
        info!("start syncing");

        // Auto join rooms when invited
        self.client.add_event_handler(auto_join_rooms);

        // Enable room members lazy-loading
        // See <https://spec.matrix.org/v1.6/client-server-api/#lazy-loading-room-members>.
        let filter = FilterDefinition::with_lazy_loading();
        let mut sync_settings = SyncSettings::default().filter(filter.into());

        // Get the last sync token from the session if it exists
        if let Some(sync_token) = self.store.sync_token() {
            sync_settings = sync_settings.token(sync_token);
        }

        // First sync to catch up without replaying old messages to the handler
        let response = self.client.sync_once(sync_settings.clone()).await?;
        if let Err(err) = self
            .store
            .persist_sync_token(response.next_batch.clone())
            .await
        {
            error!("failed to persist sync token: {:?}", err);
        }

        let on_message_arc = Arc::new(on_message);

        // Listen to incoming room messages. Because we are listening after the
        // sync_once, we only get new messages.
        self.client.add_event_handler({
            let on_message = Arc::clone(&on_message_arc);
            move |event: OriginalSyncRoomMessageEvent, room: Room| async move {
                on_room_message(event, room, &on_message).await
            }
        });

        // Since we called `sync_once` before we entered our sync loop we must
        // pass that sync token to `sync_with_result_callback`
        sync_settings = sync_settings.token(response.next_batch);

        self.client
            .sync_with_result_callback(sync_settings, |sync_result| async move {
                let response = sync_result?;

                // We persist the token each time to be able to restore our session
                if let Err(err) = self.store.persist_sync_token(response.next_batch).await {
                    error!("failed to persist sync token: {:?}", err);
                }

                Ok(LoopCtrl::Continue)
            })
            .await?;

        Ok(())
    }
}

/// Automatically joins rooms when the bot receives an invitation.
///
/// # Arguments
///
/// * `room_member` - The stripped room member event containing the invite
/// * `client` - The Matrix client to use for joining
/// * `room` - The room to join
///
/// # References
///
/// See <https://github.com/matrix-org/synapse/issues/4345> for the Synapse
/// issue that necessitates the retry logic.
async fn auto_join_rooms(room_member: StrippedRoomMemberEvent, client: Client, room: Room) {
    let Some(user_id) = client.user_id() else {
        warn!("could not get user id from client");
        return;
    };

    // Ignore if the invite is not for us
    if room_member.state_key != user_id {
        return;
    }

    tokio::spawn(async move {
        info!("auto joining room {}", room.room_id());
        let mut delay = 2;

        while let Err(err) = room.join().await {
            // retry autojoin due to synapse sending invites, before the
            // invited user can join for more information see
            // https://github.com/matrix-org/synapse/issues/4345
            error!(
                "failed to join room {} ({err:?}), retrying in {delay}s",
                room.room_id()
            );

            sleep(Duration::from_secs(delay)).await;
            delay *= 2;

            if delay > 3600 {
                error!("can't join room {} ({err:?})", room.room_id());
                break;
            }
        }
        info!("successfully joined room {}", room.room_id());
    });
}

/// Handles incoming room messages and delegates to the user callback.
///
/// This internal function:
/// 1. Filters out messages from non-joined rooms
/// 2. Extracts text content from message events
/// 3. Invokes the provided callback with message details
///
/// Non-text messages (images, files, etc.) are silently ignored.
async fn on_room_message<F>(event: OriginalSyncRoomMessageEvent, room: Room, on_message: &Arc<F>)
where
    F: Fn(String, String, String, String) + Send + Sync + 'static,
{
    // Ignore messages from non-joined rooms
    if room.state() != RoomState::Joined {
        return;
    }

    // Only handle text messages
    let MessageType::Text(text_content) = event.content.msgtype else {
        return;
    };

    on_message(
        text_content.body,
        room.room_id().to_string(),
        event.sender.to_string(),
        event.event_id.to_string(),
    );
}
