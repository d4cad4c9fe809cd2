//! Bot module coordinating the Matrix transport, the watchlist store, and the
//! liveness responder.
//!
//! This module provides the main [`Bot`] implementation. It owns every
//! long-lived component and wires them together: the liveness HTTP task, the
//! Matrix sync loop, and the per-message command pipeline.
//!
//! # Command Processing Flow
//!
//! ```text
//! Matrix Message → Parse Command → Execute → Apply Watchlist Changes → Send Reply
//! ```
//!
//! Command handlers never touch the store directly. Each message gets a
//! snapshot of the sender's watchlist, the handler describes the changes in
//! its [`CommandResult`](crate::commands::CommandResult), and this module
//! applies them to the [`WatchlistController`] before replying.
//!
//! # Runtime Behavior
//!
//! Once started, the bot runs two independent execution contexts:
//!
//! 1. **Liveness Task**: serves `GET /` for external uptime monitors. It
//!    never reads or writes bot state.
//! 2. **Matrix Sync Loop**: listens for Matrix messages and processes bot
//!    commands one at a time.
//!
//! Both run indefinitely until the process is terminated.

use std::path::Path;

use log::error;

use crate::{
    Args,
    commands::{CommandContext, CommandParseError, CommandResult, Commander},
    config::{Config, Liveness},
    liveness,
    matrix::{MatrixClient, UserCredentials},
    watchlist::WatchlistController,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Context for processing a Matrix message.
///
/// Groups together all the information needed to process a single Matrix
/// message and execute commands.
struct MessageContext {
    /// The message body text
    body: String,
    /// The Matrix room ID where the message was sent
    room_id: String,
    /// The Matrix user ID who sent the message
    sender_id: String,
    /// The Matrix event ID of the message
    event_id: String,
    /// Thread-safe reference to the Matrix client
    matrix_client: Arc<MatrixClient>,
    /// Thread-safe reference to the watchlist store
    watchlists: Arc<Mutex<WatchlistController>>,
    /// Thread-safe reference to the command handler
    commander: Arc<Commander>,
}

/// Main bot structure integrating Matrix messaging with the watchlist store.
///
/// The `Bot` manages three responsibilities:
///
/// 1. **Message Processing** - Listens to Matrix rooms and processes user commands
/// 2. **Watchlist Management** - Owns the per-user in-memory watchlist store
/// 3. **Liveness** - Serves the uptime probe on a dedicated task
///
/// # Thread Safety
///
/// Shared state (`matrix_client`, `watchlists`, `commander`) is wrapped in
/// `Arc` for safe sharing across async tasks. The watchlist store uses a
/// `Mutex` for interior mutability; only the command path locks it.
pub struct Bot {
    /// Matrix client for receiving messages and sending replies.
    matrix_client: Arc<MatrixClient>,

    /// Watchlist store mapping each user to their entries.
    ///
    /// Wrapped in `Mutex` because commands mutate it. The store lives in
    /// memory only; nothing is persisted across restarts.
    watchlists: Arc<Mutex<WatchlistController>>,

    /// Command parser and executor.
    ///
    /// Stateless and safely shared between message tasks.
    commander: Arc<Commander>,

    /// Bind settings for the liveness responder.
    liveness: Liveness,
}

impl Bot {
    /// Creates a new Bot instance from configuration and command line arguments.
    ///
    /// This constructor initializes all bot components including the Matrix
    /// client (logging in or restoring the persisted session), the empty
    /// watchlist store, and the command parser.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration containing the Matrix credentials and the
    ///   liveness bind settings
    /// * `args` - Command line arguments; `data` points to the directory for
    ///   the persisted Matrix session
    ///
    /// # Errors
    ///
    /// Returns an error if the Matrix client cannot be created (login failed,
    /// network error, corrupted session).
    pub async fn new(config: Config, args: Args) -> Result<Self, anyhow::Error> {
        let matrix_client = Arc::new(
            MatrixClient::new(
                &UserCredentials {
                    user_id: config.matrix.user_id,
                    password: config.matrix.password,
                },
                &Path::new(&args.data).join("session"),
            )
            .await?,
        );

        let watchlists = Arc::new(Mutex::new(WatchlistController::new()));
        let commander = Arc::new(Commander::new());

        Ok(Bot {
            matrix_client,
            watchlists,
            commander,
            liveness: config.liveness,
        })
    }

    /// Starts the bot and begins processing messages.
    ///
    /// This method consumes `self` and runs until the process is terminated:
    ///
    /// 1. Binds the liveness listener and spawns the responder task
    /// 2. Runs the Matrix sync loop, dispatching each incoming message to the
    ///    command pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the liveness listener cannot be bound or the sync
    /// loop fails to start.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        // The liveness responder must answer monitors independently of the
        // sync loop, so it gets its own task
        let listener = liveness::bind(&self.liveness.host, self.liveness.port).await?;
        tokio::spawn(async move {
            if let Err(e) = liveness::serve(listener).await {
                error!("liveness responder ended with error: {:?}", e);
            }
        });

        // Clone references for the message handler
        let matrix_client = Arc::clone(&self.matrix_client);
        let watchlists = Arc::clone(&self.watchlists);
        let commander = Arc::clone(&self.commander);

        // Create message handler closure
        let on_message =
            move |body: String, room_id: String, sender_id: String, event_id: String| {
                let ctx = MessageContext {
                    body,
                    room_id,
                    sender_id,
                    event_id,
                    matrix_client: Arc::clone(&matrix_client),
                    watchlists: Arc::clone(&watchlists),
                    commander: Arc::clone(&commander),
                };
                Self::handle_matrix_message(ctx)
            };

        // Start matrix sync
        self.matrix_client.sync(on_message).await
    }

    /// Handles an incoming Matrix message and processes it as a command.
    ///
    /// This method implements the complete command processing flow:
    /// 1. Parse the message body to identify the command
    /// 2. Silently ignore if not a command or for a different bot
    /// 3. Send error response if the action or its arguments are invalid
    /// 4. Create the execution context with a snapshot of the sender's watchlist
    /// 5. Execute the command and get the result
    /// 6. Apply the requested watchlist changes to the store
    /// 7. Send the response to the user
    ///
    /// # Behavior
    ///
    /// This method spawns a new async task to handle the message, allowing
    /// the Matrix sync loop to continue processing other messages without
    /// blocking.
    fn handle_matrix_message(ctx: MessageContext) {
        tokio::spawn(async move {
            // Parse body to extract command
            let command = match ctx.commander.parse(&ctx.body) {
                Ok(command) => command,
                Err(e) => match e {
                    // Return silently if the command is not for the bot
                    CommandParseError::NotForBot => return,
                    // Send error message if the command is invalid
                    CommandParseError::InvalidCommand(message) => {
                        ctx.matrix_client
                            .send_reply(&ctx.room_id, &ctx.sender_id, &ctx.event_id, &message)
                            .await;
                        return;
                    }
                },
            };

            let command_context = CommandContext {
                user_id: ctx.sender_id.clone(),
                watchlist: ctx.watchlists.lock().await.entries(&ctx.sender_id),
            };

            // Execute command against the watchlist snapshot
            let Some(command_result) = ctx.commander.execute(&command, &command_context) else {
                return;
            };

            let CommandResult {
                response,
                entry_to_add,
                entry_to_remove,
            } = command_result;

            // Apply the watchlist changes requested by the handler
            if let Some(entry) = entry_to_add {
                ctx.watchlists.lock().await.add_entry(&ctx.sender_id, entry);
            }
            if let Some(entry) = entry_to_remove {
                ctx.watchlists
                    .lock()
                    .await
                    .remove_entry(&ctx.sender_id, &entry);
            }

            // Send response back to matrix room
            ctx.matrix_client
                .send_reply(&ctx.room_id, &ctx.sender_id, &ctx.event_id, &response)
                .await;
        });
    }
}
