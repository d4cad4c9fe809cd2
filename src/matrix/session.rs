use std::path::{Path, PathBuf};

use tokio::fs;

use anyhow::Context;
use log::{debug, info, trace};
use matrix_sdk::{Client, authentication::matrix, ruma::OwnedUserId};
use serde::{Deserialize, Serialize};

use crate::matrix::UserCredentials;

/// Internal session data structure.
///
/// Contains the Matrix user session and optional sync token.
/// This is serialized to JSON and persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Session {
    /// The Matrix user session containing authentication credentials.
    user_session: matrix::MatrixSession,

    /// The latest sync token for resuming sync operations.
    ///
    /// Omitted from serialization when `None` to keep the file clean.
    #[serde(skip_serializing_if = "Option::is_none")]
    sync_token: Option<String>,
}

/// Matrix session store.
///
/// Persists the authenticated session and the latest sync token as a JSON
/// file next to the SQLite database used by the Matrix SDK.
///
/// # File Structure
///
/// The session directory contains:
/// - `session`: JSON file with user authentication and sync token
/// - `sqlite`: SQLite database for Matrix SDK state
#[derive(Clone)]
pub struct SessionStore {
    /// The user session if one was found on disk.
    session: Option<Session>,
    /// Path to the sqlite database, `dir_path/sqlite`
    sqlite_path: PathBuf,
    /// Path to the session file, `dir_path/session`
    session_path: PathBuf,
}

impl SessionStore {
    /// Creates a session store rooted at `dir_path`, loading an existing
    /// session file when one is present.
    pub async fn new(dir_path: &Path) -> Result<SessionStore, anyhow::Error> {
        debug!("read session at {}", dir_path.display());

        let sqlite_path = dir_path.join("sqlite");
        let session_path = dir_path.join("session");

        let session = SessionStore::read_session(&session_path).await.ok();
        debug!("found user session {:?}", session.is_some());

        Ok(SessionStore {
            session,
            sqlite_path,
            session_path,
        })
    }

    /// Loads and deserializes the session file.
    async fn read_session(session_path: &Path) -> Result<Session, anyhow::Error> {
        let session_data = fs::read_to_string(session_path)
            .await
            .context("session file does not exist")?;
        let session: Session = serde_json::from_str(&session_data)?;
        Ok(session)
    }

    /// Checks if a session was found on disk during initialization.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the path to the SQLite database backing the SDK state.
    pub fn sqlite_path(&self) -> &Path {
        &self.sqlite_path
    }

    /// Returns the user session if one is loaded.
    pub fn user_session(&self) -> Option<&matrix::MatrixSession> {
        self.session.as_ref().map(|s| &s.user_session)
    }

    /// Returns the sync token if one is stored.
    pub fn sync_token(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.sync_token.clone())
    }

    /// Persists the sync token to disk.
    ///
    /// Updates the session file with the new sync token while preserving
    /// the user session data.
    pub async fn persist_sync_token(&self, sync_token: String) -> anyhow::Result<()> {
        trace!("persist sync token {}", sync_token);

        let serialized_session = fs::read_to_string(&self.session_path).await?;
        let mut full_session: Session = serde_json::from_str(&serialized_session)?;

        full_session.sync_token = Some(sync_token);
        let serialized_session = serde_json::to_string(&full_session)?;
        fs::write(&self.session_path, serialized_session).await?;

        trace!("sync token persisted");
        Ok(())
    }

    /// Persists the user session to disk.
    ///
    /// Creates a new session file with the provided user session data. The
    /// sync token is not included when creating a new session.
    pub async fn persist_user_session(
        &self,
        user_session: &matrix::MatrixSession,
    ) -> anyhow::Result<()> {
        trace!("persist user session");

        let session = Session {
            user_session: user_session.clone(),
            sync_token: None,
        };

        let serialized_session = serde_json::to_string(&session)?;
        fs::write(&self.session_path, serialized_session).await?;

        trace!("user session persisted");
        Ok(())
    }
}

/// Builds an authenticated Matrix client.
///
/// Restores the persisted session when the store holds one, and performs a
/// password login otherwise, persisting the fresh session for the next start.
/// The homeserver is discovered from the server name of the account user id.
///
/// # Errors
///
/// Returns an error if:
/// - The user id cannot be parsed
/// - Client creation or homeserver discovery fails
/// - Login fails (wrong password, unreachable server)
/// - The fresh session cannot be persisted
pub async fn setup_client(
    user_credentials: &UserCredentials,
    store: &SessionStore,
) -> Result<Client, anyhow::Error> {
    let user_id: OwnedUserId = user_credentials.user_id.clone().try_into()?;

    let client = Client::builder()
        .server_name(user_id.server_name())
        .sqlite_store(store.sqlite_path(), None)
        .build()
        .await?;

    debug!("matrix client created");

    if store.has_session() {
        info!("restoring matrix session from disk");

        let user_session = store
            .user_session()
            .expect("store reported a session")
            .clone();
        client.restore_session(user_session).await?;

        info!("matrix session restored successfully");
        return Ok(client);
    }

    info!("logging in as {}", user_credentials.user_id);

    client
        .matrix_auth()
        .login_username(&user_id, &user_credentials.password)
        .initial_device_display_name("scout bot")
        .send()
        .await?;

    let user_session = client
        .matrix_auth()
        .session()
        .ok_or_else(|| anyhow::anyhow!("no session available after login"))?;
    store.persist_user_session(&user_session).await?;

    info!("matrix client setup complete");
    Ok(client)
}
