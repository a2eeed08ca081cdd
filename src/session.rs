//! Session store - the sanctioned client-side cache.
//!
//! The authenticated user and API token are the only state this tool persists
//! locally. Callers never reach for an ambient session: they load one here and
//! pass the actor id into the workflow explicitly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::workflow::types::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "customer_care")]
    CustomerCare,
}

/// The cached profile of the logged-in user (never the password).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// An authenticated session: user profile plus the opaque backend token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// The id recorded as `called_by` on transitions this user applies.
    pub fn actor(&self) -> &UserId {
        &self.user.id
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active session (run login first)")]
    NotLoggedIn,
    #[error("failed to access session store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Owns the load/save/clear lifecycle of the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session. A corrupt store is cleared and treated as
    /// logged-out rather than wedging every later command.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Err(SessionError::NotLoggedIn);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "clearing corrupt session store");
                std::fs::remove_file(&self.path)?;
                Err(SessionError::NotLoggedIn)
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw)?;
        tracing::info!(user = %session.user.id, "session saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!("session cleared");
        }
        Ok(())
    }

    /// The cached profile, or `None` when logged out.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.load().ok().map(|s| s.user)
    }
}
