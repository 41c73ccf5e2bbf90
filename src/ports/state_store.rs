//! State Store Port - Per-session key-value persistence.
//!
//! The selection subsystem stores exactly three keys per session and treats
//! every value as an opaque string. Any session-scoped key-value backing
//! satisfies this contract; nothing survives the process.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;

/// Errors that can occur during state store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateStoreError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("session already exists: {0}")]
    SessionExists(SessionId),
}

/// Port for per-session key-value state.
///
/// Implementations must keep sessions isolated from each other; there is no
/// cross-session sharing in this system.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Create an empty session entry.
    ///
    /// # Errors
    ///
    /// - `SessionExists` if the session was already created
    async fn create_session(&self, session_id: SessionId) -> Result<(), StateStoreError>;

    /// Check whether a session exists.
    async fn exists(&self, session_id: &SessionId) -> Result<bool, StateStoreError>;

    /// Read a value. Returns `None` for a key never written.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    async fn get(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<String>, StateStoreError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    async fn set(
        &self,
        session_id: &SessionId,
        key: &str,
        value: String,
    ) -> Result<(), StateStoreError>;

    /// Discard a session and all its values.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session does not exist
    async fn remove_session(&self, session_id: &SessionId) -> Result<(), StateStoreError>;
}
