//! Session management for browser clients
//!
//! A session is keyed by an opaque random token carried in a cookie and
//! holds at most one authenticated credential id. Sessions live only in the
//! injected [`SessionStore`]; nothing is written to disk.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Server-side state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Storage backend for sessions
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Get a session by token, `None` if unknown
    async fn load(&self, token: Uuid) -> Result<Option<SessionData>>;

    /// Create or replace a session
    async fn save(&self, token: Uuid, data: SessionData) -> Result<()>;

    /// Remove every value held for a token
    async fn destroy(&self, token: Uuid) -> Result<()>;
}

/// Keeps sessions in process memory; they do not survive a restart
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionData>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, token: Uuid) -> Result<Option<SessionData>> {
        Ok(self.sessions.read().await.get(&token).cloned())
    }

    async fn save(&self, token: Uuid, data: SessionData) -> Result<()> {
        self.sessions.write().await.insert(token, data);
        Ok(())
    }

    async fn destroy(&self, token: Uuid) -> Result<()> {
        self.sessions.write().await.remove(&token);
        Ok(())
    }
}

/// Session manager gating access to the roster
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Credential id bound to a token, if the session is authenticated
    pub async fn user_id(&self, token: Uuid) -> Result<Option<i64>> {
        Ok(self
            .store
            .load(token)
            .await?
            .and_then(|session| session.user_id))
    }

    /// Check whether a token belongs to an authenticated session
    pub async fn is_authenticated(&self, token: Uuid) -> Result<bool> {
        Ok(self.user_id(token).await?.is_some())
    }

    /// Start an authenticated session and return its fresh token
    pub async fn login(&self, user_id: i64) -> Result<Uuid> {
        let token = Uuid::new_v4();
        self.store
            .save(
                token,
                SessionData {
                    user_id: Some(user_id),
                    created_at: Utc::now(),
                },
            )
            .await?;

        info!("Created session for user: {}", user_id);
        Ok(token)
    }

    /// How long ago the session behind a token was created
    pub async fn session_age(&self, token: Uuid) -> Result<Option<Duration>> {
        Ok(self
            .store
            .load(token)
            .await?
            .map(|session| Utc::now() - session.created_at))
    }

    /// Drop all state held for a token
    pub async fn logout(&self, token: Uuid) -> Result<()> {
        let age = self.session_age(token).await?;
        self.store.destroy(token).await?;
        match age {
            Some(age) => info!("Destroyed session after {}s", age.num_seconds()),
            None => info!("Logout for unknown session"),
        }
        Ok(())
    }
}
