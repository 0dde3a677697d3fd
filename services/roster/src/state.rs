//! Application state shared across handlers

use std::sync::Arc;

use anyhow::Result;
use common::Documents;

use crate::{
    config::AppConfig,
    models::Credential,
    repositories::{CredentialRepository, StudentRepository},
    session::{SessionManager, SessionStore},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub student_repository: StudentRepository,
    pub credential_repository: CredentialRepository,
    pub sessions: SessionManager,
    pub session_cookie: Arc<str>,
    pub default_credential: Arc<Credential>,
}

impl AppState {
    /// Wire repositories and the session gate over injected stores
    pub fn new(documents: Documents, session_store: Arc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self {
            student_repository: StudentRepository::new(documents.clone()),
            credential_repository: CredentialRepository::new(documents),
            sessions: SessionManager::new(session_store),
            session_cookie: Arc::from(config.session_cookie.as_str()),
            default_credential: Arc::new(config.default_credential()),
        }
    }

    /// Seed whichever of the two documents is missing
    pub async fn ensure_documents(&self) -> Result<()> {
        self.credential_repository
            .ensure_seeded(self.default_credential.as_ref().clone())
            .await?;
        self.student_repository.ensure_seeded().await?;
        Ok(())
    }
}
