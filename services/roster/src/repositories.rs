//! Repositories for document-backed records

use anyhow::Result;
use common::Documents;
use tracing::info;

use crate::models::Credential;

pub mod student;

pub use student::StudentRepository;

/// Name of the document holding credentials
pub const USERS_DOCUMENT: &str = "users";

/// Credential repository for the `users` document
///
/// Credentials are seeded once and never mutated by the application.
#[derive(Clone)]
pub struct CredentialRepository {
    documents: Documents,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(documents: Documents) -> Self {
        Self { documents }
    }

    /// Get all credentials
    pub async fn list(&self) -> Vec<Credential> {
        self.documents.read_records(USERS_DOCUMENT).await
    }

    /// Find the first credential matching both username and password
    pub async fn verify(&self, username: &str, password: &str) -> Option<Credential> {
        self.list()
            .await
            .into_iter()
            .find(|credential| credential.matches(username, password))
    }

    /// Write the default credential if the document does not exist yet
    pub async fn ensure_seeded(&self, default: Credential) -> Result<()> {
        let username = default.username.clone();
        if self
            .documents
            .seed_if_absent(USERS_DOCUMENT, &[default])
            .await?
        {
            info!("Seeded default credential for user: {}", username);
        }
        Ok(())
    }
}
