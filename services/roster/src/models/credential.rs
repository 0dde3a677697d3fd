//! Credential model

use serde::{Deserialize, Serialize};

/// Username/password pair allowed to use the roster, stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
