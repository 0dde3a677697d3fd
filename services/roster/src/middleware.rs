//! Session cookie extraction and construction

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::error;
use uuid::Uuid;

use crate::state::AppState;

/// Session resolved from the request cookie
///
/// Never rejects: a missing, malformed or unknown token is simply an
/// unauthenticated session.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentSession {
    pub token: Option<Uuid>,
    pub user_id: Option<i64>,
}

impl CurrentSession {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar
            .get(&state.session_cookie)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        else {
            return Ok(Self::default());
        };

        let user_id = match state.sessions.user_id(token).await {
            Ok(user_id) => user_id,
            Err(e) => {
                error!("Failed to load session: {}", e);
                None
            }
        };

        Ok(Self {
            token: Some(token),
            user_id,
        })
    }
}

/// Cookie handing a session token to the browser
pub fn session_cookie(name: &str, token: Uuid) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to remove the session token from the browser
pub fn cleared_session_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
