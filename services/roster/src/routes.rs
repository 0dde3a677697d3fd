//! Roster service routes
//!
//! The base page handles every action. `GET` and `POST` both enter
//! [`dispatch`], which applies one fixed precedence: login, logout, the
//! session gate, mutations, then rendering. Mutations, logins and logouts
//! end in a redirect back to the bare path so a browser refresh never
//! resubmits a form.

use axum::{
    Form, Json, Router,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::{
    error::{WebError, WebResult},
    middleware::{CurrentSession, cleared_session_cookie, session_cookie},
    models::{PageQuery, SubmitForm},
    repositories::student::find_in,
    state::AppState,
    views::{LOGIN_FAILED, LoginView, ManagementView, render_login, render_management},
};

/// Create the router for the roster service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit_page))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "roster"
    }))
}

type Pairs = Vec<(String, String)>;

/// Decoded query pairs; an unparsable query counts as empty
fn page_query(query: Result<Query<Pairs>, QueryRejection>) -> PageQuery {
    match query {
        Ok(Query(pairs)) => PageQuery::from_pairs(pairs),
        Err(e) => {
            debug!("Treating unreadable query as empty: {}", e);
            PageQuery::default()
        }
    }
}

/// GET on the base page
pub async fn show_page(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
    uri: Uri,
    query: Result<Query<Pairs>, QueryRejection>,
) -> WebResult<Response> {
    dispatch(&state, session, jar, &uri, page_query(query), None).await
}

/// POST on the base page
///
/// A body that is not a readable form (wrong or missing content type,
/// bad encoding) is handled as an empty submission.
pub async fn submit_page(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
    uri: Uri,
    query: Result<Query<Pairs>, QueryRejection>,
    form: Result<Form<Pairs>, FormRejection>,
) -> WebResult<Response> {
    let form = match form {
        Ok(Form(pairs)) => SubmitForm::from_pairs(pairs),
        Err(e) => {
            debug!("Treating unreadable form body as empty: {}", e);
            SubmitForm::default()
        }
    };
    dispatch(&state, session, jar, &uri, page_query(query), Some(form)).await
}

/// Route one request through login, logout, the session gate, mutation
/// and rendering, in that order
pub async fn dispatch(
    state: &AppState,
    session: CurrentSession,
    jar: CookieJar,
    uri: &Uri,
    query: PageQuery,
    form: Option<SubmitForm>,
) -> WebResult<Response> {
    if let Err(e) = state.ensure_documents().await {
        error!("Failed to seed documents: {}", e);
    }

    let base = uri.path();

    let mut login_error = None;
    let mut attempted_username = String::new();
    if let Some(form) = form.as_ref().filter(|f| f.login.is_some()) {
        let username = form.username.as_deref().unwrap_or_default();
        let password = form.password.as_deref().unwrap_or_default();

        match state.credential_repository.verify(username, password).await {
            Some(credential) => {
                let token = state
                    .sessions
                    .login(credential.id)
                    .await
                    .map_err(WebError::Session)?;
                if let Some(previous) = session.token {
                    if let Err(e) = state.sessions.logout(previous).await {
                        error!("Failed to drop previous session: {}", e);
                    }
                }

                info!("Login succeeded for user: {}", credential.username);
                let jar = jar.add(session_cookie(&state.session_cookie, token));
                return Ok((jar, Redirect::to(base)).into_response());
            }
            None => {
                warn!("Login failed for user: {}", username);
                login_error = Some(LOGIN_FAILED);
                attempted_username = username.to_string();
            }
        }
    }

    if query.logout.is_some() {
        if let Some(token) = session.token {
            if let Err(e) = state.sessions.logout(token).await {
                error!("Failed to destroy session: {}", e);
            }
        }

        info!("Logout request");
        let jar = jar.remove(cleared_session_cookie(&state.session_cookie));
        return Ok((jar, Redirect::to(base)).into_response());
    }

    if !session.is_authenticated() {
        let view = LoginView {
            error: login_error,
            username: &attempted_username,
        };
        return Ok(Html(render_login(&view)).into_response());
    }

    if let Some(form) = form {
        apply_mutation(state, &form).await;
        return Ok(Redirect::to(base).into_response());
    }

    let students = state.student_repository.list().await;
    let edit = query.edit_id().and_then(|id| find_in(&students, id));

    let view = ManagementView {
        students: &students,
        edit,
    };
    Ok(Html(render_management(&view)).into_response())
}

/// Perform the student operation named by the submitted `action`
///
/// Failures are logged only; the caller redirects regardless.
async fn apply_mutation(state: &AppState, form: &SubmitForm) {
    let repository = &state.student_repository;
    let action = form.action.as_deref().unwrap_or_default();

    let result = match action {
        "add" => repository.add(form.student_fields()).await.map(|_| ()),
        "update" => repository
            .update(form.record_id(), form.student_fields())
            .await
            .map(|_| ()),
        "delete" => repository.delete(form.record_id()).await.map(|_| ()),
        other => {
            debug!("Ignoring submission with action: {:?}", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Failed to {} student: {}", action, e);
    }
}
