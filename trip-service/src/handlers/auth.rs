//! Login, logout and session restoration.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::dtos::auth::LoginRequest;
use crate::error::AppError;
use crate::models::SessionUser;
use crate::services::metrics::LOGINS_TOTAL;
use crate::utils::ValidatedJson;
use crate::AppState;

/// Session key holding the authenticated identity.
pub const SESSION_USER_KEY: &str = "user";

/// Verify credentials, establish the session, and return the identity.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = match state
        .auth
        .verify_credentials(&req.username, &req.password)
        .await
    {
        Ok(user) => {
            LOGINS_TOTAL.with_label_values(&["success"]).inc();
            user
        }
        Err(err) => {
            LOGINS_TOTAL.with_label_values(&["failure"]).inc();
            return Err(err);
        }
    };

    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(session_error)?;

    tracing::info!(username = %user.username, role = user.role.as_str(), "Login successful");

    Ok((StatusCode::OK, Json(user)))
}

/// Tear the session down: both the in-memory entry and the stored copy go.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await.map_err(session_error)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Logged out successfully"
        })),
    ))
}

/// Restore the identity from the persisted session, if any.
pub async fn current_session(session: Session) -> Result<impl IntoResponse, AppError> {
    let user: Option<SessionUser> = session.get(SESSION_USER_KEY).await.map_err(session_error)?;

    match user {
        Some(user) => Ok((StatusCode::OK, Json(user))),
        None => Err(AppError::Unauthorized(anyhow::anyhow!("Not logged in"))),
    }
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    AppError::InternalError(anyhow::anyhow!("Session store error: {}", err))
}
