//! Authentication route handlers.
//!
//! Stub login and registration for the demo account. A malformed body is
//! answered like any unexpected failure: 500 with a generic message.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use secrecy::ExposeSecret;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, set_sentry_user};
use crate::models::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::models::{CurrentUser, session_keys};
use crate::services::auth::NewAccount;
use crate::state::AppState;

fn unreadable_body(rejection: &JsonRejection) -> AppError {
    AppError::Internal(format!("unreadable auth body: {}", rejection.body_text()))
}

/// Log in with the demo account.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(form) = payload.map_err(|e| unreadable_body(&e))?;

    let grant = state
        .auth()
        .login(&form.email, &form.password)
        .inspect_err(|_| tracing::info!("Login failed"))?;

    session.cycle_id().await?;
    session
        .insert(
            session_keys::CURRENT_USER,
            CurrentUser {
                id: grant.user.id.clone(),
                email: grant.user.email.clone(),
            },
        )
        .await?;
    set_sentry_user(&grant.user.id, Some(&grant.user.email));
    tracing::info!(user_id = %grant.user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        token: grant.token.expose_secret().to_string(),
        user: grant.user.into(),
    }))
}

/// Register a new account. Nothing is stored.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let Json(form) = payload.map_err(|e| unreadable_body(&e))?;

    let user = state.auth().register(NewAccount {
        email: &form.email,
        first_name: &form.first_name,
        last_name: &form.last_name,
    })?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful",
            user: user.into(),
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::TestApp;

    #[tokio::test]
    async fn test_login_success() {
        let mut app = TestApp::new();
        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({ "email": "user@example.com", "password": "password123" }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "user": { "id": "1", "name": "Demo User", "email": "user@example.com" },
                "token": "demo-token-12345",
            })
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut app = TestApp::new();
        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({ "email": "user@example.com", "password": "nope" }),
            )
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Invalid email or password" })
        );
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_unauthorized() {
        let mut app = TestApp::new();
        let (status, _) = app.post("/api/auth/login", json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_malformed_body_is_internal_error() {
        let mut app = TestApp::new();
        let (status, body) = app.post_raw("/api/auth/login", "{not json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_register() {
        let mut app = TestApp::new();
        let (status, body) = app
            .post(
                "/api/auth/register",
                json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "password": "secret1",
                    "confirmPassword": "secret1",
                    "agreeToTerms": true,
                }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration successful");
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert_eq!(body["user"]["firstName"], "Ada");
        assert!(body["user"]["id"].as_str().unwrap().len() > 1);
    }

    #[tokio::test]
    async fn test_register_taken_email() {
        let mut app = TestApp::new();
        let (status, body) = app
            .post(
                "/api/auth/register",
                json!({ "email": "existing@example.com", "password": "secret1" }),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Email already registered" })
        );
    }
}
