//! Authentication HTTP handlers.
//!
//! This module implements the account endpoints:
//! - POST /register - Create a user account
//! - POST /login - Verify credentials for either role
//! - GET /logout - Destroy the caller's session
//! - GET /api/get-users - List registered users

use crate::{
    error::AppError,
    models::user::{Admin, LoginRequest, LoginResponse, RegisterRequest, User, UserSummary},
    services::{password_service, session_service},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

/// Register a new user.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Flow
///
/// 1. Presence check on all three fields → 400 "All fields are required"
/// 2. Declarative schema (email format, username ≥ 3 chars) → 400
/// 3. Argon2-hash the password and insert the row
///
/// A uniqueness violation on email/username surfaces as the generic 500
/// envelope; no sensitive data is ever echoed back.
///
/// # Response (201 Created)
///
/// ```json
/// { "success": true, "message": "User registered successfully" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.email.is_empty() || request.username.is_empty() || request.password.is_empty() {
        return Err(AppError::InvalidRequest(
            "All fields are required".to_string(),
        ));
    }

    if request.validate().is_err() {
        return Err(AppError::Validation(
            "Invalid email or username".to_string(),
        ));
    }

    let hashed_password = password_service::hash_password(&request.password)?;

    sqlx::query("INSERT INTO users (email, username, password) VALUES ($1, $2, $3)")
        .bind(&request.email)
        .bind(&request.username)
        .bind(&hashed_password)
        .execute(&state.pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "User registered successfully" })),
    ))
}

/// Log in as either role.
///
/// # Endpoint
///
/// `POST /login` with `{username, password, role}` where role is exactly
/// `"admin"` or `"users"`. Any other role is rejected with 400 before any
/// store query is issued.
///
/// Both roles verify an argon2 hash. A successful `users` login creates a
/// session and sets the `sid` cookie; admins get no session and a null
/// `testerId`.
///
/// # Response (200 OK)
///
/// ```json
/// { "success": true, "message": "users login successful", "role": "users", "testerId": 7 }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if request.username.is_empty() || request.password.is_empty() || request.role.is_empty() {
        return Err(AppError::InvalidRequest(
            "All fields are required".to_string(),
        ));
    }

    if request.role != "admin" && request.role != "users" {
        return Err(AppError::InvalidRequest("Invalid role".to_string()));
    }

    // Look up the matching table by role
    let (user_id, stored_hash) = if request.role == "admin" {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password FROM admin WHERE username = $1",
        )
        .bind(&request.username)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("{} not found", request.role)))?;
        (admin.id, admin.password)
    } else {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, username, password, created_at FROM users WHERE username = $1",
        )
        .bind(&request.username)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("{} not found", request.role)))?;
        (user.id, user.password)
    };

    if !password_service::verify_password(&request.password, &stored_hash)? {
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let message = format!("{} login successful", request.role);

    if request.role == "users" {
        // Session keyed by the store-assigned user id
        let token = state.sessions.create(user_id).await;
        let body = Json(LoginResponse {
            success: true,
            message,
            role: request.role,
            tester_id: Some(user_id),
        });
        Ok((
            [(header::SET_COOKIE, session_service::session_cookie(&token))],
            body,
        )
            .into_response())
    } else {
        let body = Json(LoginResponse {
            success: true,
            message,
            role: request.role,
            tester_id: None,
        });
        Ok(body.into_response())
    }
}

/// Log out: destroy the caller's session and send them to the login view.
///
/// # Endpoint
///
/// `GET /logout`
///
/// A missing or already-destroyed session is logged, never surfaced; the
/// cookie is expired and the redirect happens either way.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_service::session_token(&headers) {
        if !state.sessions.destroy(&token).await {
            tracing::warn!("logout requested for an unknown or expired session");
        }
    }

    (
        [(header::SET_COOKIE, session_service::clear_session_cookie())],
        Redirect::to("/login.html"),
    )
}

/// List registered users (id, username, email, created_at).
///
/// # Endpoint
///
/// `GET /api/get-users`
///
/// Password hashes are never selected.
pub async fn list_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let users =
        sqlx::query_as::<_, UserSummary>("SELECT id, username, email, created_at FROM users")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(json!({ "success": true, "data": users })).into_response())
}
