//! Auxiliary form handlers: feedback, contact messages, dish suggestions.
//!
//! Each form is a symmetric pair: an insert with a server-assigned
//! submission timestamp, and an unfiltered listing.

use crate::{
    error::AppError,
    models::{
        contact::{Contact, ContactRequest},
        feedback::{Feedback, SubmitFeedbackRequest},
        suggestion::{SuggestDishRequest, SuggestedDish},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Submit feedback.
///
/// # Endpoint
///
/// `POST /api/submitFeedback` with `{name, email, rating, comments}`
///
/// All fields are required. The rating is stored as given; no range check.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(rating) = request.rating else {
        return Err(AppError::InvalidRequest(
            "All fields are required, including a valid rating.".to_string(),
        ));
    };
    if request.name.is_empty() || request.email.is_empty() || request.comments.is_empty() {
        return Err(AppError::InvalidRequest(
            "All fields are required, including a valid rating.".to_string(),
        ));
    }

    sqlx::query("INSERT INTO feedback (name, email, rating, comments) VALUES ($1, $2, $3, $4)")
        .bind(&request.name)
        .bind(&request.email)
        .bind(rating)
        .bind(&request.comments)
        .execute(&state.pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Thank you for your feedback!" })),
    ))
}

/// List all feedback, most recent first.
pub async fn list_feedback(State(state): State<AppState>) -> Result<Response, AppError> {
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT id, name, email, rating, comments, submitted_at FROM feedback \
         ORDER BY submitted_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": feedback })).into_response())
}

/// Submit a contact message. All fields required.
///
/// # Endpoint
///
/// `POST /api/contact` with `{name, email, message}`
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Response, AppError> {
    if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
        return Err(AppError::InvalidRequest(
            "All fields are required!".to_string(),
        ));
    }

    sqlx::query("INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3)")
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.message)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Thank you for contacting us! We will get back to you soon."
    }))
    .into_response())
}

/// List all contact messages, most recent first.
pub async fn list_contacts(State(state): State<AppState>) -> Result<Response, AppError> {
    let contacts = sqlx::query_as::<_, Contact>(
        "SELECT id, name, email, message, submitted_at FROM contacts ORDER BY submitted_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(json!({ "message": "Contacts fetched successfully", "data": contacts }))
        .into_response())
}

/// Submit a dish suggestion.
///
/// # Endpoint
///
/// `POST /suggest-dish` with `{name, email, dishName, dishDescription}`
///
/// Name, email, and dish name are required; the description is optional.
pub async fn suggest_dish(
    State(state): State<AppState>,
    Json(request): Json<SuggestDishRequest>,
) -> Result<Response, AppError> {
    if request.name.is_empty() || request.email.is_empty() || request.dish_name.is_empty() {
        return Err(AppError::InvalidRequest(
            "All fields are required!".to_string(),
        ));
    }

    sqlx::query(
        "INSERT INTO suggested_dishes (name, email, dish_name, description) VALUES ($1, $2, $3, $4)",
    )
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.dish_name)
    .bind(&request.dish_description)
    .execute(&state.pool)
    .await?;

    Ok(Json(json!({ "message": "Suggestion submitted successfully!" })).into_response())
}

/// List all dish suggestions in insertion order.
pub async fn list_suggestions(State(state): State<AppState>) -> Result<Response, AppError> {
    let suggestions = sqlx::query_as::<_, SuggestedDish>(
        "SELECT id, name, email, dish_name, description, submitted_at FROM suggested_dishes \
         ORDER BY id",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(json!({ "success": true, "data": suggestions })).into_response())
}
