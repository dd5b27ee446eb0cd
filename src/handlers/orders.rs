//! Checkout order HTTP handlers.
//!
//! This module implements the order lifecycle endpoints:
//! - POST /place-order - Create an order
//! - GET /get-all-orders - List all orders, newest order date first
//! - GET /get-order/{id} - Fetch one order
//! - PUT /edit-order/{id} - Full overwrite of one order
//! - DELETE /delete-order/{id} - Remove one order

use crate::{
    error::AppError,
    models::order::{EditOrderRequest, Order, OrderResponse, PlaceOrderRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

const ORDER_COLUMNS: &str = "id, name, phone, email, address, city, postal_code, country, \
     food_item, quantity, amount, order_date, special_instructions, payment_method";

/// Place a checkout order.
///
/// # Endpoint
///
/// `POST /place-order` (camelCase body, see [`PlaceOrderRequest`])
///
/// All thirteen fields are mandatory; the 400 response names the
/// omissions. Values are stored verbatim. There is no idempotency key, so
/// an identical resubmission creates a second order.
///
/// # Response (201 Created)
///
/// ```json
/// { "success": true, "message": "Order placed successfully!" }
/// ```
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fields = request.into_fields().map_err(|missing| {
        AppError::InvalidRequest(format!("Missing required fields: {}", missing.join(", ")))
    })?;

    sqlx::query(
        r#"
        INSERT INTO orders (name, phone, email, address, city, postal_code, country,
                            food_item, quantity, amount, order_date, special_instructions,
                            payment_method)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.phone)
    .bind(&fields.email)
    .bind(&fields.address)
    .bind(&fields.city)
    .bind(&fields.postal_code)
    .bind(&fields.country)
    .bind(&fields.food_item)
    .bind(fields.quantity)
    .bind(fields.amount)
    .bind(fields.order_date)
    .bind(&fields.special_instructions)
    .bind(&fields.payment_method)
    .execute(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Order placed successfully!" })),
    ))
}

/// List all orders, most recent order date first.
///
/// No pagination or filtering: the catalogue is single-location and the
/// full scan is the accepted contract. Address fields come back as one
/// display string.
pub async fn list_orders(State(state): State<AppState>) -> Result<Response, AppError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY order_date DESC"
    ))
    .fetch_all(&state.pool)
    .await?;

    let data: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();

    Ok(Json(json!({ "message": "Orders fetched successfully", "data": data })).into_response())
}

/// Fetch one order by id, or 404.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Response, AppError> {
    let order =
        sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
            .bind(order_id)
            .fetch_optional(&state.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    let data = OrderResponse::from(order);

    Ok(Json(json!({ "message": "Order fetched successfully", "data": data })).into_response())
}

/// Overwrite all mutable fields of one order.
///
/// # Endpoint
///
/// `PUT /edit-order/{id}` (snake_case body, see [`EditOrderRequest`])
///
/// This is a full replace, not a patch: one UPDATE covers every field, so
/// a concurrent read never observes a half-updated row. Zero affected rows
/// means the id is absent or the values were identical; the two cases are
/// not distinguished.
pub async fn edit_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<EditOrderRequest>,
) -> Result<Response, AppError> {
    let fields = request.into_fields().map_err(|missing| {
        AppError::InvalidRequest(format!("Missing required fields: {}", missing.join(", ")))
    })?;

    let result = sqlx::query(
        r#"
        UPDATE orders
        SET name = $1, phone = $2, email = $3, address = $4, city = $5,
            postal_code = $6, country = $7, food_item = $8, quantity = $9,
            amount = $10, order_date = $11, special_instructions = $12,
            payment_method = $13
        WHERE id = $14
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.phone)
    .bind(&fields.email)
    .bind(&fields.address)
    .bind(&fields.city)
    .bind(&fields.postal_code)
    .bind(&fields.country)
    .bind(&fields.food_item)
    .bind(fields.quantity)
    .bind(fields.amount)
    .bind(fields.order_date)
    .bind(&fields.special_instructions)
    .bind(&fields.payment_method)
    .bind(order_id)
    .execute(&state.pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Order not found or no changes made".to_string(),
        ));
    }

    Ok(Json(json!({ "message": "Order updated successfully" })).into_response())
}

/// Delete one order by id, or 404.
///
/// Idempotent in effect: deleting the same id twice yields one success and
/// one 404, and the row is gone either way.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Response, AppError> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(order_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(Json(json!({ "message": "Order deleted successfully" })).into_response())
}
