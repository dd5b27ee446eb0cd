//! Menu browsing and simple order handlers.

use crate::{
    error::AppError,
    models::menu::{MenuItem, SimpleOrderRequest, SimpleOrderResponse},
    state::AppState,
};
use axum::{Json, extract::State};

/// List the menu catalogue verbatim. No caching, no versioning.
///
/// # Endpoint
///
/// `GET /menu`
pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items =
        sqlx::query_as::<_, MenuItem>("SELECT id, name, description, price FROM menu_items")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(items))
}

/// Place a simple order against a menu item.
///
/// # Endpoint
///
/// `POST /order` with `{item_id, quantity}`
///
/// The item id is not checked for existence (no foreign key). Returns the
/// store-assigned order id.
pub async fn place_simple_order(
    State(state): State<AppState>,
    Json(request): Json<SimpleOrderRequest>,
) -> Result<Json<SimpleOrderResponse>, AppError> {
    let order_id: i64 =
        sqlx::query_scalar("INSERT INTO menu_orders (item_id, quantity) VALUES ($1, $2) RETURNING id")
            .bind(request.item_id)
            .bind(request.quantity)
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(SimpleOrderResponse {
        message: "Order placed successfully!".to_string(),
        order_id,
    }))
}
