//! Menu catalogue models and the simple order shape.

use serde::{Deserialize, Serialize};

/// Menu item row, managed externally and read-only here. Rows are returned
/// to the client verbatim.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Simple order against a menu item.
///
/// The item id is deliberately not checked for existence; the schema
/// carries no foreign key for it.
#[derive(Debug, Deserialize)]
pub struct SimpleOrderRequest {
    pub item_id: i64,
    pub quantity: i32,
}

/// Acknowledgment carrying the store-assigned order id.
#[derive(Debug, Serialize)]
pub struct SimpleOrderResponse {
    pub message: String,
    #[serde(rename = "orderId")]
    pub order_id: i64,
}
