//! Dish suggestion models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suggested dish row. Insert-only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SuggestedDish {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub dish_name: String,
    pub description: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Dish suggestion payload (camelCase keys from the form).
///
/// Name, email, and dish name are required; the description is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestDishRequest {
    pub name: String,
    pub email: String,
    pub dish_name: String,
    pub dish_description: Option<String>,
}
