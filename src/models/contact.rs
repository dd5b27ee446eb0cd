//! Contact form models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact message row. Insert-only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Contact form payload; all fields required.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
