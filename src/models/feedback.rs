//! Feedback form models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feedback row. Insert-only; never edited or removed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub comments: String,
    pub submitted_at: DateTime<Utc>,
}

/// Feedback submission payload.
///
/// All four fields are required. The rating is stored as given, with no
/// numeric range check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitFeedbackRequest {
    pub name: String,
    pub email: String,
    pub rating: Option<i32>,
    pub comments: String,
}
