//! User and admin models plus authentication request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registered customer row from the `users` table.
///
/// The `password` column holds an argon2 PHC string; the plaintext is
/// hashed at registration and never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Admin operator row from the `admin` table, provisioned out of band.
///
/// Admin credentials use the same argon2 discipline as regular users.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Registration payload with its declarative shape schema.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "username": "jane",
///   "password": "s3cret"
/// }
/// ```
///
/// # Validation
///
/// - `email`: must look like an email address
/// - `username`: at least 3 characters
/// - `password`: non-empty
///
/// Missing fields deserialize to empty strings and are caught by the
/// handler's presence check before the schema runs.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 3))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Login payload. `role` must be exactly "admin" or "users".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Login acknowledgment.
///
/// `testerId` carries the matched user's id for `users` logins and is null
/// for admin logins.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub role: String,
    #[serde(rename = "testerId")]
    pub tester_id: Option<i64>,
}

/// Public listing of a user account. Never carries the password hash.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn well_formed_registration_passes_the_schema() {
        assert!(request("jane@example.com", "jane", "pw").validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert!(request("not-an-email", "jane", "pw").validate().is_err());
    }

    #[test]
    fn short_username_is_rejected() {
        assert!(request("jane@example.com", "jo", "pw").validate().is_err());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(request("jane@example.com", "jane", "").validate().is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let parsed: RegisterRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(parsed.email, "a@b.com");
        assert!(parsed.username.is_empty());
        assert!(parsed.password.is_empty());
    }
}
