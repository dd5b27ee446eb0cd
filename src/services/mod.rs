//! Supporting services shared across handlers.

/// Argon2 password hashing and verification
pub mod password_service;
/// In-process session store and cookie helpers
pub mod session_service;
