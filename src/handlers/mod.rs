//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates superficially and runs one SQL statement
//! 3. Returns an HTTP response (JSON, status code)

/// Registration, login, logout, user listing
pub mod auth;
/// Feedback, contact, and dish suggestion forms
pub mod forms;
/// Health check
pub mod health;
/// Menu browsing and simple menu orders
pub mod menu;
/// Checkout order management
pub mod orders;
