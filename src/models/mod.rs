//! Data models representing database entities and their API shapes.

/// Contact form submissions
pub mod contact;
/// Feedback submissions
pub mod feedback;
/// Menu catalogue and simple menu orders
pub mod menu;
/// Checkout orders
pub mod order;
/// Dish suggestions
pub mod suggestion;
/// Users, admins, and authentication payloads
pub mod user;
