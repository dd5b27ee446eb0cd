//! Checkout order models and API request/response types.
//!
//! Two request shapes exist because the storefront posts camelCase keys to
//! `/place-order` while the admin dashboard sends column-named snake_case
//! keys to `/edit-order/{id}`. Both funnel into [`OrderFields`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order row from the `orders` table.
///
/// There is no status column: an order exists or it doesn't.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub food_item: String,
    pub quantity: i32,
    pub amount: f64,
    pub order_date: NaiveDate,
    pub special_instructions: String,
    pub payment_method: String,
}

/// The thirteen mutable order fields, concretely typed and ready to bind.
#[derive(Debug)]
pub struct OrderFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub food_item: String,
    pub quantity: i32,
    pub amount: f64,
    pub order_date: NaiveDate,
    pub special_instructions: String,
    pub payment_method: String,
}

/// Checkout payload posted by the storefront (camelCase keys).
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "phone": "555-0101",
///   "email": "jane@example.com",
///   "address": "1 Main St",
///   "city": "Springfield",
///   "postalCode": "12345",
///   "country": "USA",
///   "foodItem": "Margherita Pizza",
///   "quantity": 2,
///   "amount": 24.5,
///   "orderDate": "2025-03-01",
///   "specialInstructions": "No basil",
///   "paymentMethod": "card"
/// }
/// ```
///
/// All thirteen fields are mandatory. There is no idempotency key: the same
/// payload submitted twice creates two distinct orders.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub food_item: String,
    pub quantity: Option<i32>,
    pub amount: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub special_instructions: String,
    pub payment_method: String,
}

impl PlaceOrderRequest {
    /// Presence check over all thirteen mandatory fields.
    ///
    /// On failure returns the caller-facing names of the omissions, in
    /// field order.
    pub fn into_fields(self) -> Result<OrderFields, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut check = |present: bool, name: &'static str| {
            if !present {
                missing.push(name);
            }
        };

        check(!self.name.is_empty(), "name");
        check(!self.phone.is_empty(), "phone");
        check(!self.email.is_empty(), "email");
        check(!self.address.is_empty(), "address");
        check(!self.city.is_empty(), "city");
        check(!self.postal_code.is_empty(), "postalCode");
        check(!self.country.is_empty(), "country");
        check(!self.food_item.is_empty(), "foodItem");
        check(self.quantity.is_some(), "quantity");
        check(self.amount.is_some(), "amount");
        check(self.order_date.is_some(), "orderDate");
        check(!self.special_instructions.is_empty(), "specialInstructions");
        check(!self.payment_method.is_empty(), "paymentMethod");

        match (self.quantity, self.amount, self.order_date) {
            (Some(quantity), Some(amount), Some(order_date)) if missing.is_empty() => {
                Ok(OrderFields {
                    name: self.name,
                    phone: self.phone,
                    email: self.email,
                    address: self.address,
                    city: self.city,
                    postal_code: self.postal_code,
                    country: self.country,
                    food_item: self.food_item,
                    quantity,
                    amount,
                    order_date,
                    special_instructions: self.special_instructions,
                    payment_method: self.payment_method,
                })
            }
            _ => Err(missing),
        }
    }
}

/// Full-overwrite payload for `/edit-order/{id}` (snake_case keys, matching
/// the column names). Not a partial patch: every mutable field is replaced.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditOrderRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub food_item: String,
    pub quantity: Option<i32>,
    pub amount: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub special_instructions: String,
    pub payment_method: String,
}

impl EditOrderRequest {
    /// Same presence check as placement, reporting snake_case names.
    pub fn into_fields(self) -> Result<OrderFields, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut check = |present: bool, name: &'static str| {
            if !present {
                missing.push(name);
            }
        };

        check(!self.name.is_empty(), "name");
        check(!self.phone.is_empty(), "phone");
        check(!self.email.is_empty(), "email");
        check(!self.address.is_empty(), "address");
        check(!self.city.is_empty(), "city");
        check(!self.postal_code.is_empty(), "postal_code");
        check(!self.country.is_empty(), "country");
        check(!self.food_item.is_empty(), "food_item");
        check(self.quantity.is_some(), "quantity");
        check(self.amount.is_some(), "amount");
        check(self.order_date.is_some(), "order_date");
        check(!self.special_instructions.is_empty(), "special_instructions");
        check(!self.payment_method.is_empty(), "payment_method");

        match (self.quantity, self.amount, self.order_date) {
            (Some(quantity), Some(amount), Some(order_date)) if missing.is_empty() => {
                Ok(OrderFields {
                    name: self.name,
                    phone: self.phone,
                    email: self.email,
                    address: self.address,
                    city: self.city,
                    postal_code: self.postal_code,
                    country: self.country,
                    food_item: self.food_item,
                    quantity,
                    amount,
                    order_date,
                    special_instructions: self.special_instructions,
                    payment_method: self.payment_method,
                })
            }
            _ => Err(missing),
        }
    }
}

/// Order as returned by the listing and fetch endpoints.
///
/// The four address columns are collapsed into one display string.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// `"{address}, {city}, {postal_code}, {country}"`
    pub address: String,
    pub food_item: String,
    pub quantity: i32,
    pub amount: f64,
    pub order_date: NaiveDate,
    pub payment_method: String,
    pub special_instructions: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            name: order.name,
            phone: order.phone,
            email: order.email,
            address: format!(
                "{}, {}, {}, {}",
                order.address, order.city, order.postal_code, order.country
            ),
            food_item: order.food_item,
            quantity: order.quantity,
            amount: order.amount,
            order_date: order.order_date,
            payment_method: order.payment_method,
            special_instructions: order.special_instructions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_order() -> Order {
        Order {
            id: 1,
            name: "Jane Doe".to_string(),
            phone: "555-0101".to_string(),
            email: "jane@example.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            food_item: "Margherita Pizza".to_string(),
            quantity: 2,
            amount: 24.5,
            order_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            special_instructions: "No basil".to_string(),
            payment_method: "card".to_string(),
        }
    }

    #[test]
    fn response_concatenates_the_address_fields_exactly() {
        let response = OrderResponse::from(full_order());
        assert_eq!(response.address, "1 Main St, Springfield, 12345, USA");
    }

    #[test]
    fn place_order_accepts_camel_case_keys() {
        let parsed: PlaceOrderRequest = serde_json::from_str(
            r#"{
                "name": "Jane", "phone": "555", "email": "j@x.com",
                "address": "1 Main St", "city": "Springfield",
                "postalCode": "12345", "country": "USA",
                "foodItem": "Pizza", "quantity": 2, "amount": 24.5,
                "orderDate": "2025-03-01", "specialInstructions": "none",
                "paymentMethod": "card"
            }"#,
        )
        .unwrap();

        let fields = parsed.into_fields().unwrap();
        assert_eq!(fields.postal_code, "12345");
        assert_eq!(fields.quantity, 2);
        assert_eq!(
            fields.order_date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn place_order_lists_every_omission_in_field_order() {
        let request = PlaceOrderRequest {
            name: "Jane".to_string(),
            phone: "555".to_string(),
            email: "j@x.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            food_item: "Pizza".to_string(),
            payment_method: "card".to_string(),
            ..Default::default()
        };

        let missing = request.into_fields().unwrap_err();
        assert_eq!(
            missing,
            vec![
                "postalCode",
                "quantity",
                "amount",
                "orderDate",
                "specialInstructions"
            ]
        );
    }

    #[test]
    fn edit_order_reports_snake_case_names() {
        let request = EditOrderRequest::default();
        let missing = request.into_fields().unwrap_err();
        assert!(missing.contains(&"postal_code"));
        assert!(missing.contains(&"order_date"));
        assert_eq!(missing.len(), 13);
    }
}
