use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type DrinkId = i64;
pub type OrderId = i64;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Drink {
    pub id: DrinkId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateDrink {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl CreateDrink {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingDrinkName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}

/// Where an order stands. The service has shipped several vocabularies over
/// time; all of them are accepted on input, only the canonical names go out.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[serde(alias = "offen", alias = "unpaid")]
    Open,
    #[serde(alias = "in_zubereitung", alias = "zubereitet")]
    InPreparation,
    #[serde(alias = "fertig", alias = "delivered")]
    Completed,
    #[serde(alias = "bezahlt")]
    Paid,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::InPreparation => "in_preparation",
            OrderStatus::Completed => "completed",
            OrderStatus::Paid => "paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" | "offen" | "unpaid" => Some(OrderStatus::Open),
            "in_preparation" | "in_zubereitung" | "zubereitet" => Some(OrderStatus::InPreparation),
            "completed" | "fertig" | "delivered" => Some(OrderStatus::Completed),
            "paid" | "bezahlt" => Some(OrderStatus::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub drink_id: DrinkId,
    pub quantity: u32,
    // Price per unit when the order was placed; absent on legacy payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateOrderItem {
    pub drink_id: DrinkId,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateOrder {
    pub customer_name: String,
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DrinkStatistics {
    pub drink_id: DrinkId,
    pub name: String,
    pub total_quantity: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Statistics {
    pub drinks: Vec<DrinkStatistics>,
    pub total_orders: u64,
    pub open_orders: u64,
}

/// Display toggles for the optional cashier widgets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub show_order_count: bool,
    pub show_last_order: bool,
    pub show_order_list: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_order_count: true,
            show_last_order: true,
            show_order_list: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLogin {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminVerification {
    pub valid: bool,
}
