use thiserror::Error;

use crate::lifecycle::Transition;
use crate::models::OrderStatus;

/// Problems caught on the client before anything is sent to the service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a customer name")]
    MissingCustomerName,

    #[error("Please select at least one drink")]
    EmptyCart,

    #[error("Please enter a drink name")]
    MissingDrinkName,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Admin login required")]
    NotAuthenticated,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Cannot {action} an order that is {from}")]
    InvalidTransition { from: OrderStatus, action: Transition },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service responded with status {status}")]
    Status { status: u16 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("State lock poisoned")]
    Poisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
