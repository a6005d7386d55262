//! The seam between the views and the Catalog & Order Service.
//!
//! Every view talks to the service through [`DrinkService`], one method per
//! REST call. [`HttpService`] speaks to a running service; [`LocalService`]
//! answers the same calls from an embedded SQLite database.

mod http;
mod local;

pub use http::HttpService;
pub use local::LocalService;

use std::sync::Arc;

use crate::error::Result;
use crate::lifecycle::Transition;
use crate::models::{CreateDrink, CreateOrder, Drink, DrinkId, Order, OrderId, Settings, Statistics};

pub trait DrinkService: Send + Sync {
    /// `POST /verify-admin`
    fn verify_admin(&self, password: &str) -> Result<bool>;

    /// `GET /drinks`
    fn drinks(&self) -> Result<Vec<Drink>>;

    /// `POST /drinks`
    fn create_drink(&self, drink: &CreateDrink) -> Result<Drink>;

    /// `PUT /drinks/{id}`
    fn update_drink(&self, id: DrinkId, drink: &CreateDrink) -> Result<Drink>;

    /// `DELETE /drinks/{id}`
    fn delete_drink(&self, id: DrinkId) -> Result<()>;

    /// `GET /statistics`
    fn statistics(&self) -> Result<Statistics>;

    /// `POST /statistics/reset`
    fn reset_statistics(&self) -> Result<()>;

    /// `GET /orders`
    fn orders(&self) -> Result<Vec<Order>>;

    /// `POST /orders`
    fn create_order(&self, order: &CreateOrder) -> Result<Order>;

    /// `PUT /orders/{id}/prepared|complete|paid`
    fn transition_order(&self, id: OrderId, transition: Transition) -> Result<()>;

    /// `GET /settings`
    fn settings(&self) -> Result<Settings>;

    /// `POST /settings`
    fn update_settings(&self, settings: &Settings) -> Result<Settings>;
}

pub type SharedService = Arc<dyn DrinkService>;
