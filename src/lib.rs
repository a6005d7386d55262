pub mod api;
pub mod cart;
pub mod catalog;
mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod poller;
pub mod stats;
pub mod views;


pub use api::{DrinkService, HttpService, LocalService, SharedService};
pub use cart::Cart;
pub use catalog::{Catalog, UNKNOWN_DRINK};
pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use lifecycle::Transition;
pub use models::{
    CreateDrink, CreateOrder, CreateOrderItem, Drink, DrinkId, DrinkStatistics, Order, OrderId, OrderItem,
    OrderStatus, Settings, Statistics,
};
pub use poller::{LiveView, Mounted, Poller};
pub use stats::Dashboard;
pub use views::{AdminView, CashierView, PreparationView};
