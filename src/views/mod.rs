//! One state container per screen. None of them share state: each keeps its
//! own copy of what the service returned, re-fetches after its own writes and
//! otherwise waits for its poll timer.

pub mod admin;
pub mod cashier;
pub mod notice;
pub mod preparation;

pub use admin::{AdminView, DrinkForm};
pub use cashier::CashierView;
pub use notice::{Notice, NoticeKind};
pub use preparation::{OrderDetails, PreparationView};

use serde::Serialize;

use crate::api::SharedService;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{DrinkId, Order};
use crate::poller::Mounted;
use crate::stats;

/// One row of an order as displayed. Price columns are empty when the drink
/// is gone from the catalog and the order carries no snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub drink_id: DrinkId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Option<f64>,
    pub subtotal: Option<f64>,
}

pub fn order_lines(order: &Order, catalog: &Catalog) -> Vec<OrderLine> {
    order
        .items
        .iter()
        .map(|item| OrderLine {
            drink_id: item.drink_id,
            name: catalog.name_of(item.drink_id).to_string(),
            quantity: item.quantity,
            unit_price: item.unit_price.or_else(|| catalog.price_of(item.drink_id)),
            subtotal: stats::line_total(item, catalog),
        })
        .collect()
}

pub fn mount_cashier(service: SharedService, config: &Config) -> Mounted<CashierView> {
    Mounted::new(
        CashierView::new(service, config.notice_duration),
        config.cashier_poll_interval,
    )
}

pub fn mount_preparation(service: SharedService, config: &Config) -> Mounted<PreparationView> {
    Mounted::new(PreparationView::new(service), config.preparation_poll_interval)
}
