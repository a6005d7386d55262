use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use super::notice::{self, Notice, NoticeKind};
use super::{order_lines, OrderLine};
use crate::api::SharedService;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::lifecycle;
use crate::models::{DrinkId, Order, Settings};
use crate::poller::LiveView;
use crate::stats::{self, DrinkTally};

/// Order entry ("Kasse"): pick drinks, name the customer, submit.
pub struct CashierView {
    service: SharedService,
    catalog: Catalog,
    cart: Cart,
    customer_name: String,
    open_orders: Vec<Order>,
    settings: Settings,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl CashierView {
    pub fn new(service: SharedService, notice_ttl: Duration) -> Self {
        CashierView {
            service,
            catalog: Catalog::default(),
            cart: Cart::new(),
            customer_name: String::new(),
            open_orders: Vec::new(),
            settings: Settings::default(),
            notice: None,
            notice_ttl,
        }
    }

    pub fn refresh_drinks(&mut self) {
        match self.service.drinks() {
            Ok(drinks) => {
                self.catalog = Catalog::new(drinks);
                if self.notice.as_ref().is_some_and(|n| n.text == notice::DRINKS_LOAD_FAILED) {
                    self.notice = None;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to load drinks");
                self.notice = Some(Notice::error(notice::DRINKS_LOAD_FAILED));
            }
        }
    }

    pub fn refresh_orders(&mut self) {
        match self.service.orders() {
            Ok(orders) => {
                self.open_orders = lifecycle::open_orders(&orders).into_iter().cloned().collect();
            }
            Err(e) => error!(error = %e, "failed to load open orders"),
        }
    }

    pub fn refresh_settings(&mut self) {
        match self.service.settings() {
            Ok(settings) => self.settings = settings,
            Err(e) => error!(error = %e, "failed to load settings"),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn increment(&mut self, drink_id: DrinkId) {
        self.cart.increment(drink_id);
    }

    pub fn decrement(&mut self, drink_id: DrinkId) {
        self.cart.decrement(drink_id);
    }

    pub fn quantity(&self, drink_id: DrinkId) -> u32 {
        self.cart.quantity(drink_id)
    }

    /// Running total of the current selection at today's prices.
    pub fn total(&self) -> f64 {
        self.cart.total(&self.catalog)
    }

    /// Sends the current selection as a new order. Missing name or empty
    /// selection are reported without contacting the service.
    pub fn submit(&mut self) -> Result<Order> {
        let payload = match self.cart.to_order(&self.customer_name, &self.catalog) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(reason = %e, "order not submitted");
                self.notice = Some(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        match self.service.create_order(&payload) {
            Ok(order) => {
                info!(order_id = order.id, "order submitted");
                self.customer_name.clear();
                self.cart.clear();
                self.notice = Some(Notice::success(notice::ORDER_PLACED, self.notice_ttl));
                self.refresh_orders();
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "error submitting order");
                self.notice = Some(Notice::error(notice::ORDER_FAILED));
                Err(e)
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }

    pub fn has_error(&self) -> bool {
        self.notice().is_some_and(|n| n.kind == NoticeKind::Error)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn open_order_count(&self) -> Option<usize> {
        self.settings.show_order_count.then_some(self.open_orders.len())
    }

    /// Most recent open order, as the service lists them.
    pub fn last_open_order(&self) -> Option<&Order> {
        if !self.settings.show_last_order {
            return None;
        }
        self.open_orders.last()
    }

    pub fn open_order_list(&self) -> Option<&[Order]> {
        self.settings.show_order_list.then_some(self.open_orders.as_slice())
    }

    /// Per-drink quantities still owed across all open orders.
    pub fn overview(&self) -> Option<Vec<DrinkTally>> {
        self.settings
            .show_order_list
            .then(|| stats::open_order_overview(&self.open_orders, &self.catalog))
    }

    pub fn lines(&self, order: &Order) -> Vec<OrderLine> {
        order_lines(order, &self.catalog)
    }

    pub fn order_total(&self, order: &Order) -> f64 {
        stats::order_total(&order.items, &self.catalog)
    }
}

impl LiveView for CashierView {
    fn load(&mut self) {
        self.refresh_drinks();
        self.refresh_orders();
        self.refresh_settings();
    }

    fn refresh(&mut self) {
        self.refresh_orders();
    }
}
