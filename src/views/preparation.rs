use tracing::{error, info, warn};

use super::{order_lines, OrderLine};
use crate::api::SharedService;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::lifecycle::{self, Transition};
use crate::models::{Order, OrderId};
use crate::poller::LiveView;

/// Everything the detail dialog shows for one order. `total` is the amount
/// the service billed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub next_action: Option<Transition>,
}

/// Fulfillment screen ("Zubereitung"): every order, open ones on top.
pub struct PreparationView {
    service: SharedService,
    catalog: Catalog,
    orders: Vec<Order>,
    selected: Option<OrderId>,
}

impl PreparationView {
    pub fn new(service: SharedService) -> Self {
        PreparationView {
            service,
            catalog: Catalog::default(),
            orders: Vec::new(),
            selected: None,
        }
    }

    pub fn refresh_drinks(&mut self) {
        match self.service.drinks() {
            Ok(drinks) => self.catalog = Catalog::new(drinks),
            Err(e) => error!(error = %e, "failed to load drinks"),
        }
    }

    pub fn refresh_orders(&mut self) {
        match self.service.orders() {
            Ok(mut orders) => {
                lifecycle::sort_for_preparation(&mut orders);
                self.orders = orders;
            }
            Err(e) => error!(error = %e, "failed to load orders"),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All orders in display order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn open_orders(&self) -> Vec<&Order> {
        lifecycle::open_orders(&self.orders)
    }

    pub fn finished_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| !o.status.is_open()).collect()
    }

    /// Applies a staff action, then re-fetches so the list shows the result
    /// without waiting for the next tick.
    pub fn advance(&mut self, id: OrderId, transition: Transition) -> Result<()> {
        if let Some(order) = self.orders.iter().find(|o| o.id == id) {
            if let Err(e) = order.status.apply(transition) {
                warn!(order_id = id, reason = %e, "order action refused");
                return Err(e);
            }
        }

        let result = self.service.transition_order(id, transition);
        match &result {
            Ok(()) => {
                info!(order_id = id, %transition, "order advanced");
                self.selected = None;
            }
            Err(e) => error!(order_id = id, error = %e, "failed to update order"),
        }

        self.refresh_orders();
        result
    }

    pub fn complete(&mut self, id: OrderId) -> Result<()> {
        self.advance(id, Transition::Complete)
    }

    pub fn start_preparation(&mut self, id: OrderId) -> Result<()> {
        self.advance(id, Transition::StartPreparation)
    }

    pub fn mark_paid(&mut self, id: OrderId) -> Result<()> {
        self.advance(id, Transition::MarkPaid)
    }

    pub fn select(&mut self, id: OrderId) -> Result<()> {
        if !self.orders.iter().any(|o| o.id == id) {
            return Err(Error::NotFound { entity: "Order", id });
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn details(&self) -> Option<OrderDetails> {
        let id = self.selected?;
        let order = self.orders.iter().find(|o| o.id == id)?;

        Some(OrderDetails {
            order: order.clone(),
            lines: order_lines(order, &self.catalog),
            total: order.total_price,
            next_action: lifecycle::next_action(order.status),
        })
    }

    pub fn lines(&self, order: &Order) -> Vec<OrderLine> {
        order_lines(order, &self.catalog)
    }
}

impl LiveView for PreparationView {
    fn load(&mut self) {
        self.refresh_drinks();
        self.refresh_orders();
    }

    fn refresh(&mut self) {
        self.refresh_orders();
    }
}
