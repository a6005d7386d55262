use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::models::{CreateOrder, CreateOrderItem, DrinkId};

/// The cashier's current selection, drink id to quantity. Lines never hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<DrinkId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn increment(&mut self, drink_id: DrinkId) {
        *self.lines.entry(drink_id).or_insert(0) += 1;
    }

    /// Takes one unit off a line, dropping the line once it reaches zero.
    pub fn decrement(&mut self, drink_id: DrinkId) {
        let remaining = self.quantity(drink_id).saturating_sub(1);
        self.set_quantity(drink_id, remaining);
    }

    pub fn set_quantity(&mut self, drink_id: DrinkId, quantity: u32) {
        if quantity == 0 {
            self.lines.remove(&drink_id);
        } else {
            self.lines.insert(drink_id, quantity);
        }
    }

    pub fn quantity(&self, drink_id: DrinkId) -> u32 {
        self.lines.get(&drink_id).copied().unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = (DrinkId, u32)> + '_ {
        self.lines.iter().map(|(&id, &qty)| (id, qty))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum at the current catalog prices. Drinks missing from the catalog add nothing.
    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.lines()
            .filter_map(|(id, qty)| catalog.price_of(id).map(|price| price * qty as f64))
            .sum()
    }

    /// Builds the submission payload, or says why it cannot be sent.
    pub fn to_order(&self, customer_name: &str, catalog: &Catalog) -> Result<CreateOrder, ValidationError> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }

        let items: Vec<CreateOrderItem> = self
            .lines()
            .filter(|(id, _)| catalog.contains(*id))
            .map(|(drink_id, quantity)| CreateOrderItem { drink_id, quantity })
            .collect();

        if items.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        Ok(CreateOrder {
            customer_name: customer_name.to_string(),
            items,
        })
    }
}
