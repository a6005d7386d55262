use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, UNKNOWN_DRINK};
use crate::models::{DrinkId, DrinkStatistics, Order, OrderItem, Statistics};

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `part / whole * 100`, or `None` when there is nothing to divide by.
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

/// Price of one order line. The snapshot taken at order time wins over the
/// live catalog price; an unknown drink without a snapshot has no price.
pub fn line_total(item: &OrderItem, catalog: &Catalog) -> Option<f64> {
    item.unit_price
        .or_else(|| catalog.price_of(item.drink_id))
        .map(|price| price * item.quantity as f64)
}

pub fn order_total(items: &[OrderItem], catalog: &Catalog) -> f64 {
    items.iter().filter_map(|item| line_total(item, catalog)).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub drink_id: DrinkId,
    pub name: String,
    pub total_quantity: u64,
    pub total_revenue: f64,
    pub share: Option<f64>,
}

/// Admin statistics screen, derived from `GET /statistics`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dashboard {
    pub total_revenue: f64,
    pub total_quantity: u64,
    pub total_orders: u64,
    pub open_orders: u64,
    pub open_ratio: Option<f64>,
    pub rows: Vec<DashboardRow>,
}

impl Dashboard {
    pub fn from_statistics(stats: &Statistics) -> Self {
        let total_revenue = round_cents(stats.drinks.iter().map(|d| d.total_revenue).sum());
        let total_quantity = stats.drinks.iter().map(|d| d.total_quantity).sum();

        let rows = stats
            .drinks
            .iter()
            .map(|d| DashboardRow {
                drink_id: d.drink_id,
                name: d.name.clone(),
                total_quantity: d.total_quantity,
                total_revenue: d.total_revenue,
                share: percentage(d.total_quantity, total_quantity),
            })
            .collect();

        Dashboard {
            total_revenue,
            total_quantity,
            total_orders: stats.total_orders,
            open_orders: stats.open_orders,
            open_ratio: percentage(stats.open_orders, stats.total_orders),
            rows,
        }
    }
}

/// Per-drink totals over every order. Each catalog drink gets a row, sold or
/// not; drinks that have since left the catalog are appended at the end.
pub fn statistics_from_orders(orders: &[Order], catalog: &Catalog) -> Statistics {
    let mut sold: BTreeMap<DrinkId, (u64, f64)> = BTreeMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let entry = sold.entry(item.drink_id).or_insert((0, 0.0));
        entry.0 += item.quantity as u64;
        entry.1 += line_total(item, catalog).unwrap_or(0.0);
    }

    let mut drinks: Vec<DrinkStatistics> = catalog
        .drinks()
        .iter()
        .map(|drink| {
            let (total_quantity, total_revenue) = sold.remove(&drink.id).unwrap_or((0, 0.0));
            DrinkStatistics {
                drink_id: drink.id,
                name: drink.name.clone(),
                total_quantity,
                total_revenue: round_cents(total_revenue),
            }
        })
        .collect();

    drinks.extend(
        sold.into_iter()
            .map(|(drink_id, (total_quantity, total_revenue))| DrinkStatistics {
                drink_id,
                name: UNKNOWN_DRINK.to_string(),
                total_quantity,
                total_revenue: round_cents(total_revenue),
            }),
    );

    Statistics {
        drinks,
        total_orders: orders.len() as u64,
        open_orders: orders.iter().filter(|o| o.status.is_open()).count() as u64,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkTally {
    pub drink_id: DrinkId,
    pub name: String,
    pub quantity: u64,
    pub subtotal: f64,
}

/// How much of each drink the given orders still need, in catalog order, at
/// the prices the orders were taken at. Drinks nobody ordered are left out;
/// drinks gone from the catalog are appended at the end.
pub fn open_order_overview<'a, I>(orders: I, catalog: &Catalog) -> Vec<DrinkTally>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut owed: BTreeMap<DrinkId, (u64, f64)> = BTreeMap::new();
    for item in orders.into_iter().flat_map(|o| o.items.iter()) {
        let entry = owed.entry(item.drink_id).or_insert((0, 0.0));
        entry.0 += item.quantity as u64;
        entry.1 += line_total(item, catalog).unwrap_or(0.0);
    }

    let mut tallies: Vec<DrinkTally> = catalog
        .drinks()
        .iter()
        .filter_map(|drink| {
            let (quantity, subtotal) = owed.remove(&drink.id)?;
            Some(DrinkTally {
                drink_id: drink.id,
                name: drink.name.clone(),
                quantity,
                subtotal: round_cents(subtotal),
            })
        })
        .collect();

    tallies.extend(owed.into_iter().map(|(drink_id, (quantity, subtotal))| DrinkTally {
        drink_id,
        name: UNKNOWN_DRINK.to_string(),
        quantity,
        subtotal: round_cents(subtotal),
    }));

    tallies
}
