use crate::db::Database;
use crate::error::{Error, Result, ValidationError};
use crate::lifecycle::Transition;
use crate::models::{CreateOrder, Order, OrderId, OrderItem, OrderStatus};
use crate::stats::round_cents;
use rusqlite::Connection;
use tracing::{info, warn};

fn load_items(conn: &Connection, order_id: OrderId) -> rusqlite::Result<Vec<OrderItem>> {
    let mut item_stmt = conn.prepare(
        "SELECT drink_id, quantity, unit_price
         FROM order_items
         WHERE order_id = ?1
         ORDER BY id",
    )?;

    let items = item_stmt
        .query_map([order_id], |row| {
            Ok(OrderItem {
                drink_id: row.get(0)?,
                quantity: row.get(1)?,
                unit_price: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(items)
}

fn load_order(conn: &Connection, id: OrderId) -> Result<Order> {
    let order = conn
        .query_row(
            "SELECT id, customer_name, total_price, status, created_at FROM orders WHERE id = ?1",
            [id],
            |row| {
                Ok(Order {
                    id: row.get(0)?,
                    customer_name: row.get(1)?,
                    items: Vec::new(),
                    total_price: row.get(2)?,
                    status: row.get(3)?,
                    created_at: row.get(4)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound { entity: "Order", id },
            other => other.into(),
        })?;

    Ok(Order {
        items: load_items(conn, id)?,
        ..order
    })
}

pub fn create_order(db: &Database, order: &CreateOrder) -> Result<Order> {
    let customer_name = order.customer_name.trim();
    if customer_name.is_empty() {
        return Err(ValidationError::MissingCustomerName.into());
    }
    if order.items.is_empty() {
        return Err(ValidationError::EmptyCart.into());
    }
    if order.items.iter().any(|item| item.quantity == 0) {
        return Err(ValidationError::ZeroQuantity.into());
    }

    let conn = db.lock()?;

    // Resolve every drink first; one unknown id rejects the whole order
    let mut total = 0.0;
    let mut item_details: Vec<(i64, u32, f64)> = Vec::new();

    for item in &order.items {
        let price: f64 = conn
            .query_row("SELECT price FROM drinks WHERE id = ?1", [item.drink_id], |row| row.get(0))
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::NotFound {
                    entity: "Drink",
                    id: item.drink_id,
                },
                other => other.into(),
            })?;

        total += price * item.quantity as f64;
        item_details.push((item.drink_id, item.quantity, price));
    }

    let tx = conn.unchecked_transaction()?;
    let created_at = chrono::Local::now().naive_local();

    tx.execute(
        "INSERT INTO orders (customer_name, total_price, status, created_at) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![customer_name, round_cents(total), OrderStatus::Open, created_at],
    )?;

    let order_id = tx.last_insert_rowid();

    for (drink_id, qty, price) in &item_details {
        tx.execute(
            "INSERT INTO order_items (order_id, drink_id, quantity, unit_price) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![order_id, drink_id, qty, price],
        )?;
    }

    tx.commit()?;
    info!(order_id, customer = %customer_name, total = round_cents(total), "order created");

    load_order(&conn, order_id)
}

pub fn get_orders(db: &Database) -> Result<Vec<Order>> {
    let conn = db.lock()?;

    let mut stmt = conn.prepare(
        "SELECT id, customer_name, total_price, status, created_at
         FROM orders
         ORDER BY id ASC",
    )?;

    let orders: Vec<Order> = stmt
        .query_map([], |row| {
            Ok(Order {
                id: row.get(0)?,
                customer_name: row.get(1)?,
                items: Vec::new(),
                total_price: row.get(2)?,
                status: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut result = Vec::with_capacity(orders.len());

    for order in orders {
        let items = load_items(&conn, order.id)?;
        result.push(Order { items, ..order });
    }

    Ok(result)
}

/// Moves an order one step forward. Orders never go back.
pub fn transition_order(db: &Database, id: OrderId, transition: Transition) -> Result<Order> {
    let conn = db.lock()?;

    let status: OrderStatus = conn
        .query_row("SELECT status FROM orders WHERE id = ?1", [id], |row| row.get(0))
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound { entity: "Order", id },
            other => other.into(),
        })?;

    let next = status.apply(transition).inspect_err(|_| {
        warn!(order_id = id, %status, %transition, "rejected order transition");
    })?;

    conn.execute(
        "UPDATE orders SET status = ?1 WHERE id = ?2",
        rusqlite::params![next, id],
    )?;
    info!(order_id = id, from = %status, to = %next, "order status changed");

    load_order(&conn, id)
}
