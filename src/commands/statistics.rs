use crate::catalog::Catalog;
use crate::commands::{drinks, orders};
use crate::db::Database;
use crate::error::Result;
use crate::models::Statistics;
use crate::stats::statistics_from_orders;
use tracing::info;

pub fn get_statistics(db: &Database) -> Result<Statistics> {
    let catalog = Catalog::new(drinks::get_drinks(db)?);
    let orders = orders::get_orders(db)?;

    Ok(statistics_from_orders(&orders, &catalog))
}

/// Wipes every order and restarts order numbering. The catalog is kept.
pub fn reset_statistics(db: &Database) -> Result<()> {
    let conn = db.lock()?;

    let removed: i64 = conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))?;

    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM order_items", [])?;
    tx.execute("DELETE FROM orders", [])?;
    tx.execute(
        "DELETE FROM sqlite_sequence WHERE name IN ('orders', 'order_items')",
        [],
    )?;
    tx.commit()?;

    info!(removed, "statistics and orders reset");

    Ok(())
}
