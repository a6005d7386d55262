use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::Error;
use crate::models::OrderStatus;

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.conn.lock().map_err(|_| Error::Poisoned)
    }

    pub fn initialize(&self) -> Result<(), Error> {
        let conn = self.lock()?;

        conn.execute_batch(
            "
            -- Drink catalog
            CREATE TABLE IF NOT EXISTS drinks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            );

            -- Orders
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name TEXT NOT NULL,
                total_price REAL NOT NULL,
                status TEXT NOT NULL DEFAULT 'open',
                created_at DATETIME NOT NULL
            );

            -- Order items; drink_id has no foreign key, deleting a drink
            -- leaves past orders untouched
            CREATE TABLE IF NOT EXISTS order_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_id INTEGER NOT NULL,
                drink_id INTEGER NOT NULL,
                quantity INTEGER NOT NULL,
                FOREIGN KEY (order_id) REFERENCES orders(id)
            );

            -- Cashier display toggles, single row
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                show_order_count INTEGER NOT NULL DEFAULT 1,
                show_last_order INTEGER NOT NULL DEFAULT 1,
                show_order_list INTEGER NOT NULL DEFAULT 1
            );
            INSERT OR IGNORE INTO settings (id) VALUES (1);
            ",
        )?;

        // Run migrations for existing databases (pass connection to avoid deadlock)
        Self::migrate_conn(&conn)?;

        Ok(())
    }

    fn migrate_conn(conn: &Connection) -> Result<()> {
        // Price snapshots arrived after the first deployments
        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(order_items)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !columns.contains(&"unit_price".to_string()) {
            conn.execute("ALTER TABLE order_items ADD COLUMN unit_price REAL", [])?;
        }

        Ok(())
    }
}

impl ToSql for OrderStatus {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for OrderStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        OrderStatus::parse(text).ok_or_else(|| FromSqlError::Other(format!("unknown order status {text:?}").into()))
    }
}
