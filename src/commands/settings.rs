use crate::db::Database;
use crate::error::Result;
use crate::models::Settings;
use tracing::info;

pub fn get_settings(db: &Database) -> Result<Settings> {
    let conn = db.lock()?;

    let settings = conn.query_row(
        "SELECT show_order_count, show_last_order, show_order_list FROM settings WHERE id = 1",
        [],
        |row| {
            Ok(Settings {
                show_order_count: row.get(0)?,
                show_last_order: row.get(1)?,
                show_order_list: row.get(2)?,
            })
        },
    )?;

    Ok(settings)
}

pub fn update_settings(db: &Database, settings: &Settings) -> Result<Settings> {
    let conn = db.lock()?;

    conn.execute(
        "UPDATE settings SET show_order_count = ?1, show_last_order = ?2, show_order_list = ?3 WHERE id = 1",
        rusqlite::params![
            settings.show_order_count,
            settings.show_last_order,
            settings.show_order_list
        ],
    )?;
    info!(?settings, "settings updated");

    Ok(*settings)
}
