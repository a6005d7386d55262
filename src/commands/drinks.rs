use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{CreateDrink, Drink, DrinkId};
use tracing::info;

fn drink_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Drink> {
    Ok(Drink {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        description: row.get(3)?,
    })
}

pub fn get_drinks(db: &Database) -> Result<Vec<Drink>> {
    let conn = db.lock()?;

    let mut stmt = conn.prepare("SELECT id, name, price, description FROM drinks ORDER BY id")?;

    let drinks = stmt
        .query_map([], drink_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(drinks)
}

pub fn create_drink(db: &Database, drink: &CreateDrink) -> Result<Drink> {
    drink.validate()?;
    let conn = db.lock()?;

    conn.execute(
        "INSERT INTO drinks (name, price, description) VALUES (?1, ?2, ?3)",
        rusqlite::params![drink.name.trim(), drink.price, drink.description],
    )?;

    let id = conn.last_insert_rowid();
    info!(drink_id = id, name = %drink.name.trim(), "drink created");

    let drink = conn.query_row(
        "SELECT id, name, price, description FROM drinks WHERE id = ?1",
        [id],
        drink_from_row,
    )?;

    Ok(drink)
}

pub fn update_drink(db: &Database, id: DrinkId, drink: &CreateDrink) -> Result<Drink> {
    drink.validate()?;
    let conn = db.lock()?;

    conn.execute(
        "UPDATE drinks SET name = ?1, price = ?2, description = ?3 WHERE id = ?4",
        rusqlite::params![drink.name.trim(), drink.price, drink.description, id],
    )?;

    if conn.changes() == 0 {
        return Err(Error::NotFound { entity: "Drink", id });
    }
    info!(drink_id = id, price = drink.price, "drink updated");

    let drink = conn.query_row(
        "SELECT id, name, price, description FROM drinks WHERE id = ?1",
        [id],
        drink_from_row,
    )?;

    Ok(drink)
}

/// Removes a drink from the catalog. Orders that reference it keep their items.
pub fn delete_drink(db: &Database, id: DrinkId) -> Result<()> {
    let conn = db.lock()?;

    conn.execute("DELETE FROM drinks WHERE id = ?1", [id])?;

    if conn.changes() == 0 {
        return Err(Error::NotFound { entity: "Drink", id });
    }
    info!(drink_id = id, "drink deleted");

    Ok(())
}
