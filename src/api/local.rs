use std::path::Path;

use super::DrinkService;
use crate::commands::{admin, drinks, orders, settings, statistics};
use crate::db::Database;
use crate::error::Result;
use crate::lifecycle::Transition;
use crate::models::{CreateDrink, CreateOrder, Drink, DrinkId, Order, OrderId, Settings, Statistics};

/// Serves the REST contract from an embedded database, without a network hop.
pub struct LocalService {
    db: Database,
    admin_password: String,
}

impl LocalService {
    pub fn open(path: impl AsRef<Path>, admin_password: impl Into<String>) -> Result<Self> {
        Self::with_database(Database::open(path)?, admin_password)
    }

    pub fn in_memory(admin_password: impl Into<String>) -> Result<Self> {
        Self::with_database(Database::open_in_memory()?, admin_password)
    }

    pub fn with_database(db: Database, admin_password: impl Into<String>) -> Result<Self> {
        db.initialize()?;

        Ok(LocalService {
            db,
            admin_password: admin_password.into(),
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl DrinkService for LocalService {
    fn verify_admin(&self, password: &str) -> Result<bool> {
        Ok(admin::verify_admin(&self.admin_password, password))
    }

    fn drinks(&self) -> Result<Vec<Drink>> {
        drinks::get_drinks(&self.db)
    }

    fn create_drink(&self, drink: &CreateDrink) -> Result<Drink> {
        drinks::create_drink(&self.db, drink)
    }

    fn update_drink(&self, id: DrinkId, drink: &CreateDrink) -> Result<Drink> {
        drinks::update_drink(&self.db, id, drink)
    }

    fn delete_drink(&self, id: DrinkId) -> Result<()> {
        drinks::delete_drink(&self.db, id)
    }

    fn statistics(&self) -> Result<Statistics> {
        statistics::get_statistics(&self.db)
    }

    fn reset_statistics(&self) -> Result<()> {
        statistics::reset_statistics(&self.db)
    }

    fn orders(&self) -> Result<Vec<Order>> {
        orders::get_orders(&self.db)
    }

    fn create_order(&self, order: &CreateOrder) -> Result<Order> {
        orders::create_order(&self.db, order)
    }

    fn transition_order(&self, id: OrderId, transition: Transition) -> Result<()> {
        orders::transition_order(&self.db, id, transition)?;
        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        settings::get_settings(&self.db)
    }

    fn update_settings(&self, new_settings: &Settings) -> Result<Settings> {
        settings::update_settings(&self.db, new_settings)
    }
}
