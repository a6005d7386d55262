use std::collections::HashMap;

use crate::models::{Drink, DrinkId};

/// Shown wherever an order references a drink the catalog no longer has.
pub const UNKNOWN_DRINK: &str = "Unknown drink";

/// A view's local copy of the drink list, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    drinks: Vec<Drink>,
    index: HashMap<DrinkId, usize>,
}

impl Catalog {
    pub fn new(drinks: Vec<Drink>) -> Self {
        let index = drinks
            .iter()
            .enumerate()
            .map(|(pos, drink)| (drink.id, pos))
            .collect();
        Catalog { drinks, index }
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn get(&self, id: DrinkId) -> Option<&Drink> {
        self.index.get(&id).map(|&pos| &self.drinks[pos])
    }

    pub fn contains(&self, id: DrinkId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn price_of(&self, id: DrinkId) -> Option<f64> {
        self.get(id).map(|d| d.price)
    }

    pub fn name_of(&self, id: DrinkId) -> &str {
        self.get(id).map(|d| d.name.as_str()).unwrap_or(UNKNOWN_DRINK)
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

impl From<Vec<Drink>> for Catalog {
    fn from(drinks: Vec<Drink>) -> Self {
        Catalog::new(drinks)
    }
}
