use serde::{Deserialize, Serialize};

/// A single purchasable menu entry with its price and nutrition facts.
///
/// Items have no identity beyond their field values and are never mutated
/// once the menu is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    /// Price in whole currency units (rupees for the built-in menu).
    pub price: i64,

    /// Energy in kcal.
    pub calories: u32,

    /// Grams.
    pub carbs: u32,

    /// Grams.
    pub protein: u32,

    /// Grams.
    pub fat: u32,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: i64,
        calories: u32,
        carbs: u32,
        protein: u32,
        fat: u32,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            calories,
            carbs,
            protein,
            fat,
        }
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
