//! Price estimation from a per-unit price table.

use std::collections::HashMap;

use meal_planning::Menu;
use recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Flat estimate for ingredients missing from the price table.
pub const FALLBACK_ITEM_PRICE: f64 = 0.50;

/// One price-table entry: a base price for some reference quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub base_price: f64,
    pub quantity_per_unit: f64,
}

impl PriceEntry {
    pub fn unit_price(self) -> f64 {
        self.base_price / self.quantity_per_unit
    }
}

/// Immutable ingredient-name → price mapping, shared by all callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    pub fn new(entries: HashMap<String, PriceEntry>) -> Self {
        PriceTable { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, ingredient_name: &str) -> Option<PriceEntry> {
        self.entries.get(ingredient_name).copied()
    }

    /// Estimated cost of a quantity of one ingredient. Unknown
    /// ingredients get the flat fallback price regardless of quantity.
    pub fn estimate(&self, ingredient_name: &str, quantity: f64) -> f64 {
        match self.get(ingredient_name) {
            Some(entry) => quantity * entry.unit_price(),
            None => FALLBACK_ITEM_PRICE,
        }
    }

    /// Estimated cost of one recipe scaled to the party size, summed over
    /// its ingredients. Used for menu display, independent of the
    /// shopping-list aggregation.
    pub fn recipe_price(&self, recipe: &Recipe, people: u32) -> f64 {
        recipe
            .ingredients
            .iter()
            .map(|ing| self.estimate(&ing.name, ing.quantity_per_serving * f64::from(people)))
            .sum()
    }
}

/// Horizon-wide cost summary for a generated menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCostBreakdown {
    pub total: f64,
    pub per_person: f64,
    pub per_person_per_day: f64,
    pub per_day: f64,
    /// Estimated cost of each day's meals, indexed like `Menu::days`.
    pub day_totals: Vec<f64>,
}

/// Sum estimated recipe prices over every meal of the menu and break the
/// total down per person, per day, and into per-day totals.
pub fn menu_cost(menu: &Menu, people: u32, prices: &PriceTable) -> MenuCostBreakdown {
    let day_totals: Vec<f64> = menu
        .days
        .iter()
        .map(|day| {
            day.meals
                .iter()
                .map(|meal| prices.recipe_price(&meal.recipe, people))
                .sum()
        })
        .collect();
    let total: f64 = day_totals.iter().sum();
    let days = menu.days.len().max(1) as f64;
    let per_person = total / f64::from(people.max(1));
    MenuCostBreakdown {
        total,
        per_person,
        per_person_per_day: per_person / days,
        per_day: total / days,
        day_totals,
    }
}
