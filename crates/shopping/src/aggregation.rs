//! Shopping-list aggregation: sum ingredient quantities across every meal
//! of a generated menu, scaled by party size, then price each line.

use std::collections::HashMap;

use meal_planning::Menu;
use recipe::{Aisle, Unit, format_quantity};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::pricing::PriceTable;

/// One aggregated shopping-list line, keyed by ingredient name.
///
/// The first occurrence of a name fixes its unit and aisle; same-named
/// ingredients are assumed to share both (a data-quality assumption on
/// the catalog, not enforced here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub total_quantity: f64,
    pub unit: Unit,
    pub aisle: Aisle,
    pub estimated_price: f64,
    pub checked: bool,
}

impl ShoppingListItem {
    /// Rounded, pluralized quantity for display and export.
    pub fn formatted_quantity(&self) -> String {
        format_quantity(self.total_quantity, self.unit)
    }
}

/// Items of one aisle in display order, with the aisle subtotal.
#[derive(Debug)]
pub struct AisleSection<'a> {
    pub aisle: Aisle,
    pub items: Vec<&'a ShoppingListItem>,
    pub total: f64,
}

/// A priced shopping list derived from one menu. Recomputed from scratch
/// whenever the menu changes; only the check-off state mutates in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    pub people: u32,
    pub days: usize,
    pub meal_count: usize,
    /// First-occurrence order over the menu's meals.
    pub items: Vec<ShoppingListItem>,
}

/// Summary statistics for the list header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSummary {
    pub people: u32,
    pub days: usize,
    pub meal_count: usize,
    pub item_count: usize,
    pub total_price: f64,
}

impl ShoppingList {
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.estimated_price).sum()
    }

    pub fn summary(&self) -> ShoppingSummary {
        ShoppingSummary {
            people: self.people,
            days: self.days,
            meal_count: self.meal_count,
            item_count: self.items.len(),
            total_price: self.total_price(),
        }
    }

    /// Group items by aisle in the fixed store-walk order, skipping
    /// aisles with no items.
    pub fn aisle_sections(&self) -> Vec<AisleSection<'_>> {
        Aisle::iter()
            .filter_map(|aisle| {
                let items: Vec<&ShoppingListItem> = self
                    .items
                    .iter()
                    .filter(|item| item.aisle == aisle)
                    .collect();
                if items.is_empty() {
                    return None;
                }
                let total = items.iter().map(|item| item.estimated_price).sum();
                Some(AisleSection {
                    aisle,
                    items,
                    total,
                })
            })
            .collect()
    }

    /// Flip the check-off state of the named item. Returns false when no
    /// such item exists.
    pub fn toggle(&mut self, ingredient_name: &str) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.name == ingredient_name)
        {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, ingredient_name: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.name == ingredient_name)
    }
}

/// Aggregate every ingredient occurrence across the menu into a priced
/// list. Quantities accumulate exactly; rounding happens only at display
/// time through the quantity formatter.
pub fn build_shopping_list(menu: &Menu, people: u32, prices: &PriceTable) -> ShoppingList {
    let mut items: Vec<ShoppingListItem> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for meal in menu.meals() {
        for ingredient in &meal.recipe.ingredients {
            let quantity = ingredient.quantity_per_serving * f64::from(people);
            match index_by_name.get(&ingredient.name) {
                Some(&index) => items[index].total_quantity += quantity,
                None => {
                    index_by_name.insert(ingredient.name.clone(), items.len());
                    items.push(ShoppingListItem {
                        name: ingredient.name.clone(),
                        total_quantity: quantity,
                        unit: ingredient.unit,
                        aisle: ingredient.aisle,
                        estimated_price: 0.0,
                        checked: false,
                    });
                }
            }
        }
    }

    for item in &mut items {
        item.estimated_price = prices.estimate(&item.name, item.total_quantity);
    }

    debug!(
        items = items.len(),
        meals = menu.meal_count(),
        "shopping list aggregated"
    );

    ShoppingList {
        people,
        days: menu.days.len(),
        meal_count: menu.meal_count(),
        items,
    }
}
