use std::collections::HashSet;

use recipe::{MealCategory, RecipeId};
use serde::{Deserialize, Serialize};

use crate::plan::MealType;

/// Breakfast style preference. `Protein` and `Sweet` narrow the breakfast
/// pool; `All` imposes no extra filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakfastStyle {
    #[default]
    All,
    Protein,
    Sweet,
}

/// Caller-owned generation settings, treated as a read-only snapshot per
/// call. Every field has a serde default so a partially persisted blob
/// still deserializes instead of aborting generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub people: u32,
    pub days: u32,
    pub include_breakfast: bool,
    pub include_lunch: bool,
    pub include_dinner: bool,
    pub include_dessert: bool,
    /// Maximum acceptable budget tier, 1..=3.
    pub budget_tier: u8,
    pub breakfast_style: BreakfastStyle,
    pub low_sugar: bool,
    pub hearty: bool,
    pub quick: bool,
    pub excluded_ingredients: HashSet<String>,
    /// Ordered; duplicates tolerated and deduplicated during planning.
    pub favorite_recipe_ids: Vec<RecipeId>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            people: 4,
            days: 7,
            include_breakfast: true,
            include_lunch: true,
            include_dinner: true,
            include_dessert: false,
            budget_tier: 2,
            breakfast_style: BreakfastStyle::All,
            low_sugar: false,
            hearty: false,
            quick: false,
            excluded_ingredients: HashSet::new(),
            favorite_recipe_ids: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn includes(&self, meal_type: MealType) -> bool {
        match meal_type {
            MealType::Breakfast => self.include_breakfast,
            MealType::Lunch => self.include_lunch,
            MealType::Dinner => self.include_dinner,
            MealType::Dessert => self.include_dessert,
        }
    }

    pub fn any_meal_enabled(&self) -> bool {
        MealType::ALL.iter().any(|&meal_type| self.includes(meal_type))
    }

    /// Whether any slot draws from the given recipe category.
    pub fn category_enabled(&self, category: MealCategory) -> bool {
        match category {
            MealCategory::Breakfast => self.include_breakfast,
            MealCategory::Main => self.include_lunch || self.include_dinner,
            MealCategory::Dessert => self.include_dessert,
        }
    }

    /// True when any soft preference shapes the selection bias.
    pub fn has_active_preferences(&self) -> bool {
        self.hearty || self.quick || self.low_sugar || self.breakfast_style != BreakfastStyle::All
    }
}
