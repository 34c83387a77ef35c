use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::units::{Aisle, Unit};

/// Catalog-wide recipe identifier.
pub type RecipeId = u32;

/// Well-known recipe tag names used by filters and scoring.
pub mod tag {
    pub const PROTEIN: &str = "protein";
    pub const SWEET: &str = "sweet";
    pub const LOW_SUGAR: &str = "low-sugar";
    pub const HEARTY: &str = "hearty";
    pub const QUICK: &str = "quick";
}

/// Which meal slots a recipe can fill. `Main` covers both lunch and dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Main,
    Dessert,
}

/// One ingredient line of a recipe. Quantities are per serving; callers
/// scale by the number of people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity_per_serving: f64,
    pub unit: Unit,
    pub aisle: Aisle,
}

/// An immutable catalog recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: MealCategory,
    /// 1 = economy, 2 = standard, 3 = premium.
    pub budget_tier: u8,
    pub prep_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Immutable, shared recipe catalog with O(1) lookup by id.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<RecipeId, usize>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let by_id = recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| (recipe.id, index))
            .collect();
        RecipeCatalog { recipes, by_id }
    }

    /// Parse a catalog from its JSON array form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Ok(Self::new(recipes))
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.by_id.get(&id).map(|&index| &self.recipes[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
