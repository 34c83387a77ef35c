pub mod catalog;
pub mod quantity;
pub mod units;

pub use catalog::{Ingredient, MealCategory, Recipe, RecipeCatalog, RecipeId, tag};
pub use quantity::{format_quantity, round_quantity};
pub use units::{Aisle, Unit};
