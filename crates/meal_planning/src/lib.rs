pub mod error;
pub mod favorites;
pub mod filter;
pub mod generator;
pub mod plan;
pub mod preferences;
pub mod scorer;
pub mod selector;

pub use error::MealPlanningError;
pub use favorites::{CategoryPools, PlannedFavoriteSlot, plan_favorite_slots};
pub use filter::available_recipes;
pub use generator::{generate_menu, regenerate_meal};
pub use plan::{DayPlan, Meal, MealSlot, MealType, Menu, weekday_label};
pub use preferences::{BreakfastStyle, Preferences};
pub use scorer::{preference_score, sort_by_preference};
pub use selector::pick_recipe;
