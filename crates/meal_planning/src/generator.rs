//! Menu generation: validate, filter, plan favorites, fill slots.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;
use recipe::{MealCategory, Recipe, RecipeCatalog, RecipeId};
use tracing::{debug, info};

use crate::error::MealPlanningError;
use crate::favorites::{CategoryPools, plan_favorite_slots};
use crate::filter::available_recipes;
use crate::plan::{DayPlan, Meal, MealSlot, MealType, Menu, weekday_label};
use crate::preferences::Preferences;
use crate::selector::pick_recipe;

/// Generate a fresh menu for the whole horizon.
///
/// Runs to completion synchronously; the only non-determinism comes from
/// the injected `rng`, so a seeded generator reproduces the same menu.
/// The returned menu fully replaces any previous one.
pub fn generate_menu<R: Rng + ?Sized>(
    catalog: &RecipeCatalog,
    preferences: &Preferences,
    rng: &mut R,
) -> Result<Menu, MealPlanningError> {
    if !preferences.any_meal_enabled() {
        return Err(MealPlanningError::NoMealTypeSelected);
    }

    let pools = build_pools(catalog, preferences)?;

    let favorite_slots = plan_favorite_slots(&pools, preferences, rng);
    let favorites_planned = favorite_slots.len();
    let by_slot: HashMap<MealSlot, &Recipe> = favorite_slots
        .iter()
        .map(|planned| (planned.slot, planned.recipe))
        .collect();

    // Lunch and dinner share one used-id set so the same main dish is not
    // repeated across meals before the pool is exhausted.
    let mut used_breakfast: HashSet<RecipeId> = HashSet::new();
    let mut used_main: HashSet<RecipeId> = HashSet::new();
    let mut used_dessert: HashSet<RecipeId> = HashSet::new();

    // Planned favorites count as used from the start, so the selector
    // cannot draw one for an earlier slot in its window.
    for planned in &favorite_slots {
        match planned.recipe.category {
            MealCategory::Breakfast => used_breakfast.insert(planned.recipe.id),
            MealCategory::Main => used_main.insert(planned.recipe.id),
            MealCategory::Dessert => used_dessert.insert(planned.recipe.id),
        };
    }

    let mut days = Vec::with_capacity(preferences.days as usize);
    for day_index in 0..preferences.days as usize {
        let mut meals = Vec::new();
        for meal_type in MealType::ALL {
            if !preferences.includes(meal_type) {
                continue;
            }
            let slot = MealSlot {
                day_index,
                meal_type,
            };
            let category = meal_type.category();
            let used = match category {
                MealCategory::Breakfast => &mut used_breakfast,
                MealCategory::Main => &mut used_main,
                MealCategory::Dessert => &mut used_dessert,
            };
            let recipe = match by_slot.get(&slot) {
                Some(&favorite) => {
                    debug!(day_index, %meal_type, recipe_id = favorite.id, "favorite slot");
                    favorite
                }
                None => pick_recipe(pools.pool(category), used, preferences, rng)
                    .ok_or(MealPlanningError::CategoryUnavailable(category))?,
            };
            used.insert(recipe.id);
            meals.push(Meal {
                slot,
                recipe: recipe.clone(),
            });
        }
        days.push(DayPlan {
            day_index,
            weekday: weekday_label(day_index).to_string(),
            meals,
        });
    }

    let menu = Menu { days };
    info!(
        days = preferences.days,
        meals = menu.meal_count(),
        favorites_planned,
        "menu generated"
    );
    Ok(menu)
}

/// Replace a single slot's recipe with a different one from the same
/// category's current pool.
///
/// Draws uniformly until a recipe other than the current one comes up;
/// with fewer than two candidates the menu is left untouched and
/// `NoAlternativeRecipe` is returned.
pub fn regenerate_meal<R: Rng + ?Sized>(
    menu: &mut Menu,
    catalog: &RecipeCatalog,
    preferences: &Preferences,
    day_index: usize,
    meal_type: MealType,
    rng: &mut R,
) -> Result<(), MealPlanningError> {
    let current_id = menu
        .get_meal(day_index, meal_type)
        .map(|meal| meal.recipe.id)
        .ok_or(MealPlanningError::SlotNotFound {
            day_index,
            meal_type,
        })?;

    let pool = available_recipes(catalog, meal_type.category(), preferences);
    if pool.len() <= 1 {
        return Err(MealPlanningError::NoAlternativeRecipe);
    }

    // Terminates: the pool holds at least two distinct recipe ids.
    let replacement = loop {
        if let Some(&candidate) = pool.choose(rng) {
            if candidate.id != current_id {
                break candidate;
            }
        }
    };

    if let Some(meal) = menu.get_meal_mut(day_index, meal_type) {
        debug!(
            day_index,
            %meal_type,
            old = current_id,
            new = replacement.id,
            "slot regenerated"
        );
        meal.recipe = replacement.clone();
    }
    Ok(())
}

/// Filter each enabled category; an enabled category with an empty pool
/// aborts generation.
fn build_pools<'a>(
    catalog: &'a RecipeCatalog,
    preferences: &Preferences,
) -> Result<CategoryPools<'a>, MealPlanningError> {
    let mut pools = CategoryPools::default();
    for category in [
        MealCategory::Breakfast,
        MealCategory::Main,
        MealCategory::Dessert,
    ] {
        if !preferences.category_enabled(category) {
            continue;
        }
        let pool = available_recipes(catalog, category, preferences);
        if pool.is_empty() {
            return Err(MealPlanningError::CategoryUnavailable(category));
        }
        match category {
            MealCategory::Breakfast => pools.breakfast = pool,
            MealCategory::Main => pools.main = pool,
            MealCategory::Dessert => pools.dessert = pool,
        }
    }
    Ok(pools)
}
