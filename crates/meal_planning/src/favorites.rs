//! Favorite slot planning: each favorite recipe gets at most one slot per
//! meal type within every non-overlapping 7-day window of the horizon.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use recipe::{MealCategory, Recipe, RecipeId};
use tracing::debug;

use crate::plan::{MealSlot, MealType};
use crate::preferences::Preferences;

/// Per-category availability-filtered pools for one generation call.
/// Pools for disabled categories stay empty.
#[derive(Debug, Default)]
pub struct CategoryPools<'a> {
    pub breakfast: Vec<&'a Recipe>,
    pub main: Vec<&'a Recipe>,
    pub dessert: Vec<&'a Recipe>,
}

impl<'a> CategoryPools<'a> {
    pub fn pool(&self, category: MealCategory) -> &[&'a Recipe] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Main => &self.main,
            MealCategory::Dessert => &self.dessert,
        }
    }

    fn find(&self, category: MealCategory, id: RecipeId) -> Option<&'a Recipe> {
        self.pool(category).iter().find(|r| r.id == id).copied()
    }
}

/// A favorite pre-assigned to a slot, consumed by the menu generator.
#[derive(Debug, Clone, Copy)]
pub struct PlannedFavoriteSlot<'a> {
    pub slot: MealSlot,
    pub recipe: &'a Recipe,
}

/// Plan favorite placements across the horizon.
///
/// Favorites that do not survive their category's availability filter, or
/// whose meal type is disabled, are skipped. Within each 7-day window the
/// days are shuffled and favorites are assigned greedily; a favorite that
/// finds no free slot in a window is silently dropped for that window.
/// "Free" is relative to this planner's own assignments, so the generator
/// never sees two favorites on the same slot.
pub fn plan_favorite_slots<'a, R: Rng + ?Sized>(
    pools: &CategoryPools<'a>,
    preferences: &Preferences,
    rng: &mut R,
) -> Vec<PlannedFavoriteSlot<'a>> {
    let mut breakfast_favorites = Vec::new();
    let mut main_favorites = Vec::new();
    let mut dessert_favorites = Vec::new();

    // Persisted favorite lists may carry duplicates; first occurrence wins.
    let mut seen: HashSet<RecipeId> = HashSet::new();
    for &id in &preferences.favorite_recipe_ids {
        if !seen.insert(id) {
            continue;
        }
        if preferences.include_breakfast {
            if let Some(recipe) = pools.find(MealCategory::Breakfast, id) {
                breakfast_favorites.push(recipe);
                continue;
            }
        }
        if preferences.include_lunch || preferences.include_dinner {
            if let Some(recipe) = pools.find(MealCategory::Main, id) {
                main_favorites.push(recipe);
                continue;
            }
        }
        if preferences.include_dessert {
            if let Some(recipe) = pools.find(MealCategory::Dessert, id) {
                dessert_favorites.push(recipe);
                continue;
            }
        }
        debug!(recipe_id = id, "favorite not placeable under current filters");
    }

    let days = preferences.days as usize;
    let mut slots: Vec<PlannedFavoriteSlot<'a>> = Vec::new();
    let mut occupied: HashSet<(usize, MealType)> = HashSet::new();

    let mut window_start = 0;
    while window_start < days {
        let window_end = (window_start + 7).min(days);
        let mut window_days: Vec<usize> = (window_start..window_end).collect();
        window_days.shuffle(rng);

        for &recipe in &breakfast_favorites {
            place_single(
                recipe,
                MealType::Breakfast,
                &window_days,
                &mut occupied,
                &mut slots,
            );
        }

        for &recipe in &main_favorites {
            let mut placed = false;
            for &day_index in &window_days {
                let can_lunch =
                    preferences.include_lunch && !occupied.contains(&(day_index, MealType::Lunch));
                let can_dinner = preferences.include_dinner
                    && !occupied.contains(&(day_index, MealType::Dinner));
                if !can_lunch && !can_dinner {
                    continue;
                }
                let meal_type = if can_lunch && can_dinner {
                    if rng.random_bool(0.5) {
                        MealType::Lunch
                    } else {
                        MealType::Dinner
                    }
                } else if can_lunch {
                    MealType::Lunch
                } else {
                    MealType::Dinner
                };
                occupied.insert((day_index, meal_type));
                slots.push(PlannedFavoriteSlot {
                    slot: MealSlot {
                        day_index,
                        meal_type,
                    },
                    recipe,
                });
                placed = true;
                break;
            }
            if !placed {
                debug!(recipe_id = recipe.id, window_start, "no free main slot for favorite");
            }
        }

        for &recipe in &dessert_favorites {
            place_single(
                recipe,
                MealType::Dessert,
                &window_days,
                &mut occupied,
                &mut slots,
            );
        }

        window_start = window_end;
    }

    slots
}

/// Assign a favorite to the first shuffled day whose slot of `meal_type`
/// is still free; drop it for this window if none remains.
fn place_single<'a>(
    recipe: &'a Recipe,
    meal_type: MealType,
    window_days: &[usize],
    occupied: &mut HashSet<(usize, MealType)>,
    slots: &mut Vec<PlannedFavoriteSlot<'a>>,
) {
    match window_days
        .iter()
        .find(|&&day| !occupied.contains(&(day, meal_type)))
    {
        Some(&day_index) => {
            occupied.insert((day_index, meal_type));
            slots.push(PlannedFavoriteSlot {
                slot: MealSlot {
                    day_index,
                    meal_type,
                },
                recipe,
            });
        }
        None => {
            debug!(recipe_id = recipe.id, %meal_type, "no free slot for favorite in this window");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn recipe(id: u32, category: MealCategory) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {id}"),
            category,
            budget_tier: 1,
            prep_minutes: 20,
            tags: vec![],
            ingredients: vec![],
            steps: vec![],
        }
    }

    fn pools(recipes: &[Recipe]) -> CategoryPools<'_> {
        let mut pools = CategoryPools::default();
        for recipe in recipes {
            match recipe.category {
                MealCategory::Breakfast => pools.breakfast.push(recipe),
                MealCategory::Main => pools.main.push(recipe),
                MealCategory::Dessert => pools.dessert.push(recipe),
            }
        }
        pools
    }

    #[test]
    fn no_favorites_means_no_slots() {
        let recipes = vec![recipe(1, MealCategory::Main)];
        let pools = pools(&recipes);
        let mut rng = StdRng::seed_from_u64(1);
        let slots = plan_favorite_slots(&pools, &Preferences::default(), &mut rng);
        assert!(slots.is_empty());
    }

    #[test]
    fn main_favorite_lands_once_per_week() {
        let recipes = vec![recipe(10, MealCategory::Main), recipe(11, MealCategory::Main)];
        let pools = pools(&recipes);
        let prefs = Preferences {
            days: 14,
            favorite_recipe_ids: vec![10],
            ..Preferences::default()
        };
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
            assert_eq!(slots.len(), 2);
            let first_week = slots.iter().filter(|s| s.slot.day_index < 7).count();
            assert_eq!(first_week, 1);
            for slot in &slots {
                assert!(matches!(
                    slot.slot.meal_type,
                    MealType::Lunch | MealType::Dinner
                ));
                assert_eq!(slot.recipe.id, 10);
            }
        }
    }

    #[test]
    fn main_favorite_respects_disabled_lunch() {
        let recipes = vec![recipe(10, MealCategory::Main)];
        let pools = pools(&recipes);
        let prefs = Preferences {
            include_lunch: false,
            favorite_recipe_ids: vec![10],
            ..Preferences::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot.meal_type, MealType::Dinner);
    }

    #[test]
    fn filtered_out_favorite_is_skipped() {
        // Favorite id 99 is not in any pool (filtered out or unknown).
        let recipes = vec![recipe(1, MealCategory::Breakfast)];
        let pools = pools(&recipes);
        let prefs = Preferences {
            favorite_recipe_ids: vec![99],
            ..Preferences::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
        assert!(slots.is_empty());
    }

    #[test]
    fn duplicate_favorite_ids_place_once() {
        let recipes = vec![recipe(5, MealCategory::Breakfast)];
        let pools = pools(&recipes);
        let prefs = Preferences {
            favorite_recipe_ids: vec![5, 5, 5],
            ..Preferences::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot.meal_type, MealType::Breakfast);
    }

    #[test]
    fn overflowing_favorites_are_dropped_in_window() {
        // Three breakfast favorites but only a two-day horizon.
        let recipes: Vec<Recipe> = (1..=3).map(|id| recipe(id, MealCategory::Breakfast)).collect();
        let pools = pools(&recipes);
        let prefs = Preferences {
            days: 2,
            favorite_recipe_ids: vec![1, 2, 3],
            ..Preferences::default()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
        assert_eq!(slots.len(), 2);
        let days: HashSet<usize> = slots.iter().map(|s| s.slot.day_index).collect();
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn dessert_favorite_takes_dessert_slot() {
        let recipes = vec![recipe(20, MealCategory::Dessert)];
        let pools = pools(&recipes);
        let prefs = Preferences {
            include_dessert: true,
            favorite_recipe_ids: vec![20],
            ..Preferences::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        let slots = plan_favorite_slots(&pools, &prefs, &mut rng);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot.meal_type, MealType::Dessert);
    }
}
