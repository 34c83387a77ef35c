//! Availability filtering: narrows the catalog to the recipes usable for
//! one category under the current preferences.

use recipe::{MealCategory, Recipe, RecipeCatalog, tag};

use crate::preferences::{BreakfastStyle, Preferences};

/// Order-preserving filter over the catalog for one category.
///
/// An empty result is a valid outcome, not an error; callers decide
/// whether an empty pool is fatal for an enabled category.
pub fn available_recipes<'a>(
    catalog: &'a RecipeCatalog,
    category: MealCategory,
    preferences: &Preferences,
) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| is_available(recipe, category, preferences))
        .collect()
}

fn is_available(recipe: &Recipe, category: MealCategory, preferences: &Preferences) -> bool {
    if recipe.category != category {
        return false;
    }

    if recipe.budget_tier > preferences.budget_tier {
        return false;
    }

    if recipe
        .ingredients
        .iter()
        .any(|ingredient| preferences.excluded_ingredients.contains(&ingredient.name))
    {
        return false;
    }

    if category == MealCategory::Breakfast {
        match preferences.breakfast_style {
            BreakfastStyle::Protein => {
                if !recipe.has_tag(tag::PROTEIN) && !recipe.has_tag(tag::LOW_SUGAR) {
                    return false;
                }
            }
            BreakfastStyle::Sweet => {
                if !recipe.has_tag(tag::SWEET) {
                    return false;
                }
            }
            BreakfastStyle::All => {}
        }
    }

    // Desserts are exempt from the low-sugar and quick filters: sweetness
    // and a longer bake are expected there.
    if category != MealCategory::Dessert {
        if preferences.low_sugar && recipe.has_tag(tag::SWEET) {
            return false;
        }
        if preferences.quick && recipe.prep_minutes > 20 {
            return false;
        }
    }

    true
}
