//! Soft preference scoring. Scores are relative ordering hints for the
//! weighted selector and are never surfaced to the caller.

use std::cmp::Reverse;

use recipe::{MealCategory, Recipe, tag};

use crate::preferences::{BreakfastStyle, Preferences};

/// Integer preference score, higher = more preferred.
pub fn preference_score(recipe: &Recipe, preferences: &Preferences) -> i32 {
    let mut score = 0;

    if preferences.hearty && recipe.has_tag(tag::HEARTY) {
        score += 2;
    }

    if (preferences.breakfast_style == BreakfastStyle::Protein || preferences.low_sugar)
        && recipe.has_tag(tag::PROTEIN)
    {
        score += 1;
    }

    if preferences.quick && recipe.has_tag(tag::QUICK) {
        score += 1;
    }

    // Mild dessert boost when the diner favors sweetness.
    if preferences.breakfast_style == BreakfastStyle::Sweet
        && recipe.category == MealCategory::Dessert
    {
        score += 1;
    }

    score
}

/// Sort a pool descending by score. The sort is stable, so ties keep the
/// pool's input order; tie-break randomness belongs to the selector.
pub fn sort_by_preference(pool: &mut [&Recipe], preferences: &Preferences) {
    pool.sort_by_key(|recipe| Reverse(preference_score(recipe, preferences)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, category: MealCategory, tags: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {id}"),
            category,
            budget_tier: 1,
            prep_minutes: 20,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn hearty_preference_scores_double() {
        let prefs = Preferences {
            hearty: true,
            quick: true,
            ..Preferences::default()
        };
        let hearty = recipe(1, MealCategory::Main, &[tag::HEARTY]);
        let quick = recipe(2, MealCategory::Main, &[tag::QUICK]);
        assert_eq!(preference_score(&hearty, &prefs), 2);
        assert_eq!(preference_score(&quick, &prefs), 1);
    }

    #[test]
    fn protein_bonus_applies_for_protein_style_or_low_sugar() {
        let protein = recipe(1, MealCategory::Breakfast, &[tag::PROTEIN]);
        let by_style = Preferences {
            breakfast_style: BreakfastStyle::Protein,
            ..Preferences::default()
        };
        let by_low_sugar = Preferences {
            low_sugar: true,
            ..Preferences::default()
        };
        assert_eq!(preference_score(&protein, &by_style), 1);
        assert_eq!(preference_score(&protein, &by_low_sugar), 1);
        assert_eq!(preference_score(&protein, &Preferences::default()), 0);
    }

    #[test]
    fn sweet_style_boosts_desserts() {
        let prefs = Preferences {
            breakfast_style: BreakfastStyle::Sweet,
            ..Preferences::default()
        };
        let dessert = recipe(1, MealCategory::Dessert, &[]);
        let main = recipe(2, MealCategory::Main, &[]);
        assert_eq!(preference_score(&dessert, &prefs), 1);
        assert_eq!(preference_score(&main, &prefs), 0);
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let prefs = Preferences {
            hearty: true,
            ..Preferences::default()
        };
        let plain_a = recipe(1, MealCategory::Main, &[]);
        let hearty = recipe(2, MealCategory::Main, &[tag::HEARTY]);
        let plain_b = recipe(3, MealCategory::Main, &[]);
        let mut pool = vec![&plain_a, &hearty, &plain_b];
        sort_by_preference(&mut pool, &prefs);
        let ids: Vec<u32> = pool.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
