//! Weighted random selection from a filtered pool.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use recipe::{Recipe, RecipeId};

use crate::preferences::Preferences;
use crate::scorer::sort_by_preference;

/// Probability of drawing from the top-scored recipes when soft
/// preferences are active.
const TOP_BIAS_PROBABILITY: f64 = 0.6;

/// Pool size above which the top-scored bias kicks in.
const TOP_BIAS_POOL: usize = 3;

/// Pick one recipe from the pool, avoiding `used_ids` until the pool is
/// exhausted. Once every recipe in the pool has been used, repeats are
/// allowed and the draw runs over the full pool again.
///
/// With active preferences and more than three candidates, the draw is
/// biased: 60% of the time it lands uniformly in the top three by score,
/// otherwise uniformly over the whole pool. Biasing without always taking
/// the best avoids monotone repetition while still honoring preferences.
///
/// Returns `None` only for an empty pool; callers pre-check enabled
/// categories before slot filling.
pub fn pick_recipe<'a, R: Rng + ?Sized>(
    pool: &[&'a Recipe],
    used_ids: &HashSet<RecipeId>,
    preferences: &Preferences,
    rng: &mut R,
) -> Option<&'a Recipe> {
    let mut available: Vec<&Recipe> = pool
        .iter()
        .filter(|recipe| !used_ids.contains(&recipe.id))
        .copied()
        .collect();
    if available.is_empty() {
        // Exhaustion: every recipe was used at least once, repeats allowed.
        available = pool.to_vec();
    }

    sort_by_preference(&mut available, preferences);

    if preferences.has_active_preferences()
        && available.len() > TOP_BIAS_POOL
        && rng.random_bool(TOP_BIAS_PROBABILITY)
    {
        return available[..TOP_BIAS_POOL].choose(rng).copied();
    }

    available.choose(rng).copied()
}
