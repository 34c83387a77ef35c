use recipe::MealCategory;
use thiserror::Error;

use crate::plan::MealType;

/// Recoverable failures surfaced to the caller. None of these is fatal:
/// the host shows a notice and keeps whatever menu it already had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealPlanningError {
    #[error("no meal type selected")]
    NoMealTypeSelected,

    #[error("no {0} recipe matches the current preferences")]
    CategoryUnavailable(MealCategory),

    #[error("no alternative recipe available for this slot")]
    NoAlternativeRecipe,

    #[error("no {meal_type} slot on day {day_index}")]
    SlotNotFound {
        day_index: usize,
        meal_type: MealType,
    },
}
