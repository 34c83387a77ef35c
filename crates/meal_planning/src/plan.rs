use recipe::{MealCategory, Recipe};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Weekday labels, cycling from day index 0.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday label for a zero-based day index; horizons longer than a week
/// cycle through the same labels.
pub fn weekday_label(day_index: usize) -> &'static str {
    WEEKDAYS[day_index % 7]
}

/// The four meal slots a day can have, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MealType {
    /// Fixed fill order within a day.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Dessert,
    ];

    /// Recipe category that can fill this slot. Lunch and dinner share
    /// the main-dish pool.
    pub fn category(self) -> MealCategory {
        match self {
            MealType::Breakfast => MealCategory::Breakfast,
            MealType::Lunch | MealType::Dinner => MealCategory::Main,
            MealType::Dessert => MealCategory::Dessert,
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Dessert => "Dessert",
        }
    }
}

/// One (day, meal-type) position. Identity of a slot in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealSlot {
    pub day_index: usize,
    pub meal_type: MealType,
}

/// A filled slot in the generated menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub recipe: Recipe,
}

/// All meals planned for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_index: usize,
    pub weekday: String,
    pub meals: Vec<Meal>,
}

impl DayPlan {
    /// One-based week number this day falls in.
    pub fn week(&self) -> usize {
        self.day_index / 7 + 1
    }
}

/// A generated plan covering the whole horizon. Produced fresh by each
/// generation call; single-slot regeneration is the only in-place edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    pub days: Vec<DayPlan>,
}

impl Menu {
    /// Every meal of every day, in day-then-slot order.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|day| day.meals.iter())
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|day| day.meals.len()).sum()
    }

    pub fn get_meal(&self, day_index: usize, meal_type: MealType) -> Option<&Meal> {
        self.days
            .get(day_index)?
            .meals
            .iter()
            .find(|meal| meal.slot.meal_type == meal_type)
    }

    pub(crate) fn get_meal_mut(
        &mut self,
        day_index: usize,
        meal_type: MealType,
    ) -> Option<&mut Meal> {
        self.days
            .get_mut(day_index)?
            .meals
            .iter_mut()
            .find(|meal| meal.slot.meal_type == meal_type)
    }
}
