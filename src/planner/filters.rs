use std::collections::HashSet;

use crate::models::{DietaryPreference, DiseaseFlags, FoodItem, FoodPreference, MealSlot};
use crate::planner::constants::*;

/// Keep only foods compatible with the dietary preference.
///
/// `Both` applies no filter.
pub fn filter_by_preference<'a>(
    foods: impl IntoIterator<Item = &'a FoodItem>,
    preference: DietaryPreference,
) -> Vec<&'a FoodItem> {
    foods
        .into_iter()
        .filter(|f| match preference {
            DietaryPreference::Vegetarian => f.preference == FoodPreference::Vegetarian,
            DietaryPreference::NonVegetarian => f.preference == FoodPreference::NonVegetarian,
            DietaryPreference::Both => true,
        })
        .collect()
}

/// Catalog-wide caps for the profile's conditions.
pub fn passes_disease_caps(food: &FoodItem, flags: DiseaseFlags) -> bool {
    if flags.diabetic && (food.sugar > DIABETIC_MAX_SUGAR || food.calories > DIABETIC_MAX_CALORIES)
    {
        return false;
    }
    if flags.cardiac && (food.sodium > CARDIAC_MAX_SODIUM || food.fat > CARDIAC_MAX_FAT) {
        return false;
    }
    true
}

/// Tighter per-meal caps for the profile's conditions.
pub fn passes_meal_disease_caps(food: &FoodItem, slot: MealSlot, flags: DiseaseFlags) -> bool {
    if flags.diabetic {
        let max_sugar = if slot == MealSlot::Snack {
            DIABETIC_SNACK_MAX_SUGAR
        } else {
            DIABETIC_MEAL_MAX_SUGAR
        };
        if food.sugar > max_sugar || food.fiber < DIABETIC_MIN_FIBER {
            return false;
        }
    }
    if flags.cardiac && (food.fat > CARDIAC_MEAL_MAX_FAT || food.sodium > CARDIAC_MEAL_MAX_SODIUM) {
        return false;
    }
    true
}

/// Minimum protein and fat for a food to count as a meal component.
pub fn meets_macro_floor(food: &FoodItem) -> bool {
    food.protein >= MIN_PROTEIN && food.fat >= MIN_FAT
}

/// Foods eligible for a slot: tagged for it, no desserts in main meals,
/// within per-meal caps, above the macro floor, and not used elsewhere.
pub fn slot_candidates<'a>(
    foods: &[&'a FoodItem],
    slot: MealSlot,
    flags: DiseaseFlags,
    used: &HashSet<String>,
) -> Vec<&'a FoodItem> {
    foods
        .iter()
        .copied()
        .filter(|f| f.serves(slot))
        .filter(|f| !(slot.is_main_meal() && f.is_dessert))
        .filter(|f| passes_meal_disease_caps(f, slot, flags))
        .filter(|f| meets_macro_floor(f))
        .filter(|f| !used.contains(&f.food_name))
        .collect()
}
