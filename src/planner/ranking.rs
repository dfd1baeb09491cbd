use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, MealPlan, MealSlot, NutrientTotals, SlotMeals, UserProfile};
use crate::planner::calculations::{
    calculate_bmi, calorie_match_percent, calorie_range, daily_target, per_meal_target,
    within_calorie_window,
};
use crate::planner::constants::*;
use crate::planner::filters::{filter_by_preference, passes_disease_caps, slot_candidates};

/// Order candidates by calorie distance from the target (stable) and keep
/// the closest [`SHORTLIST_SIZE`].
pub fn shortlist<'a>(mut candidates: Vec<&'a FoodItem>, target: f64) -> Vec<&'a FoodItem> {
    candidates.sort_by(|a, b| {
        a.calorie_distance(target)
            .partial_cmp(&b.calorie_distance(target))
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(SHORTLIST_SIZE);
    candidates
}

/// Pick the foods for one meal.
///
/// Samples up to [`ITEMS_PER_MEAL`] distinct shortlisted foods, up to
/// [`SAMPLE_ATTEMPTS`] times, and returns the first sample whose calories land
/// within the window around `per_meal`. When no sample does, returns only the
/// single closest food. Empty input gives an empty meal.
pub fn select_meal_items<'a, R: Rng + ?Sized>(
    candidates: Vec<&'a FoodItem>,
    per_meal: f64,
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    let best = shortlist(candidates, per_meal);
    let Some(&closest) = best.first() else {
        return Vec::new();
    };

    let sample_size = ITEMS_PER_MEAL.min(best.len());
    for attempt in 0..SAMPLE_ATTEMPTS {
        let chosen: Vec<&FoodItem> = best.choose_multiple(rng, sample_size).copied().collect();
        let total: f64 = chosen.iter().map(|f| f.calories).sum();
        if within_calorie_window(total, per_meal) {
            debug!(attempt, total, "sample accepted");
            return chosen;
        }
    }

    warn!(food = %closest.food_name, "no sample within window, using closest item");
    vec![closest]
}

/// Build a daily plan for a profile from the catalog.
///
/// Foods chosen for one slot are never reused in a later slot.
pub fn recommend_meals<R: Rng + ?Sized>(
    catalog: &FoodCatalog,
    profile: &UserProfile,
    rng: &mut R,
) -> MealPlan {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let range = calorie_range(bmi, profile.activity_level);
    let target = daily_target(range);
    let per_meal = per_meal_target(target);
    let flags = profile.disease_flags();

    let foods: Vec<&FoodItem> = filter_by_preference(catalog.items(), profile.preference)
        .into_iter()
        .filter(|f| passes_disease_caps(f, flags))
        .collect();

    debug!(
        bmi,
        per_meal,
        eligible = foods.len(),
        diabetic = flags.diabetic,
        cardiac = flags.cardiac,
        "planning meals"
    );

    let mut used: HashSet<String> = HashSet::new();
    let mut meals = SlotMeals::default();

    for slot in MealSlot::ALL {
        let candidates = slot_candidates(&foods, slot, flags, &used);
        let candidate_count = candidates.len();
        let selected = select_meal_items(candidates, per_meal, rng);

        debug!(
            slot = slot.name(),
            candidates = candidate_count,
            selected = selected.len(),
            "slot planned"
        );

        for food in &selected {
            used.insert(food.food_name.clone());
        }
        meals.set(slot, selected.into_iter().cloned().collect());
    }

    let (totals, match_percent) = if meals.is_empty() {
        (NutrientTotals::default(), 0.0)
    } else {
        let totals: NutrientTotals = meals.all_items().collect();
        (totals, calorie_match_percent(totals.calories, target))
    };

    MealPlan {
        bmi,
        calorie_range: range,
        target_calories: target,
        per_meal_target: per_meal,
        totals,
        calorie_match_percent: match_percent,
        meals,
    }
}
