use crate::models::{ActivityLevel, MealSlot};
use crate::planner::constants::*;

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Body mass index from kilograms and centimetres, rounded to two decimals.
///
/// Returns 0.0 when either input is zero, negative or not finite.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Daily calorie band (low, high) for a BMI and activity level.
pub fn calorie_range(bmi: f64, activity: ActivityLevel) -> (f64, f64) {
    let base = base_calories(activity);
    let (low, high) = if bmi < BMI_UNDERWEIGHT {
        UNDERWEIGHT_OFFSETS
    } else if bmi < BMI_NORMAL {
        NORMAL_OFFSETS
    } else if bmi < BMI_OVERWEIGHT {
        OVERWEIGHT_OFFSETS
    } else {
        OBESE_OFFSETS
    };
    (base + low, base + high)
}

/// Daily target: midpoint of the calorie band.
pub fn daily_target((low, high): (f64, f64)) -> f64 {
    (low + high) / 2.0
}

/// Even split of the daily target across all meal slots.
pub fn per_meal_target(daily: f64) -> f64 {
    daily / MealSlot::ALL.len() as f64
}

/// Whether a combined calorie count lands within ±20% of the per-meal target.
pub fn within_calorie_window(calories: f64, per_meal: f64) -> bool {
    calories >= per_meal * CALORIE_WINDOW_LOW && calories <= per_meal * CALORIE_WINDOW_HIGH
}

/// Closeness of achieved calories to the daily target, in percent.
///
/// 100 means an exact hit. Overshooting by more than the target itself
/// floors at 0.
pub fn calorie_match_percent(achieved: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    ((1.0 - (achieved - target).abs() / target) * 100.0).max(0.0)
}
