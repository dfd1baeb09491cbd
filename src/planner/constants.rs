use crate::models::ActivityLevel;

/// Base daily calories per activity level, before the BMI shift.
pub const BASE_CALORIES_LOW: f64 = 1800.0;
pub const BASE_CALORIES_MODERATE: f64 = 2200.0;
pub const BASE_CALORIES_HIGH: f64 = 2600.0;

/// BMI band upper bounds (exclusive).
pub const BMI_UNDERWEIGHT: f64 = 18.5;
pub const BMI_NORMAL: f64 = 25.0;
pub const BMI_OVERWEIGHT: f64 = 30.0;

/// Calorie range offsets (low, high) per BMI band.
pub const UNDERWEIGHT_OFFSETS: (f64, f64) = (200.0, 400.0);
pub const NORMAL_OFFSETS: (f64, f64) = (-100.0, 100.0);
pub const OVERWEIGHT_OFFSETS: (f64, f64) = (-300.0, -100.0);
pub const OBESE_OFFSETS: (f64, f64) = (-500.0, -200.0);

// ─────────────────────────────────────────────────────────────────────────────
// Disease caps
// ─────────────────────────────────────────────────────────────────────────────

/// Catalog-wide caps for diabetic profiles.
pub const DIABETIC_MAX_SUGAR: f64 = 15.0;
pub const DIABETIC_MAX_CALORIES: f64 = 650.0;

/// Per-meal caps for diabetic profiles.
pub const DIABETIC_MEAL_MAX_SUGAR: f64 = 12.0;
pub const DIABETIC_SNACK_MAX_SUGAR: f64 = 10.0;
pub const DIABETIC_MIN_FIBER: f64 = 1.5;

/// Catalog-wide caps for cardiac (heart / hypertension) profiles.
pub const CARDIAC_MAX_SODIUM: f64 = 500.0;
pub const CARDIAC_MAX_FAT: f64 = 20.0;

/// Per-meal caps for cardiac profiles.
pub const CARDIAC_MEAL_MAX_FAT: f64 = 15.0;
pub const CARDIAC_MEAL_MAX_SODIUM: f64 = 400.0;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Macro floor every selected item must meet.
pub const MIN_PROTEIN: f64 = 8.0;
pub const MIN_FAT: f64 = 3.0;

/// Candidates kept after ranking by calorie distance.
pub const SHORTLIST_SIZE: usize = 20;

/// Items drawn per sample.
pub const ITEMS_PER_MEAL: usize = 2;

/// Sampling attempts before falling back to the closest item.
pub const SAMPLE_ATTEMPTS: usize = 500;

/// Accepted window around the per-meal target (±20%).
pub const CALORIE_WINDOW_LOW: f64 = 0.8;
pub const CALORIE_WINDOW_HIGH: f64 = 1.2;

/// Base daily calories for an activity level.
pub fn base_calories(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Low => BASE_CALORIES_LOW,
        ActivityLevel::Moderate => BASE_CALORIES_MODERATE,
        ActivityLevel::High => BASE_CALORIES_HIGH,
    }
}
