pub mod calculations;
pub mod constants;
pub mod filters;
pub mod ranking;

pub use calculations::{
    calculate_bmi, calorie_match_percent, calorie_range, daily_target, per_meal_target,
    within_calorie_window,
};
pub use constants::*;
pub use filters::{
    filter_by_preference, meets_macro_floor, passes_disease_caps, passes_meal_disease_caps,
    slot_candidates,
};
pub use ranking::{recommend_meals, select_meal_items, shortlist};
