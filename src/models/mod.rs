pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, FoodPreference};
pub use plan::{MealPlan, MealSlot, NutrientTotals, SlotMeals};
pub use profile::{
    ActivityLevel, DietaryPreference, DiseaseFlags, ProfileRequest, REQUIRED_PROFILE_FIELDS,
    UserProfile,
};
