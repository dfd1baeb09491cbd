pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod server;

pub use catalog::FoodCatalog;
pub use error::{NutriError, Result};
pub use models::{FoodItem, MealPlan, MealSlot, UserProfile};
pub use planner::recommend_meals;
