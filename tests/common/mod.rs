#![allow(dead_code)]

use std::path::PathBuf;

use nutrigraph_rs::catalog::FoodCatalog;
use nutrigraph_rs::config::Config;
use nutrigraph_rs::models::{
    ActivityLevel, DietaryPreference, FoodItem, FoodPreference, UserProfile,
};

#[allow(clippy::too_many_arguments)]
pub fn make_food(
    name: &str,
    preference: FoodPreference,
    meal_time: &str,
    is_dessert: bool,
    calories: f64,
    protein: f64,
    fat: f64,
    sugar: f64,
    fiber: f64,
    sodium: f64,
) -> FoodItem {
    FoodItem {
        food_name: name.to_string(),
        preference,
        meal_time: meal_time.to_string(),
        is_dessert,
        calories,
        carbs: 30.0,
        protein,
        fat,
        sugar,
        fiber,
        sodium,
    }
}

#[rustfmt::skip]
pub fn fixture_foods() -> Vec<FoodItem> {
    use FoodPreference::{NonVegetarian as NonVeg, Unspecified, Vegetarian as Veg};

    vec![
        make_food("Moong Dal Chilla", Veg, "Breakfast", false, 280.0, 14.0, 6.0, 3.0, 4.0, 320.0),
        make_food("Paneer Paratha", Veg, "Breakfast", false, 330.0, 13.0, 12.0, 4.0, 3.0, 450.0),
        make_food("Vegetable Upma", Veg, "Breakfast", false, 260.0, 8.0, 7.0, 5.0, 3.0, 380.0),
        make_food("Sprouts Poha", Veg, "Breakfast, Snack", false, 240.0, 9.0, 5.0, 4.0, 4.0, 250.0),
        make_food("Greek Yogurt Parfait", Veg, "Breakfast, Snack", false, 220.0, 12.0, 4.0, 14.0, 2.0, 90.0),
        make_food("Rajma Chawal", Veg, "Lunch, Dinner", false, 320.0, 13.0, 5.0, 3.0, 8.0, 390.0),
        make_food("Palak Paneer", Veg, "Lunch, Dinner", false, 300.0, 15.0, 18.0, 5.0, 4.0, 520.0),
        make_food("Chole", Veg, "Lunch, Dinner", false, 290.0, 12.0, 9.0, 6.0, 9.0, 480.0),
        make_food("Dal Tadka", Veg, "Lunch, Dinner", false, 250.0, 11.0, 7.0, 3.0, 6.0, 350.0),
        make_food("Vegetable Khichdi", Veg, "Lunch, Dinner", false, 270.0, 9.0, 6.0, 2.0, 5.0, 300.0),
        make_food("Tofu Stir Fry", Veg, "Dinner", false, 230.0, 16.0, 11.0, 4.0, 3.0, 360.0),
        make_food("Roasted Chana", Veg, "Snack", false, 210.0, 10.0, 4.0, 2.0, 7.0, 150.0),
        make_food("Peanut Chaat", Veg, "Snack", false, 260.0, 11.0, 16.0, 5.0, 4.0, 280.0),
        make_food("Besan Ladoo", Veg, "Snack", true, 300.0, 8.0, 14.0, 20.0, 2.0, 40.0),
        make_food("Gulab Jamun", Veg, "Lunch, Dinner, Snack", true, 320.0, 8.0, 10.0, 30.0, 1.0, 60.0),
        make_food("Egg Bhurji", NonVeg, "Breakfast", false, 280.0, 18.0, 19.0, 2.0, 1.0, 420.0),
        make_food("Boiled Egg Plate", NonVeg, "Breakfast, Snack", false, 200.0, 13.0, 10.0, 1.0, 0.0, 180.0),
        make_food("Chicken Tikka", NonVeg, "Lunch, Dinner, Snack", false, 310.0, 30.0, 14.0, 3.0, 1.0, 560.0),
        make_food("Fish Curry", NonVeg, "Lunch, Dinner", false, 300.0, 26.0, 12.0, 3.0, 2.0, 380.0),
        make_food("Grilled Chicken Salad", NonVeg, "Lunch, Dinner", false, 260.0, 28.0, 8.0, 4.0, 4.0, 300.0),
        make_food("Mutton Rogan Josh", NonVeg, "Dinner", false, 420.0, 28.0, 26.0, 4.0, 1.0, 640.0),
        make_food("Mixed Fruit Bowl", Unspecified, "Breakfast, Snack", false, 150.0, 2.0, 1.0, 22.0, 4.0, 10.0),
    ]
}

pub fn fixture_catalog() -> FoodCatalog {
    FoodCatalog::new(fixture_foods())
}

pub fn profile(preference: DietaryPreference, disease: &str) -> UserProfile {
    UserProfile {
        name: "Test User".to_string(),
        age: Some(30),
        weight_kg: 70.0,
        height_cm: 170.0,
        activity_level: ActivityLevel::Moderate,
        preference,
        disease: disease.to_string(),
    }
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        catalog_path: PathBuf::from("unused.json"),
        cors_origin: "http://localhost:5173".to_string(),
    }
}
