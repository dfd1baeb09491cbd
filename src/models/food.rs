use serde::{Deserialize, Deserializer, Serialize};

use crate::models::plan::MealSlot;

/// Dietary class of a catalog item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPreference {
    Vegetarian,
    NonVegetarian,
    #[default]
    Unspecified,
}

impl FoodPreference {
    /// Parse a dataset label. Case and separator variants of
    /// "non vegetarian" collapse to one value; unknown labels are unspecified.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "vegetarian" | "veg" => FoodPreference::Vegetarian,
            "non_vegetarian" | "non-vegetarian" | "non vegetarian" | "nonveg" | "non-veg" => {
                FoodPreference::NonVegetarian
            }
            _ => FoodPreference::Unspecified,
        }
    }
}

/// A catalog entry with its nutrient values per serving.
///
/// Calories in kcal, sodium in mg, everything else in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(alias = "name")]
    pub food_name: String,

    #[serde(default, deserialize_with = "lenient_preference")]
    pub preference: FoodPreference,

    #[serde(default, deserialize_with = "lenient_text")]
    pub meal_time: String,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_dessert: bool,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: f64,
}

impl FoodItem {
    /// Whether the meal-time tags mention this slot (case-insensitive substring).
    pub fn serves(&self, slot: MealSlot) -> bool {
        self.meal_time
            .to_lowercase()
            .contains(&slot.name().to_lowercase())
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.food_name.to_lowercase()
    }

    /// Absolute calorie distance from a target.
    #[inline]
    pub fn calorie_distance(&self, target: f64) -> f64 {
        (self.calories - target).abs()
    }
}

/// Raw dataset cell: datasets mix numbers, numeric strings and booleans.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl LenientValue {
    fn as_f64(&self) -> f64 {
        let value = match self {
            LenientValue::Flag(b) => f64::from(u8::from(*b)),
            LenientValue::Number(n) => *n,
            LenientValue::Text(s) => s.trim().parse().unwrap_or(0.0),
        };
        if value.is_finite() { value } else { 0.0 }
    }

    fn as_bool(&self) -> bool {
        match self {
            LenientValue::Flag(b) => *b,
            LenientValue::Number(n) => *n != 0.0,
            LenientValue::Text(s) => matches!(
                s.trim().to_lowercase().as_str(),
                "true" | "yes" | "1" | "y"
            ),
        }
    }

    fn into_text(self) -> String {
        match self {
            LenientValue::Flag(b) => b.to_string(),
            LenientValue::Number(n) => n.to_string(),
            LenientValue::Text(s) => s,
        }
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<LenientValue>::deserialize(deserializer)?
        .map(|v| v.as_f64())
        .unwrap_or(0.0))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<LenientValue>::deserialize(deserializer)?
        .map(|v| v.as_bool())
        .unwrap_or(false))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<LenientValue>::deserialize(deserializer)?
        .map(LenientValue::into_text)
        .unwrap_or_default())
}

fn lenient_preference<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<FoodPreference, D::Error> {
    Ok(Option::<LenientValue>::deserialize(deserializer)?
        .map(|v| FoodPreference::parse(&v.into_text()))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_numbers_and_strings() {
        let json = r#"{
            "food_name": "Paneer Tikka",
            "preference": "Vegetarian",
            "meal_time": "Lunch, Dinner",
            "is_dessert": 0,
            "calories": "320",
            "carbs": 12,
            "protein": "18.5",
            "fat": null,
            "sugar": "n/a",
            "fiber": 2
        }"#;

        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.preference, FoodPreference::Vegetarian);
        assert!(!food.is_dessert);
        assert_eq!(food.calories, 320.0);
        assert_eq!(food.protein, 18.5);
        assert_eq!(food.fat, 0.0);
        assert_eq!(food.sugar, 0.0);
        assert_eq!(food.sodium, 0.0);
    }

    #[test]
    fn test_missing_meal_time_is_empty() {
        let food: FoodItem = serde_json::from_str(r#"{"food_name": "Water"}"#).unwrap();
        assert_eq!(food.meal_time, "");
        assert_eq!(food.preference, FoodPreference::Unspecified);
        assert!(!food.serves(MealSlot::Breakfast));
    }

    #[test]
    fn test_non_vegetarian_variants() {
        for label in ["non_vegetarian", "Non-Vegetarian", "NON VEGETARIAN"] {
            assert_eq!(FoodPreference::parse(label), FoodPreference::NonVegetarian);
        }
        assert_eq!(FoodPreference::parse("vegan?"), FoodPreference::Unspecified);
    }

    #[test]
    fn test_serves_is_case_insensitive_substring() {
        let food: FoodItem =
            serde_json::from_str(r#"{"food_name": "Oats", "meal_time": "BREAKFAST/snack"}"#)
                .unwrap();
        assert!(food.serves(MealSlot::Breakfast));
        assert!(food.serves(MealSlot::Snack));
        assert!(!food.serves(MealSlot::Dinner));
    }

    #[test]
    fn test_dessert_flag_from_text() {
        let food: FoodItem =
            serde_json::from_str(r#"{"food_name": "Kheer", "is_dessert": "True"}"#).unwrap();
        assert!(food.is_dessert);
    }
}
