use crate::models::{FoodItem, FoodPreference, MealSlot};

/// Read-only food dataset shared by every recommendation.
///
/// Items keep their dataset order; ranking ties resolve in that order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

/// Counts describing a catalog, for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub vegetarian: usize,
    pub non_vegetarian: usize,
    pub unspecified: usize,
    pub desserts: usize,
    /// Items tagged for each slot, in planning order.
    pub per_slot: Vec<(MealSlot, usize)>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Get a food by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn summary(&self) -> CatalogSummary {
        let count = |p: FoodPreference| self.foods.iter().filter(|f| f.preference == p).count();
        CatalogSummary {
            total: self.foods.len(),
            vegetarian: count(FoodPreference::Vegetarian),
            non_vegetarian: count(FoodPreference::NonVegetarian),
            unspecified: count(FoodPreference::Unspecified),
            desserts: self.foods.iter().filter(|f| f.is_dessert).count(),
            per_slot: MealSlot::ALL
                .into_iter()
                .map(|slot| (slot, self.foods.iter().filter(|f| f.serves(slot)).count()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem {
                food_name: "Poha".to_string(),
                preference: FoodPreference::Vegetarian,
                meal_time: "Breakfast".to_string(),
                is_dessert: false,
                calories: 250.0,
                carbs: 45.0,
                protein: 5.0,
                fat: 6.0,
                sugar: 2.0,
                fiber: 2.0,
                sodium: 300.0,
            },
            FoodItem {
                food_name: "Egg Bhurji".to_string(),
                preference: FoodPreference::NonVegetarian,
                meal_time: "Breakfast, Dinner".to_string(),
                is_dessert: false,
                calories: 280.0,
                carbs: 4.0,
                protein: 18.0,
                fat: 20.0,
                sugar: 1.0,
                fiber: 0.5,
                sodium: 420.0,
            },
            FoodItem {
                food_name: "Rasgulla".to_string(),
                preference: FoodPreference::Vegetarian,
                meal_time: "Snack".to_string(),
                is_dessert: true,
                calories: 190.0,
                carbs: 38.0,
                protein: 4.0,
                fat: 2.0,
                sugar: 30.0,
                fiber: 0.0,
                sodium: 20.0,
            },
        ]
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = FoodCatalog::new(sample_foods());
        assert!(catalog.find("poha").is_some());
        assert!(catalog.find("EGG BHURJI").is_some());
        assert!(catalog.find("idli").is_none());
    }

    #[test]
    fn test_summary() {
        let summary = FoodCatalog::new(sample_foods()).summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.vegetarian, 2);
        assert_eq!(summary.non_vegetarian, 1);
        assert_eq!(summary.desserts, 1);
        assert_eq!(
            summary.per_slot,
            vec![
                (MealSlot::Breakfast, 2),
                (MealSlot::Lunch, 0),
                (MealSlot::Snack, 1),
                (MealSlot::Dinner, 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        let catalog = FoodCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.summary().total, 0);
    }
}
