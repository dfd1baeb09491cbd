use serde::Serialize;

use crate::models::food::FoodItem;

/// One of the four meals in a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// All slots in the order they are planned.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Main meals never carry desserts.
    pub fn is_main_meal(self) -> bool {
        !matches!(self, MealSlot::Snack)
    }
}

/// Selected foods per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotMeals {
    #[serde(rename = "Breakfast")]
    pub breakfast: Vec<FoodItem>,
    #[serde(rename = "Lunch")]
    pub lunch: Vec<FoodItem>,
    #[serde(rename = "Snack")]
    pub snack: Vec<FoodItem>,
    #[serde(rename = "Dinner")]
    pub dinner: Vec<FoodItem>,
}

impl SlotMeals {
    pub fn get(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn set(&mut self, slot: MealSlot, items: Vec<FoodItem>) {
        match slot {
            MealSlot::Breakfast => self.breakfast = items,
            MealSlot::Lunch => self.lunch = items,
            MealSlot::Snack => self.snack = items,
            MealSlot::Dinner => self.dinner = items,
        }
    }

    /// Slots paired with their foods, in planning order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[FoodItem])> {
        MealSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Every selected food across all slots.
    pub fn all_items(&self) -> impl Iterator<Item = &FoodItem> {
        self.iter().flat_map(|(_, items)| items.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.all_items().next().is_none()
    }
}

/// Summed nutrients over a set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub sugar: f64,
    pub fiber: f64,
    pub sodium: f64,
}

impl NutrientTotals {
    pub fn add(&mut self, food: &FoodItem) {
        self.calories += food.calories;
        self.carbs += food.carbs;
        self.protein += food.protein;
        self.fat += food.fat;
        self.sugar += food.sugar;
        self.fiber += food.fiber;
        self.sodium += food.sodium;
    }
}

impl<'a> FromIterator<&'a FoodItem> for NutrientTotals {
    fn from_iter<I: IntoIterator<Item = &'a FoodItem>>(iter: I) -> Self {
        let mut totals = NutrientTotals::default();
        for food in iter {
            totals.add(food);
        }
        totals
    }
}

/// A computed daily plan. Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub bmi: f64,
    /// Daily calorie band (low, high).
    pub calorie_range: (f64, f64),
    /// Midpoint of the calorie band.
    pub target_calories: f64,
    pub per_meal_target: f64,
    pub totals: NutrientTotals,
    pub calorie_match_percent: f64,
    pub meals: SlotMeals,
}

impl MealPlan {
    pub fn item_count(&self) -> usize {
        self.meals.all_items().count()
    }
}
