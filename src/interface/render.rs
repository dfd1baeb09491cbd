use crate::catalog::CatalogSummary;
use crate::models::{MealPlan, UserProfile};

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(profile: &UserProfile, plan: &MealPlan) {
    println!();
    println!("=== Meal Plan for {} ===", profile.name);
    println!();
    println!(
        "BMI {:.2} | target {:.0} kcal/day (range {:.0}-{:.0}) | {:.0} kcal per meal",
        plan.bmi,
        plan.target_calories,
        plan.calorie_range.0,
        plan.calorie_range.1,
        plan.per_meal_target
    );

    let max_name_len = plan
        .meals
        .all_items()
        .map(|f| f.food_name.len())
        .max()
        .unwrap_or(10);

    for (slot, items) in plan.meals.iter() {
        println!();
        println!("{}:", slot.name());
        if items.is_empty() {
            println!("  (no matching foods)");
            continue;
        }
        for food in items {
            println!(
                "  {:<width$} - {:>4.0} kcal | P {:>5.1}g F {:>5.1}g S {:>5.1}g Na {:>5.0}mg",
                food.food_name,
                food.calories,
                food.protein,
                food.fat,
                food.sugar,
                food.sodium,
                width = max_name_len
            );
        }
    }

    let totals = &plan.totals;
    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.item_count());
    println!("Total calories: {:.0}", totals.calories);
    println!(
        "Protein {:.1}g | Carbs {:.1}g | Fat {:.1}g | Sugar {:.1}g | Fiber {:.1}g | Sodium {:.0}mg",
        totals.protein, totals.carbs, totals.fat, totals.sugar, totals.fiber, totals.sodium
    );
    println!("Calorie match: {:.1}%", plan.calorie_match_percent);
    println!();
}

/// Display catalog counts.
pub fn display_catalog_summary(summary: &CatalogSummary) {
    if summary.total == 0 {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Food Catalog ({} items) ===", summary.total);
    println!();
    println!("  vegetarian:     {}", summary.vegetarian);
    println!("  non-vegetarian: {}", summary.non_vegetarian);
    println!("  unspecified:    {}", summary.unspecified);
    println!("  desserts:       {}", summary.desserts);
    println!();
    for (slot, count) in &summary.per_slot {
        println!("  {:<10} {}", slot.name(), count);
    }
    println!();
}
