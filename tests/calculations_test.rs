use assert_float_eq::*;

use nutrigraph_rs::models::ActivityLevel;
use nutrigraph_rs::planner::{
    calculate_bmi, calorie_match_percent, calorie_range, daily_target, per_meal_target,
};

#[test]
fn test_bmi_matches_formula_to_two_decimals() {
    for (weight, height) in [(70.0, 170.0), (55.5, 162.0), (98.0, 181.0), (45.0, 150.0)] {
        let expected = weight / ((height / 100.0) * (height / 100.0));
        let bmi = calculate_bmi(weight, height);
        assert_float_absolute_eq!(bmi, expected, 0.005);
        // Two decimal places exactly
        assert_float_absolute_eq!(bmi * 100.0, (bmi * 100.0).round(), 1e-6);
    }
}

#[test]
fn test_bmi_zero_for_falsy_inputs() {
    assert_eq!(calculate_bmi(0.0, 0.0), 0.0);
    assert_eq!(calculate_bmi(0.0, 170.0), 0.0);
    assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
}

#[test]
fn test_zero_bmi_lands_in_underweight_band() {
    // An unusable height still yields a plan, at the underweight band.
    assert_eq!(calorie_range(0.0, ActivityLevel::Moderate), (2400.0, 2600.0));
}

#[test]
fn test_activity_bases() {
    let normal_bmi = 22.0;
    assert_eq!(daily_target(calorie_range(normal_bmi, ActivityLevel::Low)), 1800.0);
    assert_eq!(daily_target(calorie_range(normal_bmi, ActivityLevel::Moderate)), 2200.0);
    assert_eq!(daily_target(calorie_range(normal_bmi, ActivityLevel::High)), 2600.0);
}

#[test]
fn test_example_profile_targets() {
    let bmi = calculate_bmi(70.0, 170.0);
    assert_float_absolute_eq!(bmi, 24.22, 1e-9);

    let range = calorie_range(bmi, ActivityLevel::Moderate);
    assert_eq!(range, (2100.0, 2300.0));
    assert_eq!(per_meal_target(daily_target(range)), 550.0);
}

#[test]
fn test_match_percent_bounds() {
    for achieved in [0.0, 500.0, 1100.0, 2200.0, 3000.0, 4400.0, 9000.0] {
        let pct = calorie_match_percent(achieved, 2200.0);
        assert!(
            (0.0..=100.0).contains(&pct),
            "match {} out of range for {} kcal",
            pct,
            achieved
        );
    }
    assert_float_absolute_eq!(calorie_match_percent(1650.0, 2200.0), 75.0, 1e-9);
}
