use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::models::{MealPlan, ProfileRequest, SlotMeals, UserProfile};
use crate::planner::recommend_meals;
use crate::server::error::AppError;
use crate::server::state::AppState;

pub const ROOT_MESSAGE: &str = "NutriGraph backend is running";

/// Nutrient and target figures reported alongside a plan.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub bmi: f64,
    pub calorie_range: (f64, f64),
    pub target_calories: f64,
    pub per_meal_target: f64,
    pub total_calories: f64,
    pub total_carbs: f64,
    pub total_protein: f64,
    pub total_fat: f64,
    pub total_sugar: f64,
    pub total_fiber: f64,
    pub total_sodium: f64,
    pub calorie_match_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub user: UserProfile,
    pub summary: PlanSummary,
    pub meals: SlotMeals,
}

impl RecommendResponse {
    pub fn new(user: UserProfile, plan: MealPlan) -> Self {
        let totals = plan.totals;
        Self {
            user,
            summary: PlanSummary {
                bmi: plan.bmi,
                calorie_range: plan.calorie_range,
                target_calories: plan.target_calories,
                per_meal_target: plan.per_meal_target,
                total_calories: totals.calories,
                total_carbs: totals.carbs,
                total_protein: totals.protein,
                total_fat: totals.fat,
                total_sugar: totals.sugar,
                total_fiber: totals.fiber,
                total_sodium: totals.sodium,
                calorie_match_percent: plan.calorie_match_percent,
            },
            meals: plan.meals,
        }
    }
}

pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

/// `POST /api/recommend`: validate the profile and return a fresh plan.
///
/// The body is parsed by hand so that malformed JSON is reported the same
/// way as missing fields.
pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecommendResponse>, AppError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let profile = ProfileRequest::from_json(payload).into_profile()?;

    let plan = recommend_meals(&state.catalog, &profile, &mut rand::thread_rng());

    info!(
        user = %profile.name,
        items = plan.item_count(),
        calorie_match = plan.calorie_match_percent,
        "Recommendation served"
    );

    Ok(Json(RecommendResponse::new(profile, plan)))
}
