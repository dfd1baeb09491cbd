use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, DietaryPreference, UserProfile};

/// Profile fields supplied up front; anything left as `None` is prompted for.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<String>,
    pub preference: Option<String>,
    pub disease: Option<String>,
}

fn ensure_positive(value: f64, what: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NutriError::InvalidInput(format!("{what} must be positive")));
    }
    Ok(value)
}

fn parse_positive(input: &str, what: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid {what}: {input}")))?;
    ensure_positive(value, what)
}

/// Prompt for the user's name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new().with_prompt("Name").interact_text()?;
    let name = input.trim();
    if name.is_empty() {
        return Err(NutriError::MissingFields(vec!["name".to_string()]));
    }
    Ok(name.to_string())
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .default("70".to_string())
        .interact_text()?;
    parse_positive(&input, "weight")
}

/// Prompt for height in centimetres.
pub fn prompt_height() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .default("170".to_string())
        .interact_text()?;
    parse_positive(&input, "height")
}

/// Prompt for the activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options = ["low", "moderate", "high"];
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;
    Ok(ActivityLevel::parse(options[selection]))
}

/// Prompt for the dietary preference.
pub fn prompt_preference() -> Result<DietaryPreference> {
    let options = ["vegetarian", "non_vegetarian", "both"];
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&options)
        .default(2)
        .interact()?;
    Ok(DietaryPreference::parse(options[selection]))
}

/// Prompt for free-text conditions (may be empty).
pub fn prompt_disease() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Conditions (e.g. diabetes, hypertension; Enter for none)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill in every missing field of the draft interactively.
pub fn collect_profile(draft: ProfileDraft) -> Result<UserProfile> {
    let name = match draft.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.trim().to_string(),
        None => prompt_name()?,
    };
    let weight_kg = match draft.weight_kg {
        Some(w) => ensure_positive(w, "weight")?,
        None => prompt_weight()?,
    };
    let height_cm = match draft.height_cm {
        Some(h) => ensure_positive(h, "height")?,
        None => prompt_height()?,
    };
    let activity_level = match draft.activity_level {
        Some(a) => ActivityLevel::parse(&a),
        None => prompt_activity()?,
    };
    let preference = match draft.preference {
        Some(p) => DietaryPreference::parse(&p),
        None => prompt_preference()?,
    };
    let disease = match draft.disease {
        Some(d) => d,
        None => prompt_disease()?,
    };

    Ok(UserProfile {
        name,
        age: draft.age,
        weight_kg,
        height_cm,
        activity_level,
        preference,
        disease,
    })
}
