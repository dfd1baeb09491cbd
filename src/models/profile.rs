use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NutriError, Result};

/// Daily activity band used to pick the base calorie budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Parse a free-text activity level. Anything other than "low" or
    /// "moderate" is treated as high.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => ActivityLevel::Low,
            "moderate" => ActivityLevel::Moderate,
            _ => ActivityLevel::High,
        }
    }
}

/// What the user is willing to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
    Both,
}

impl DietaryPreference {
    /// Parse a free-text preference; unrecognized values mean no filter.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "vegetarian" => DietaryPreference::Vegetarian,
            "non-vegetarian" | "non_vegetarian" | "non vegetarian" => {
                DietaryPreference::NonVegetarian
            }
            _ => DietaryPreference::Both,
        }
    }
}

/// Conditions derived from the free-text disease field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiseaseFlags {
    pub diabetic: bool,
    pub cardiac: bool,
}

impl DiseaseFlags {
    pub fn from_text(disease: &str) -> Self {
        let disease = disease.to_lowercase();
        Self {
            diabetic: disease.contains("diabetes"),
            cardiac: disease.contains("heart") || disease.contains("hypertension"),
        }
    }
}

/// Health profile consumed by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub preference: DietaryPreference,
    #[serde(default)]
    pub disease: String,
}

impl UserProfile {
    pub fn disease_flags(&self) -> DiseaseFlags {
        DiseaseFlags::from_text(&self.disease)
    }
}

/// Required request fields, in the order they are reported.
pub const REQUIRED_PROFILE_FIELDS: [&str; 5] =
    ["name", "weight_kg", "height_cm", "activity_level", "preference"];

/// Untrusted profile payload as sent by a client.
///
/// Numbers may arrive as JSON numbers or numeric strings; validation turns
/// this into a [`UserProfile`] or lists every field that is unusable.
#[derive(Debug, Clone, Default)]
pub struct ProfileRequest {
    fields: Map<String, Value>,
}

impl ProfileRequest {
    /// Wrap a decoded JSON body. Non-object bodies carry no fields.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        let value = match self.fields.get(key)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        (value.is_finite() && value != 0.0).then_some(value)
    }

    /// Validate and convert into a profile.
    pub fn into_profile(self) -> Result<UserProfile> {
        let name = self.text("name");
        let weight_kg = self.number("weight_kg");
        let height_cm = self.number("height_cm");
        let activity_level = self.text("activity_level");
        let preference = self.text("preference");

        let mut missing = Vec::new();
        for (field, present) in REQUIRED_PROFILE_FIELDS.iter().zip([
            name.is_some(),
            weight_kg.is_some(),
            height_cm.is_some(),
            activity_level.is_some(),
            preference.is_some(),
        ]) {
            if !present {
                missing.push(field.to_string());
            }
        }

        match (name, weight_kg, height_cm, activity_level, preference) {
            (Some(name), Some(weight_kg), Some(height_cm), Some(activity), Some(preference)) => {
                let age = self
                    .number("age")
                    .filter(|a| *a > 0.0)
                    .map(|a| a.round() as u32);
                Ok(UserProfile {
                    name,
                    age,
                    weight_kg,
                    height_cm,
                    activity_level: ActivityLevel::parse(&activity),
                    preference: DietaryPreference::parse(&preference),
                    disease: self.text("disease").unwrap_or_default(),
                })
            }
            _ => Err(NutriError::MissingFields(missing)),
        }
    }
}
