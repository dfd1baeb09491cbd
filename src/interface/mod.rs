pub mod prompts;
pub mod render;

pub use prompts::{
    ProfileDraft, collect_profile, prompt_activity, prompt_disease, prompt_height, prompt_name,
    prompt_preference, prompt_weight, prompt_yes_no,
};
pub use render::{display_catalog_summary, display_meal_plan};
