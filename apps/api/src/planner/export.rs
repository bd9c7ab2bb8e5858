//! Plan Export — the downloadable plain-text copy of a generated plan.

use serde::{Deserialize, Serialize};

pub const EXPORT_FILE_NAME: &str = "my_fitness_plan.txt";
pub const EXPORT_CONTENT_DISPOSITION: &str = "attachment; filename=\"my_fitness_plan.txt\"";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExport {
    pub file_name: String,
    pub content: String,
}

impl PlanExport {
    pub fn new(meal_plan: &str, workout_plan: &str) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            content: render_export(meal_plan, workout_plan),
        }
    }
}

/// Both plans under labeled headings, meal plan first.
pub fn render_export(meal_plan: &str, workout_plan: &str) -> String {
    format!("Meal Plan:\n{meal_plan}\n\nWorkout Plan:\n{workout_plan}")
}
