// All LLM prompt templates for the Planner module.
// `{goal}` is replaced verbatim with the user's goal text. It is not escaped.

/// Meal plan prompt template. Replace `{goal}` before sending.
pub const MEAL_PLAN_PROMPT_TEMPLATE: &str = "\
Create a high-protein, gluten-free meal plan for someone with this fitness goal: {goal}.
Include breakfast, lunch, dinner, and a snack. Show calories and protein for each meal.";

/// Workout plan prompt template. Replace `{goal}` before sending.
pub const WORKOUT_PLAN_PROMPT_TEMPLATE: &str = "\
Create a 45-minute glute- and core-focused workout for someone with this goal: {goal}.
Include sets, reps, rest time, and the muscles being worked.";

pub fn meal_plan_prompt(goal: &str) -> String {
    MEAL_PLAN_PROMPT_TEMPLATE.replace("{goal}", goal)
}

pub fn workout_plan_prompt(goal: &str) -> String {
    WORKOUT_PLAN_PROMPT_TEMPLATE.replace("{goal}", goal)
}
