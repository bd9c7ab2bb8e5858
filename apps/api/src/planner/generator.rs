//! Plan Generation — orchestrates one "generate my plan" action.
//!
//! Flow: meal prompt → LLM → workout prompt → LLM → extract macros from meal text
//!       → compare against targets → return response.
//!
//! The two LLM calls run one after the other. Neither is retried; the first
//! failure aborts the action and nothing partial is returned.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{CompletionService, LlmError};
use crate::planner::macros::{extract_macros, MacroSummary, MacroTargets, MacroTotals};
use crate::planner::prompts::{meal_plan_prompt, workout_plan_prompt};

/// Everything one generate action produces. Request-scoped; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct FitnessPlan {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub goal: String,
    pub meal_plan: String,
    pub workout_plan: String,
    pub totals: MacroTotals,
    pub macros: MacroSummary,
}

/// Asks the LLM for a high-protein, gluten-free meal plan. The reply is returned unmodified.
pub async fn generate_meal_plan(
    llm: &dyn CompletionService,
    goal: &str,
) -> Result<String, LlmError> {
    llm.complete(&meal_plan_prompt(goal)).await
}

/// Asks the LLM for a 45-minute glute and core workout. The reply is returned unmodified.
pub async fn generate_workout_plan(
    llm: &dyn CompletionService,
    goal: &str,
) -> Result<String, LlmError> {
    llm.complete(&workout_plan_prompt(goal)).await
}

/// Runs the full plan pipeline for one goal.
///
/// Steps:
/// 1. generate_meal_plan()
/// 2. generate_workout_plan()
/// 3. extract_macros() on the meal text only
/// 4. targets.summarize() → progress fractions clamped to 1.0
pub async fn generate_plan(
    llm: &dyn CompletionService,
    goal: &str,
    targets: &MacroTargets,
) -> Result<FitnessPlan, AppError> {
    let plan_id = Uuid::new_v4();

    info!("Generating meal plan {} (goal length {})", plan_id, goal.len());
    let meal_plan = generate_meal_plan(llm, goal).await?;

    info!("Generating workout plan {}", plan_id);
    let workout_plan = generate_workout_plan(llm, goal).await?;

    let totals = extract_macros(&meal_plan);
    info!(
        "Plan {} macros: {} calories, {}g protein",
        plan_id, totals.calories, totals.protein_grams
    );

    Ok(FitnessPlan {
        plan_id,
        generated_at: Utc::now(),
        goal: goal.to_string(),
        meal_plan,
        workout_plan,
        totals,
        macros: targets.summarize(totals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedCompletion;

    const MEAL_REPLY: &str = "\
Breakfast: Veggie omelette - 350 calories, 28g protein
Lunch: Turkey lettuce wraps - 450 calories, 40g protein
Dinner: Steak with rice - 700 calories, 55 g protein
Snack: Cottage cheese - 500 calories, 25g protein
Overall daily total: 2000 calories, 148g protein";

    const WORKOUT_REPLY: &str = "Hip thrusts: 4 sets x 10 reps, 90s rest (glutes, hamstrings)";

    #[tokio::test]
    async fn test_generate_meal_plan_returns_reply_unmodified() {
        let llm = ScriptedCompletion::new(["  raw reply\n"]);
        let text = generate_meal_plan(&llm, "stay lean").await.unwrap();
        assert_eq!(text, "  raw reply\n");
        assert_eq!(llm.prompts(), vec![meal_plan_prompt("stay lean")]);
    }

    #[tokio::test]
    async fn test_generate_workout_plan_uses_workout_prompt() {
        let llm = ScriptedCompletion::new(["Plank 3x60s"]);
        let text = generate_workout_plan(&llm, "core strength").await.unwrap();
        assert_eq!(text, "Plank 3x60s");
        assert_eq!(llm.prompts(), vec![workout_plan_prompt("core strength")]);
    }

    #[tokio::test]
    async fn test_generate_plan_calls_meal_then_workout() {
        let llm = ScriptedCompletion::new([MEAL_REPLY, WORKOUT_REPLY]);
        let plan = generate_plan(&llm, "grow glutes", &MacroTargets::default())
            .await
            .unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("meal plan"));
        assert!(prompts[1].contains("workout"));

        assert_eq!(plan.goal, "grow glutes");
        assert_eq!(plan.meal_plan, MEAL_REPLY);
        assert_eq!(plan.workout_plan, WORKOUT_REPLY);
    }

    #[tokio::test]
    async fn test_generate_plan_extracts_from_meal_text_only() {
        let llm = ScriptedCompletion::new([MEAL_REPLY, "Burns 300 calories, 0 g protein"]);
        let plan = generate_plan(&llm, "", &MacroTargets::default())
            .await
            .unwrap();

        assert_eq!(plan.totals.calories, 2000);
        assert_eq!(plan.totals.protein_grams, 148);
        assert_eq!(plan.macros.calories.fraction, 1.0);
        assert!(plan.macros.protein.fraction >= 1.0);
    }

    #[tokio::test]
    async fn test_generate_plan_uses_given_targets() {
        let llm = ScriptedCompletion::new([MEAL_REPLY, WORKOUT_REPLY]);
        let targets = MacroTargets {
            calories: 4000,
            protein_grams: 296,
        };
        let plan = generate_plan(&llm, "bulk", &targets).await.unwrap();
        assert!((plan.macros.calories.fraction - 0.5).abs() < f64::EPSILON);
        assert!((plan.macros.protein.fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(plan.macros.calories.target, 4000);
    }

    #[tokio::test]
    async fn test_meal_failure_skips_workout_call() {
        let llm = ScriptedCompletion::default().then_fail(401, "Incorrect API key provided");
        let err = generate_plan(&llm, "x", &MacroTargets::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 401, .. })));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_workout_failure_discards_meal_plan() {
        let llm = ScriptedCompletion::new([MEAL_REPLY]).then_fail(429, "Rate limit reached");
        let err = generate_plan(&llm, "x", &MacroTargets::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Rate limit reached"));
        assert_eq!(llm.prompts().len(), 2);
    }
}
