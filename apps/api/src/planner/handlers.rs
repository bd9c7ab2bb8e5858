//! Axum route handlers for the Planner API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::planner::export::{render_export, PlanExport, EXPORT_CONTENT_DISPOSITION};
use crate::planner::generator::{generate_plan, FitnessPlan};
use crate::planner::macros::{extract_macros, MacroSummary, MacroTargets, MacroTotals};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Free text. May be empty; no length limit.
    pub goal: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    #[serde(flatten)]
    pub plan: FitnessPlan,
    pub export: PlanExport,
}

#[derive(Debug, Deserialize)]
pub struct ExportPlanRequest {
    pub meal_plan: String,
    pub workout_plan: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractMacrosRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractMacrosResponse {
    pub totals: MacroTotals,
    pub macros: MacroSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans
///
/// Full pipeline: meal plan → workout plan → macro extraction → progress.
/// Any completion failure aborts the request and is returned as-is.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let plan = generate_plan(state.llm.as_ref(), &request.goal, &state.config.targets).await?;
    let export = PlanExport::new(&plan.meal_plan, &plan.workout_plan);

    Ok(Json(GeneratePlanResponse { plan, export }))
}

/// POST /api/v1/plans/export
///
/// Returns both plans as a `my_fitness_plan.txt` attachment.
pub async fn handle_export_plan(Json(request): Json<ExportPlanRequest>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CONTENT_DISPOSITION, EXPORT_CONTENT_DISPOSITION),
        ],
        render_export(&request.meal_plan, &request.workout_plan),
    )
}

/// POST /api/v1/macros/extract
///
/// Runs the macro extractor on caller-supplied text. No LLM call.
pub async fn handle_extract_macros(
    State(state): State<AppState>,
    Json(request): Json<ExtractMacrosRequest>,
) -> Json<ExtractMacrosResponse> {
    let totals = extract_macros(&request.text);
    Json(ExtractMacrosResponse {
        totals,
        macros: state.config.targets.summarize(totals),
    })
}

/// GET /api/v1/targets
pub async fn handle_get_targets(State(state): State<AppState>) -> Json<MacroTargets> {
    Json(state.config.targets)
}
