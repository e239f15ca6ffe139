//! Calculator API routes
//!
//! Stateless: every request carries the profile it is computed for.

use crate::error::ApiResult;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use nutriplan_shared::types::{
    BmiRequest, BmiResponse, PlanRequest, WaterTargetRequest, WaterTargetResponse,
};
use nutriplan_shared::{DailyPlan, LabelCatalog};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", post(daily_plan))
        .route("/bmi", post(bmi))
        .route("/water/target", post(water_target))
        .route("/labels", get(labels))
}

/// POST /api/v1/plan - Calories, macros, micros, BMI and water for a profile
async fn daily_plan(Json(req): Json<PlanRequest>) -> ApiResult<Json<DailyPlan>> {
    Ok(Json(CalculatorService::daily_plan(&req)?))
}

/// POST /api/v1/bmi
async fn bmi(Json(req): Json<BmiRequest>) -> ApiResult<Json<BmiResponse>> {
    Ok(Json(CalculatorService::bmi(&req)?))
}

/// POST /api/v1/water/target - Recommended daily water intake
async fn water_target(
    Json(req): Json<WaterTargetRequest>,
) -> ApiResult<Json<WaterTargetResponse>> {
    Ok(Json(CalculatorService::water_target(&req)?))
}

/// GET /api/v1/labels - Display labels for every goal and activity level
async fn labels() -> Json<LabelCatalog> {
    Json(LabelCatalog::new())
}
