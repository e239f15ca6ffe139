//! Water intake history API routes

use super::{parse_date, parse_user_id};
use crate::error::ApiResult;
use crate::services::HistoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use nutriplan_shared::types::{
    DateRangeQuery, LogWaterRequest, WaterDayQuery, WaterDayResponse, WaterHistoryResponse,
};

/// Create water routes, nested under `/users`
pub fn water_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/water", get(get_history).post(log_water))
        .route("/:user_id/water/:date", get(get_day))
}

/// POST /api/v1/users/:user_id/water - Add a drink to a day's total
async fn log_water(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<WaterDayQuery>,
    Json(req): Json<LogWaterRequest>,
) -> ApiResult<Json<WaterDayResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let day = HistoryService::log_water(
        state.history(),
        user_id,
        req.date,
        req.amount_ml,
        query.target_ml,
    )
    .await?;
    Ok(Json(day))
}

/// GET /api/v1/users/:user_id/water/:date - One day, with progress when a target is given
async fn get_day(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
    Query(query): Query<WaterDayQuery>,
) -> ApiResult<Json<WaterDayResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let date = parse_date(&date)?;
    let day = HistoryService::water_day(state.history(), user_id, date, query.target_ml).await?;
    Ok(Json(day))
}

/// GET /api/v1/users/:user_id/water - Logged days in a date range
async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<WaterHistoryResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let history =
        HistoryService::water_history(state.history(), &state.config().history, user_id, &query)
            .await?;
    Ok(Json(history))
}
