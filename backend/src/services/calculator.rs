//! Calculator service - turns API input into calculator calls
//!
//! Every call takes its profile explicitly; nothing here reads a
//! "current user".

use crate::error::ApiError;
use nutriplan_shared::types::{
    parse_activity_level, parse_gender, parse_goal, BmiRequest, BmiResponse, PlanRequest,
    WaterTargetRequest, WaterTargetResponse,
};
use nutriplan_shared::validation::{validate_age_years, validate_weight_kg, ValidationError};
use nutriplan_shared::{calculate_bmi_result, estimate_daily_water_intake_ml, DailyPlan};
use tracing::{debug, info};

/// Calculator service for plan, BMI and hydration targets
pub struct CalculatorService;

impl CalculatorService {
    /// Compute the full daily plan for a profile
    pub fn daily_plan(req: &PlanRequest) -> Result<DailyPlan, ApiError> {
        let profile = req.profile.to_profile()?;
        let activity_level = parse_activity_level(req.activity_level.as_deref());
        let goal = parse_goal(req.goal.as_deref());

        debug!(
            raw_activity = ?req.activity_level,
            raw_goal = ?req.goal,
            ?activity_level,
            ?goal,
            "Resolved plan options"
        );

        let plan = DailyPlan::compute(&profile, activity_level, goal)?;

        info!(
            calories = plan.calories.target_kcal,
            water_ml = plan.water_ml,
            bmi = plan.bmi.value,
            "Computed daily plan"
        );
        Ok(plan)
    }

    /// BMI with category; non-positive inputs are rejected
    pub fn bmi(req: &BmiRequest) -> Result<BmiResponse, ApiError> {
        let result = calculate_bmi_result(req.height_cm, req.weight_kg)?;
        debug!(bmi = result.value, "Computed BMI");
        Ok(result.into())
    }

    /// Recommended daily water intake
    pub fn water_target(req: &WaterTargetRequest) -> Result<WaterTargetResponse, ApiError> {
        validate_weight_kg(req.weight_kg).map_err(|m| ValidationError::new("weight_kg", &m))?;
        validate_age_years(req.age_years).map_err(|m| ValidationError::new("age_years", &m))?;

        let target_ml = estimate_daily_water_intake_ml(
            req.weight_kg,
            req.age_years,
            parse_gender(req.gender.as_deref()),
            parse_activity_level(req.activity_level.as_deref()),
        );
        debug!(target_ml, "Computed water target");
        Ok(WaterTargetResponse::new(target_ml))
    }
}
