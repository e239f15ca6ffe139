//! Daily plan: every derived target for one profile in a single value

use crate::errors::CalculationError;
use crate::health_metrics::{
    calculate_bmi_result, calculate_calorie_breakdown, estimate_daily_water_intake_ml, BmiResult,
    CalorieBreakdown,
};
use crate::nutrients::{estimate_macro_targets, estimate_micro_targets, MacroTargets, MicroTargets};
use crate::profile::{ActivityLevel, BiometricProfile, Goal};
use serde::{Deserialize, Serialize};

/// Everything the plan screen renders for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub calories: CalorieBreakdown,
    pub macros: MacroTargets,
    pub micros: MicroTargets,
    pub bmi: BmiResult,
    pub water_ml: i32,
}

impl DailyPlan {
    /// Compute the plan, resolving absent activity/goal to their defaults
    pub fn compute(
        profile: &BiometricProfile,
        activity_level: Option<ActivityLevel>,
        goal: Option<Goal>,
    ) -> Result<Self, CalculationError> {
        let activity_level = activity_level.unwrap_or_default();
        let goal = goal.unwrap_or_default();

        let bmi = calculate_bmi_result(profile.height_cm, profile.weight_kg)?;
        let calories = calculate_calorie_breakdown(profile, Some(activity_level), Some(goal))
            .ok_or(CalculationError::UnresolvedProfile)?;
        let macros = estimate_macro_targets(profile, Some(activity_level), Some(goal))
            .ok_or(CalculationError::UnresolvedProfile)?;
        let micros = estimate_micro_targets(profile, Some(activity_level), Some(goal))
            .ok_or(CalculationError::UnresolvedProfile)?;
        let water_ml = estimate_daily_water_intake_ml(
            profile.weight_kg,
            profile.age_years,
            profile.gender,
            Some(activity_level),
        );

        Ok(Self {
            activity_level,
            goal,
            calories,
            macros,
            micros,
            bmi,
            water_ml,
        })
    }
}
