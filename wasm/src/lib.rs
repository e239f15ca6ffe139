//! Nutriplan WASM Module
//!
//! WebAssembly bindings so the app front end can run the calculator
//! locally. Enum arguments are plain strings parsed leniently; an empty
//! string counts as absent.

use nutriplan_shared::{
    self as shared, ActivityLevel, BiometricProfile, Gender, Goal,
};
use wasm_bindgen::prelude::*;

fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn profile(height_cm: f64, weight_kg: f64, age_years: u32, gender: &str) -> BiometricProfile {
    BiometricProfile::new(
        height_cm,
        weight_kg,
        age_years,
        optional(gender).and_then(Gender::parse_lenient),
    )
}

fn activity(value: &str) -> Option<ActivityLevel> {
    optional(value).map(ActivityLevel::parse_lenient)
}

fn goal(value: &str) -> Option<Goal> {
    optional(value).map(Goal::parse_lenient)
}

/// Daily calorie target in kcal, or `undefined` when the profile has no value
#[wasm_bindgen(js_name = estimateCalorieTarget)]
pub fn estimate_calorie_target(
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: &str,
    activity_level: &str,
    goal_value: &str,
) -> Option<i32> {
    shared::estimate_calorie_target(
        &profile(height_cm, weight_kg, age_years, gender),
        activity(activity_level),
        goal(goal_value),
    )
}

/// Macro targets as a JSON string, or `undefined`
#[wasm_bindgen(js_name = estimateMacroTargets)]
pub fn estimate_macro_targets_json(
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: &str,
    activity_level: &str,
    goal_value: &str,
) -> Option<String> {
    shared::estimate_macro_targets(
        &profile(height_cm, weight_kg, age_years, gender),
        activity(activity_level),
        goal(goal_value),
    )
    .and_then(|m| serde_json::to_string(&m).ok())
}

/// Micro targets as a JSON string, or `undefined`
#[wasm_bindgen(js_name = estimateMicroTargets)]
pub fn estimate_micro_targets_json(
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: &str,
    activity_level: &str,
    goal_value: &str,
) -> Option<String> {
    shared::estimate_micro_targets(
        &profile(height_cm, weight_kg, age_years, gender),
        activity(activity_level),
        goal(goal_value),
    )
    .and_then(|m| serde_json::to_string(&m).ok())
}

/// BMI rounded to one decimal; throws on non-positive input
#[wasm_bindgen(js_name = calculateBmi)]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, String> {
    shared::calculate_bmi(height_cm, weight_kg).map_err(|e| e.to_string())
}

/// Recommended daily water intake in ml
#[wasm_bindgen(js_name = estimateDailyWaterIntakeMl)]
pub fn estimate_daily_water_intake_ml(
    weight_kg: f64,
    age_years: u32,
    gender: &str,
    activity_level: &str,
) -> i32 {
    shared::estimate_daily_water_intake_ml(
        weight_kg,
        age_years,
        optional(gender).and_then(Gender::parse_lenient),
        activity(activity_level),
    )
}

/// Goal display label; `undefined` for an empty value
#[wasm_bindgen(js_name = goalLabel)]
pub fn goal_label(value: &str) -> Option<String> {
    shared::goal_label(optional(value)).map(String::from)
}

/// Activity level display label; `undefined` for an empty value
#[wasm_bindgen(js_name = activityLevelLabel)]
pub fn activity_level_label(value: &str) -> Option<String> {
    shared::activity_level_label(optional(value)).map(String::from)
}
