//! API request and response types

use crate::health_metrics::BmiResult;
use crate::history::{WaterIntakeDay, WaterProgress};
use crate::profile::{ActivityLevel, BiometricProfile, Gender, Goal};
use crate::units::{HeightUnit, VolumeUnit, WeightUnit};
use crate::validation::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Profile Input
// ============================================================================

/// Biometric profile as entered on the profile screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Height value in the specified unit
    pub height: f64,
    /// Height unit (cm, in); defaults to cm
    #[serde(default)]
    pub height_unit: Option<String>,
    /// Weight value in the specified unit
    pub weight: f64,
    /// Weight unit (kg, lbs); defaults to kg
    #[serde(default)]
    pub weight_unit: Option<String>,
    pub age_years: u32,
    /// Unrecognized values are treated as unspecified
    #[serde(default)]
    pub gender: Option<String>,
}

impl ProfileInput {
    /// Convert to a metric [`BiometricProfile`] and range-check it
    pub fn to_profile(&self) -> Result<BiometricProfile, ValidationError> {
        let height_unit: HeightUnit = parse_unit(self.height_unit.as_deref(), "height_unit")?;
        let weight_unit: WeightUnit = parse_unit(self.weight_unit.as_deref(), "weight_unit")?;

        let profile = BiometricProfile::new(
            height_unit.to_cm(self.height),
            weight_unit.to_kg(self.weight),
            self.age_years,
            parse_gender(self.gender.as_deref()),
        );
        profile.validate()?;
        Ok(profile)
    }
}

fn parse_unit<U>(value: Option<&str>, field: &str) -> Result<U, ValidationError>
where
    U: std::str::FromStr<Err = String> + Default,
{
    match value {
        None => Ok(U::default()),
        Some(v) => v.parse().map_err(|e: String| ValidationError::new(field, &e)),
    }
}

/// Lenient gender parse: anything unrecognized resolves to `None`
pub fn parse_gender(value: Option<&str>) -> Option<Gender> {
    value.and_then(Gender::parse_lenient)
}

/// Lenient activity parse: absent stays absent, unknown falls back to the default
pub fn parse_activity_level(value: Option<&str>) -> Option<ActivityLevel> {
    value.map(ActivityLevel::parse_lenient)
}

/// Lenient goal parse: absent stays absent, unknown falls back to the default
pub fn parse_goal(value: Option<&str>) -> Option<Goal> {
    value.map(Goal::parse_lenient)
}

// ============================================================================
// Calculator Requests
// ============================================================================

/// Daily plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub profile: ProfileInput,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// BMI request (metric)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// BMI response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub value: f64,
    pub category: String,
    pub healthy_weight_min_kg: f64,
    pub healthy_weight_max_kg: f64,
}

impl From<BmiResult> for BmiResponse {
    fn from(result: BmiResult) -> Self {
        Self {
            value: result.value,
            category: result.category.description().to_string(),
            healthy_weight_min_kg: result.healthy_weight_range_kg.0,
            healthy_weight_max_kg: result.healthy_weight_range_kg.1,
        }
    }
}

/// Water target request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTargetRequest {
    pub weight_kg: f64,
    pub age_years: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
}

/// Water target response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTargetResponse {
    pub target_ml: i32,
    pub target_cups: f64,
}

impl WaterTargetResponse {
    pub fn new(target_ml: i32) -> Self {
        let cups = VolumeUnit::Cups.from_ml(target_ml as f64);
        Self {
            target_ml,
            target_cups: (cups * 10.0).round() / 10.0,
        }
    }
}

// ============================================================================
// History Types
// ============================================================================

/// Log a drink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWaterRequest {
    pub date: NaiveDate,
    pub amount_ml: i32,
}

/// Optional daily target when reading a day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaterDayQuery {
    #[serde(default)]
    pub target_ml: Option<i32>,
}

/// Water intake for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterDayResponse {
    pub date: NaiveDate,
    pub consumed_ml: i64,
    pub entry_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<WaterProgress>,
}

impl WaterDayResponse {
    pub fn new(date: NaiveDate, day: WaterIntakeDay, target_ml: Option<i32>) -> Self {
        Self {
            date,
            consumed_ml: day.consumed_ml,
            entry_count: day.entry_count,
            progress: target_ml.map(|t| WaterProgress::new(day.consumed_ml, t)),
        }
    }
}

/// Date range filter; both ends inclusive and optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Water intake history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterHistoryResponse {
    pub days: Vec<WaterDayResponse>,
}

/// Create or replace a calendar note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertNoteRequest {
    pub text: String,
}

/// Calendar note response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub date: NaiveDate,
    pub text: String,
}

/// Calendar notes listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesResponse {
    pub notes: Vec<NoteResponse>,
}
