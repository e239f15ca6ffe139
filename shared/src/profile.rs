//! Biometric profile and the closed enums the calculator branches on
//!
//! The app historically carried two enum shapes (a 3-level and a 7-level
//! activity scale, a 3-level and a 5-level goal). Only the 3-level sets are
//! modelled here; the finer names are accepted as parse aliases and folded
//! onto the nearest canonical value.

use crate::validation::{validate_age_years, validate_height_cm, validate_weight_kg, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Gender used to pick the sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a free-form value, returning `None` for anything unrecognized
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "non_binary" | "nonbinary" | "unspecified" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE and hydration scaling
///
/// Ordered `Low < Medium < High`; calorie and water targets never decrease
/// along that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    #[serde(alias = "LOW")]
    Low,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "MEDIUM")]
    Medium,
    /// Hard exercise most days or a physical job
    #[serde(alias = "HIGH")]
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];

    /// Multiplier applied to BMR to get TDEE
    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.55,
            ActivityLevel::High => 1.9,
        }
    }

    /// Multiplier applied to the base water recommendation
    pub fn hydration_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.0,
            ActivityLevel::Medium => 1.1,
            ActivityLevel::High => 1.2,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low (little or no exercise)",
            ActivityLevel::Medium => "Medium (exercise 3-5 days/week)",
            ActivityLevel::High => "High (hard exercise or physical job)",
        }
    }

    /// Parse a free-form value, falling back to [`ActivityLevel::Low`]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "bmr" | "sedentary" | "light" | "lightly_active" => Ok(ActivityLevel::Low),
            "medium" | "moderate" | "moderately_active" | "active" => Ok(ActivityLevel::Medium),
            "high" | "very_active" | "extra_active" => Ok(ActivityLevel::High),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// Goal
// ============================================================================

/// Dietary objective used to adjust calories and macro ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[serde(alias = "WEIGHT_LOSS")]
    WeightLoss,
    #[serde(alias = "MUSCLE_GAIN")]
    MuscleGain,
    #[default]
    #[serde(alias = "MAINTENANCE")]
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance];

    /// Daily kcal added to maintenance calories
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::WeightLoss => -500,
            Goal::MuscleGain => 500,
            Goal::Maintenance => 0,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::MuscleGain => "Muscle gain",
            Goal::Maintenance => "Maintenance",
        }
    }

    /// Parse a free-form value, falling back to [`Goal::Maintenance`]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight_loss" | "mild_weight_loss" | "extreme_weight_loss" | "lose" => {
                Ok(Goal::WeightLoss)
            }
            "muscle_gain" | "weight_gain" | "gain" => Ok(Goal::MuscleGain),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

// ============================================================================
// Biometric Profile
// ============================================================================

/// Biometric inputs for every calculation, stored in SI units
///
/// Supplied fresh on each call; the calculator never keeps a copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age_years: u32,
    /// `None` means the profile has no resolved gender
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl BiometricProfile {
    pub fn new(height_cm: f64, weight_kg: f64, age_years: u32, gender: Option<Gender>) -> Self {
        Self {
            height_cm,
            weight_kg,
            age_years,
            gender,
        }
    }

    /// Check every field against the accepted input ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_height_cm(self.height_cm).map_err(|m| ValidationError::new("height_cm", &m))?;
        validate_weight_kg(self.weight_kg).map_err(|m| ValidationError::new("weight_kg", &m))?;
        validate_age_years(self.age_years).map_err(|m| ValidationError::new("age_years", &m))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("low", ActivityLevel::Low)]
    #[case("LOW", ActivityLevel::Low)]
    #[case("sedentary", ActivityLevel::Low)]
    #[case("BMR", ActivityLevel::Low)]
    #[case("LIGHT", ActivityLevel::Low)]
    #[case("MODERATE", ActivityLevel::Medium)]
    #[case("ACTIVE", ActivityLevel::Medium)]
    #[case("medium", ActivityLevel::Medium)]
    #[case("VERY_ACTIVE", ActivityLevel::High)]
    #[case("EXTRA_ACTIVE", ActivityLevel::High)]
    #[case("high", ActivityLevel::High)]
    fn test_activity_level_parsing(#[case] input: &str, #[case] expected: ActivityLevel) {
        assert_eq!(input.parse::<ActivityLevel>().unwrap(), expected);
    }

    #[rstest]
    #[case("WEIGHT_LOSS", Goal::WeightLoss)]
    #[case("MILD_WEIGHT_LOSS", Goal::WeightLoss)]
    #[case("EXTREME_WEIGHT_LOSS", Goal::WeightLoss)]
    #[case("muscle_gain", Goal::MuscleGain)]
    #[case("Maintenance", Goal::Maintenance)]
    fn test_goal_parsing(#[case] input: &str, #[case] expected: Goal) {
        assert_eq!(input.parse::<Goal>().unwrap(), expected);
    }

    #[test]
    fn test_lenient_parsing_falls_back_to_defaults() {
        assert_eq!(ActivityLevel::parse_lenient("couch"), ActivityLevel::Low);
        assert_eq!(ActivityLevel::parse_lenient(""), ActivityLevel::Low);
        assert_eq!(Goal::parse_lenient("bulk_forever"), Goal::Maintenance);
        assert_eq!(Gender::parse_lenient("unknown"), None);
        assert_eq!(Gender::parse_lenient("Female"), Some(Gender::Female));
    }

    #[test]
    fn test_activity_ordering() {
        assert!(ActivityLevel::Low < ActivityLevel::Medium);
        assert!(ActivityLevel::Medium < ActivityLevel::High);
    }

    #[test]
    fn test_serde_accepts_uppercase_aliases() {
        let level: ActivityLevel = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(level, ActivityLevel::High);
        let goal: Goal = serde_json::from_str("\"WEIGHT_LOSS\"").unwrap();
        assert_eq!(goal, Goal::WeightLoss);
        assert_eq!(serde_json::to_string(&Goal::MuscleGain).unwrap(), "\"muscle_gain\"");
    }

    #[test]
    fn test_profile_without_gender_deserializes() {
        let profile: BiometricProfile =
            serde_json::from_str(r#"{"height_cm":170.0,"weight_kg":65.0,"age_years":40}"#).unwrap();
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_profile_validation() {
        assert!(BiometricProfile::new(180.0, 75.0, 30, Some(Gender::Male)).validate().is_ok());

        let err = BiometricProfile::new(20.0, 75.0, 30, None).validate().unwrap_err();
        assert_eq!(err.field, "height_cm");

        let err = BiometricProfile::new(180.0, 0.0, 30, None).validate().unwrap_err();
        assert_eq!(err.field, "weight_kg");
    }
}
