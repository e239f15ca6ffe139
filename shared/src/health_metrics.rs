//! Energy, BMI and hydration calculations
//!
//! Every function here is pure: the result depends only on the arguments,
//! so callers may recompute freely and from any thread.
//!
//! # Defaults
//!
//! Optional activity and goal inputs never fail. A missing activity level
//! behaves as [`ActivityLevel::Low`]; a missing goal behaves as
//! [`Goal::Maintenance`]; a missing or `Other` gender averages the male and
//! female equations.

use crate::errors::CalculationError;
use crate::profile::{ActivityLevel, BiometricProfile, Gender, Goal};
use serde::{Deserialize, Serialize};

// ============================================================================
// BMR and Calorie Target
// ============================================================================

/// Harris-Benedict (revised) BMR for men
///
/// BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
pub fn harris_benedict_male(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
}

/// Harris-Benedict (revised) BMR for women
///
/// BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn harris_benedict_female(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
}

/// Harris-Benedict BMR for an optional gender
///
/// `Other` and `None` use the mean of the two sex-specific equations. This is
/// a placeholder until a better-grounded formula is chosen.
pub fn harris_benedict_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Option<Gender>) -> f64 {
    match gender {
        Some(Gender::Male) => harris_benedict_male(weight_kg, height_cm, age_years),
        Some(Gender::Female) => harris_benedict_female(weight_kg, height_cm, age_years),
        Some(Gender::Other) | None => {
            (harris_benedict_male(weight_kg, height_cm, age_years)
                + harris_benedict_female(weight_kg, height_cm, age_years))
                / 2.0
        }
    }
}

/// Basal Metabolic Rate for a profile
pub fn estimate_bmr(profile: &BiometricProfile) -> f64 {
    harris_benedict_bmr(profile.weight_kg, profile.height_cm, profile.age_years, profile.gender)
}

/// Total Daily Energy Expenditure: BMR × activity multiplier
pub fn estimate_tdee(profile: &BiometricProfile, activity_level: Option<ActivityLevel>) -> f64 {
    estimate_bmr(profile) * activity_level.unwrap_or_default().calorie_multiplier()
}

/// Daily calorie target in kcal, rounded to the nearest integer
///
/// TDEE plus the goal adjustment (-500 for weight loss, +500 for muscle gain).
/// Returns `None` only when the profile holds non-finite numbers and the
/// arithmetic has no meaningful value.
pub fn estimate_calorie_target(
    profile: &BiometricProfile,
    activity_level: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Option<i32> {
    let maintenance = estimate_tdee(profile, activity_level);
    let target = maintenance + goal.unwrap_or_default().calorie_adjustment() as f64;
    if target.is_finite() {
        Some(target.round() as i32)
    } else {
        None
    }
}

/// Calorie breakdown for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Maintenance calories (TDEE)
    pub maintenance_kcal: f64,
    /// Goal adjustment applied on top of maintenance
    pub goal_adjustment_kcal: i32,
    /// Final rounded target
    pub target_kcal: i32,
}

/// Calorie target with its intermediate values
pub fn calculate_calorie_breakdown(
    profile: &BiometricProfile,
    activity_level: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Option<CalorieBreakdown> {
    let activity = activity_level.unwrap_or_default();
    let goal = goal.unwrap_or_default();
    let target_kcal = estimate_calorie_target(profile, Some(activity), Some(goal))?;
    let bmr = estimate_bmr(profile);

    Some(CalorieBreakdown {
        bmr,
        activity_multiplier: activity.calorie_multiplier(),
        maintenance_kcal: bmr * activity.calorie_multiplier(),
        goal_adjustment_kcal: goal.calorie_adjustment(),
        target_kcal,
    })
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, one decimal place
    pub value: f64,
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range_kg: (f64, f64),
}

/// Calculate BMI from height and weight
///
/// Formula: BMI = weight(kg) / height(m)², rounded to one decimal place.
/// Fails with [`CalculationError::InvalidInput`] unless both inputs are
/// strictly positive.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, CalculationError> {
    // Negated comparisons so NaN is rejected too
    if !(height_cm > 0.0) {
        return Err(CalculationError::invalid("height_cm", "height must be greater than 0"));
    }
    if !(weight_kg > 0.0) {
        return Err(CalculationError::invalid("weight_kg", "weight must be greater than 0"));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 10.0).round() / 10.0)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

/// Healthy weight range for a given height, from BMI 18.5-25
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, 25.0 * height_m_sq)
}

/// BMI with category and healthy range
pub fn calculate_bmi_result(height_cm: f64, weight_kg: f64) -> Result<BmiResult, CalculationError> {
    let value = calculate_bmi(height_cm, weight_kg)?;
    Ok(BmiResult {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_weight_range_kg(height_cm),
    })
}

// ============================================================================
// Hydration Calculations
// ============================================================================

/// Base water recommendation in ml per kg of body weight for an age
pub fn water_ml_per_kg(age_years: u32) -> f64 {
    if age_years <= 18 {
        40.0
    } else if age_years > 65 {
        30.0
    } else {
        35.0
    }
}

/// Gender scaling for the water recommendation
pub fn water_gender_factor(gender: Option<Gender>) -> f64 {
    match gender {
        Some(Gender::Male) => 1.1,
        Some(Gender::Female) => 0.9,
        Some(Gender::Other) | None => 1.0,
    }
}

/// Recommended daily water intake in ml
///
/// weight × ml/kg(age) × gender factor × activity factor, rounded to the
/// nearest ml.
pub fn estimate_daily_water_intake_ml(
    weight_kg: f64,
    age_years: u32,
    gender: Option<Gender>,
    activity_level: Option<ActivityLevel>,
) -> i32 {
    let base_ml = weight_kg * water_ml_per_kg(age_years);
    let adjusted = base_ml
        * water_gender_factor(gender)
        * activity_level.unwrap_or_default().hydration_multiplier();
    adjusted.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile(gender: Option<Gender>) -> BiometricProfile {
        BiometricProfile::new(180.0, 80.0, 30, gender)
    }

    // =========================================================================
    // BMR / Calorie Tests
    // =========================================================================

    #[test]
    fn test_harris_benedict_male() {
        // 88.362 + 1071.76 + 863.82 - 170.31
        let bmr = harris_benedict_male(80.0, 180.0, 30);
        assert!((bmr - 1853.632).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict_female() {
        // 447.593 + 554.82 + 511.17 - 129.9
        let bmr = harris_benedict_female(60.0, 165.0, 30);
        assert!((bmr - 1383.683).abs() < 1e-9);
    }

    #[test]
    fn test_unresolved_gender_averages_formulas() {
        let male = harris_benedict_male(80.0, 180.0, 30);
        let female = harris_benedict_female(80.0, 180.0, 30);
        let expected = (male + female) / 2.0;

        assert!((estimate_bmr(&profile(None)) - expected).abs() < 1e-9);
        assert!((estimate_bmr(&profile(Some(Gender::Other))) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_target_known_value() {
        // 1853.632 × 1.55 = 2873.1296
        let kcal = estimate_calorie_target(&profile(Some(Gender::Male)), Some(ActivityLevel::Medium), Some(Goal::Maintenance));
        assert_eq!(kcal, Some(2873));
    }

    #[test]
    fn test_calorie_target_defaults() {
        let p = profile(Some(Gender::Female));
        assert_eq!(
            estimate_calorie_target(&p, None, None),
            estimate_calorie_target(&p, Some(ActivityLevel::Low), Some(Goal::Maintenance))
        );
    }

    #[test]
    fn test_calorie_target_non_finite_profile() {
        let p = BiometricProfile::new(f64::NAN, 80.0, 30, Some(Gender::Male));
        assert_eq!(estimate_calorie_target(&p, None, None), None);
        assert!(calculate_calorie_breakdown(&p, None, None).is_none());
    }

    #[test]
    fn test_calorie_breakdown() {
        let breakdown = calculate_calorie_breakdown(
            &profile(Some(Gender::Male)),
            Some(ActivityLevel::High),
            Some(Goal::MuscleGain),
        )
        .unwrap();
        assert_eq!(breakdown.activity_multiplier, 1.9);
        assert_eq!(breakdown.goal_adjustment_kcal, 500);
        assert_eq!(
            breakdown.target_kcal,
            (breakdown.maintenance_kcal + 500.0).round() as i32
        );
    }

    fn gender_strategy() -> impl Strategy<Value = Option<Gender>> {
        prop_oneof![
            Just(None),
            Just(Some(Gender::Male)),
            Just(Some(Gender::Female)),
            Just(Some(Gender::Other)),
        ]
    }

    fn activity_strategy() -> impl Strategy<Value = Option<ActivityLevel>> {
        prop_oneof![
            Just(None),
            Just(Some(ActivityLevel::Low)),
            Just(Some(ActivityLevel::Medium)),
            Just(Some(ActivityLevel::High)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: more activity never lowers the calorie target
        #[test]
        fn prop_calories_monotonic_in_activity(
            height in 120.0f64..220.0,
            weight in 30.0f64..200.0,
            age in 0u32..100,
            gender in gender_strategy(),
        ) {
            let p = BiometricProfile::new(height, weight, age, gender);
            let low = estimate_calorie_target(&p, Some(ActivityLevel::Low), None).unwrap();
            let medium = estimate_calorie_target(&p, Some(ActivityLevel::Medium), None).unwrap();
            let high = estimate_calorie_target(&p, Some(ActivityLevel::High), None).unwrap();
            prop_assert!(low <= medium, "low {} > medium {}", low, medium);
            prop_assert!(medium <= high, "medium {} > high {}", medium, high);
        }

        /// Property: weight loss is exactly maintenance minus 500
        #[test]
        fn prop_weight_loss_is_maintenance_minus_500(
            height in 120.0f64..220.0,
            weight in 30.0f64..200.0,
            age in 0u32..100,
            gender in gender_strategy(),
            activity in activity_strategy(),
        ) {
            let p = BiometricProfile::new(height, weight, age, gender);
            let maintenance = estimate_calorie_target(&p, activity, Some(Goal::Maintenance)).unwrap();
            let loss = estimate_calorie_target(&p, activity, Some(Goal::WeightLoss)).unwrap();
            let gain = estimate_calorie_target(&p, activity, Some(Goal::MuscleGain)).unwrap();
            prop_assert_eq!(loss, maintenance - 500);
            prop_assert_eq!(gain, maintenance + 500);
        }

        /// Property: repeated calls give identical results
        #[test]
        fn prop_calorie_target_is_pure(
            height in 120.0f64..220.0,
            weight in 30.0f64..200.0,
            age in 0u32..100,
            gender in gender_strategy(),
        ) {
            let p = BiometricProfile::new(height, weight, age, gender);
            prop_assert_eq!(
                estimate_calorie_target(&p, None, None),
                estimate_calorie_target(&p, None, None)
            );
        }
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_known_value() {
        assert_eq!(calculate_bmi(180.0, 75.0).unwrap(), 23.1);
        assert_eq!(calculate_bmi(175.0, 70.0).unwrap(), 22.9);
    }

    #[rstest]
    #[case(0.0, 70.0, "height_cm")]
    #[case(-170.0, 70.0, "height_cm")]
    #[case(f64::NAN, 70.0, "height_cm")]
    #[case(170.0, 0.0, "weight_kg")]
    #[case(170.0, -1.0, "weight_kg")]
    fn test_bmi_invalid_input(#[case] height: f64, #[case] weight: f64, #[case] field: &str) {
        let err = calculate_bmi(height, weight).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidInput { .. }));
        assert_eq!(err.field(), Some(field));
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(15.0), BmiCategory::SeverelyUnderweight);
        assert_eq!(classify_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(22.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(27.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(32.0), BmiCategory::ObeseClass1);
        assert_eq!(classify_bmi(37.0), BmiCategory::ObeseClass2);
        assert_eq!(classify_bmi(42.0), BmiCategory::ObeseClass3);
    }

    #[test]
    fn test_bmi_result() {
        let result = calculate_bmi_result(180.0, 75.0).unwrap();
        assert_eq!(result.value, 23.1);
        assert_eq!(result.category, BmiCategory::Normal);
        let (min, max) = result.healthy_weight_range_kg;
        assert!((min - 59.94).abs() < 0.01);
        assert!((max - 81.0).abs() < 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI has at most one decimal place
        #[test]
        fn prop_bmi_one_decimal(weight in 20.0f64..300.0, height in 100.0f64..250.0) {
            let bmi = calculate_bmi(height, weight).unwrap();
            prop_assert!(((bmi * 10.0).round() - bmi * 10.0).abs() < 1e-6);
        }

        /// Property: non-positive height always fails
        #[test]
        fn prop_bmi_rejects_non_positive_height(height in -300.0f64..=0.0, weight in 1.0f64..300.0) {
            prop_assert!(calculate_bmi(height, weight).is_err());
        }

        /// Property: heavier weight never lowers BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            prop_assert!(calculate_bmi(height, weight2).unwrap() >= calculate_bmi(height, weight1).unwrap());
        }
    }

    // =========================================================================
    // Hydration Tests
    // =========================================================================

    #[test]
    fn test_water_known_value() {
        let ml = estimate_daily_water_intake_ml(70.0, 30, Some(Gender::Male), Some(ActivityLevel::High));
        assert_eq!(ml, 3234);
    }

    #[rstest]
    #[case(0, 40.0)]
    #[case(18, 40.0)]
    #[case(19, 35.0)]
    #[case(65, 35.0)]
    #[case(66, 30.0)]
    fn test_water_rate_by_age(#[case] age: u32, #[case] expected: f64) {
        assert_eq!(water_ml_per_kg(age), expected);
    }

    #[rstest]
    #[case(Some(Gender::Male), Some(ActivityLevel::Low), 2695)]
    #[case(Some(Gender::Female), Some(ActivityLevel::Low), 2205)]
    #[case(Some(Gender::Other), Some(ActivityLevel::Medium), 2695)]
    #[case(None, None, 2450)]
    fn test_water_factors(
        #[case] gender: Option<Gender>,
        #[case] activity: Option<ActivityLevel>,
        #[case] expected: i32,
    ) {
        assert_eq!(estimate_daily_water_intake_ml(70.0, 30, gender, activity), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: more active = at least as much water
        #[test]
        fn prop_activity_increases_water(weight in 20.0f64..200.0, age in 0u32..100) {
            let low = estimate_daily_water_intake_ml(weight, age, None, Some(ActivityLevel::Low));
            let high = estimate_daily_water_intake_ml(weight, age, None, Some(ActivityLevel::High));
            prop_assert!(high >= low);
        }
    }
}
