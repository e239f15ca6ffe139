//! Macro and micronutrient targets
//!
//! Macro targets split the calorie target by a goal-specific ratio and
//! convert each share to grams. Micro targets are flat recommended daily
//! amounts looked up by age bracket; they do not depend on calories.

use crate::health_metrics::estimate_calorie_target;
use crate::profile::{ActivityLevel, BiometricProfile, Goal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Energy density of protein (kcal/g)
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// Energy density of carbohydrate (kcal/g)
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ============================================================================
// Macronutrients
// ============================================================================

/// Share of calories assigned to each macronutrient, summing to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatio {
    /// Ratio table keyed by goal
    pub fn for_goal(goal: Option<Goal>) -> Self {
        match goal.unwrap_or_default() {
            Goal::WeightLoss => Self {
                protein: 0.4,
                carbs: 0.4,
                fat: 0.2,
            },
            Goal::MuscleGain | Goal::Maintenance => Self {
                protein: 0.3,
                carbs: 0.5,
                fat: 0.2,
            },
        }
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_grams: i32,
    pub carbs_grams: i32,
    pub fats_grams: i32,
}

impl MacroTargets {
    /// Split a calorie target by ratio, rounding each macro independently
    ///
    /// Rounding is not redistributed, so [`MacroTargets::kcal`] can differ
    /// from `calories` by up to 8.5 kcal (0.5 g of each macro).
    pub fn from_calories(calories: i32, ratio: MacroRatio) -> Self {
        let kcal = calories as f64;
        Self {
            protein_grams: (kcal * ratio.protein / PROTEIN_KCAL_PER_GRAM).round() as i32,
            carbs_grams: (kcal * ratio.carbs / CARBS_KCAL_PER_GRAM).round() as i32,
            fats_grams: (kcal * ratio.fat / FAT_KCAL_PER_GRAM).round() as i32,
        }
    }

    /// Energy of these grams, reconverted to kcal
    pub fn kcal(&self) -> i32 {
        self.protein_grams * PROTEIN_KCAL_PER_GRAM as i32
            + self.carbs_grams * CARBS_KCAL_PER_GRAM as i32
            + self.fats_grams * FAT_KCAL_PER_GRAM as i32
    }
}

/// Protein/carb/fat gram targets for a profile
///
/// `None` when the calorie estimate has no value.
pub fn estimate_macro_targets(
    profile: &BiometricProfile,
    activity_level: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Option<MacroTargets> {
    let calories = estimate_calorie_target(profile, activity_level, goal)?;
    Some(MacroTargets::from_calories(calories, MacroRatio::for_goal(goal)))
}

// ============================================================================
// Micronutrients
// ============================================================================

/// Unit of a micronutrient amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Mg,
    Mcg,
}

impl MassUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            MassUnit::Mg => "mg",
            MassUnit::Mcg => "mcg",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Tracked vitamins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vitamin {
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Thiamin,
    Riboflavin,
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
}

impl Vitamin {
    pub const ALL: [Vitamin; 11] = [
        Vitamin::VitaminA,
        Vitamin::VitaminC,
        Vitamin::VitaminD,
        Vitamin::VitaminE,
        Vitamin::VitaminK,
        Vitamin::Thiamin,
        Vitamin::Riboflavin,
        Vitamin::Niacin,
        Vitamin::VitaminB6,
        Vitamin::Folate,
        Vitamin::VitaminB12,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Vitamin::VitaminA => "Vitamin A",
            Vitamin::VitaminC => "Vitamin C",
            Vitamin::VitaminD => "Vitamin D",
            Vitamin::VitaminE => "Vitamin E",
            Vitamin::VitaminK => "Vitamin K",
            Vitamin::Thiamin => "Thiamin (B1)",
            Vitamin::Riboflavin => "Riboflavin (B2)",
            Vitamin::Niacin => "Niacin (B3)",
            Vitamin::VitaminB6 => "Vitamin B6",
            Vitamin::Folate => "Folate",
            Vitamin::VitaminB12 => "Vitamin B12",
        }
    }

    pub fn unit(&self) -> MassUnit {
        match self {
            Vitamin::VitaminA
            | Vitamin::VitaminD
            | Vitamin::VitaminK
            | Vitamin::Folate
            | Vitamin::VitaminB12 => MassUnit::Mcg,
            _ => MassUnit::Mg,
        }
    }
}

/// Tracked minerals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mineral {
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Sodium,
    Zinc,
}

impl Mineral {
    pub const ALL: [Mineral; 7] = [
        Mineral::Calcium,
        Mineral::Iron,
        Mineral::Magnesium,
        Mineral::Phosphorus,
        Mineral::Potassium,
        Mineral::Sodium,
        Mineral::Zinc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mineral::Calcium => "Calcium",
            Mineral::Iron => "Iron",
            Mineral::Magnesium => "Magnesium",
            Mineral::Phosphorus => "Phosphorus",
            Mineral::Potassium => "Potassium",
            Mineral::Sodium => "Sodium",
            Mineral::Zinc => "Zinc",
        }
    }

    /// All minerals are tracked in mg
    pub fn unit(&self) -> MassUnit {
        MassUnit::Mg
    }
}

/// Age brackets for the micronutrient tables
///
/// Lower bound inclusive, upper bound exclusive; `Adult` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// [0, 4)
    Toddler,
    /// [4, 9)
    Child,
    /// [9, 19)
    Adolescent,
    /// [19, ∞)
    Adult,
}

impl AgeBracket {
    pub fn for_age(age_years: u32) -> Self {
        match age_years {
            0..=3 => AgeBracket::Toddler,
            4..=8 => AgeBracket::Child,
            9..=18 => AgeBracket::Adolescent,
            _ => AgeBracket::Adult,
        }
    }

    /// Vitamin amounts in [`Vitamin::ALL`] order
    fn vitamin_table(&self) -> [f64; 11] {
        //       A      C     D     E     K      B1   B2   B3    B6   folate B12
        match self {
            AgeBracket::Toddler => [300.0, 15.0, 15.0, 6.0, 30.0, 0.5, 0.5, 6.0, 0.5, 150.0, 0.9],
            AgeBracket::Child => [400.0, 25.0, 15.0, 7.0, 55.0, 0.6, 0.6, 8.0, 0.6, 200.0, 1.2],
            AgeBracket::Adolescent => [600.0, 45.0, 15.0, 11.0, 60.0, 0.9, 0.9, 12.0, 1.0, 300.0, 1.8],
            AgeBracket::Adult => [900.0, 90.0, 15.0, 15.0, 120.0, 1.2, 1.3, 16.0, 1.3, 400.0, 2.4],
        }
    }

    /// Mineral amounts in [`Mineral::ALL`] order
    fn mineral_table(&self) -> [f64; 7] {
        //       Ca      Fe    Mg     P       K       Na      Zn
        match self {
            AgeBracket::Toddler => [700.0, 7.0, 80.0, 460.0, 2000.0, 800.0, 3.0],
            AgeBracket::Child => [1000.0, 10.0, 130.0, 500.0, 2300.0, 1000.0, 5.0],
            AgeBracket::Adolescent => [1300.0, 8.0, 240.0, 1250.0, 2500.0, 1200.0, 8.0],
            AgeBracket::Adult => [1000.0, 8.0, 420.0, 700.0, 3400.0, 1500.0, 11.0],
        }
    }
}

/// Recommended daily vitamin and mineral amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroTargets {
    pub vitamins: BTreeMap<Vitamin, f64>,
    pub minerals: BTreeMap<Mineral, f64>,
}

impl MicroTargets {
    /// Table for an age bracket
    pub fn for_bracket(bracket: AgeBracket) -> Self {
        Self {
            vitamins: Vitamin::ALL.into_iter().zip(bracket.vitamin_table()).collect(),
            minerals: Mineral::ALL.into_iter().zip(bracket.mineral_table()).collect(),
        }
    }

    pub fn vitamin(&self, vitamin: Vitamin) -> Option<f64> {
        self.vitamins.get(&vitamin).copied()
    }

    pub fn mineral(&self, mineral: Mineral) -> Option<f64> {
        self.minerals.get(&mineral).copied()
    }
}

/// Vitamin and mineral targets for a profile
///
/// Depends only on age; activity and goal are accepted for a uniform
/// signature and the result is `None` under the same no-value guard as the
/// macro estimator.
pub fn estimate_micro_targets(
    profile: &BiometricProfile,
    activity_level: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Option<MicroTargets> {
    estimate_calorie_target(profile, activity_level, goal)?;
    Some(MicroTargets::for_bracket(AgeBracket::for_age(profile.age_years)))
}
