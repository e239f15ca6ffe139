//! Unit conversion for profile input and hydration display
//!
//! The calculator works in metric (cm, kg, ml). Imperial values are
//! converted at the boundary, before a [`BiometricProfile`](crate::BiometricProfile)
//! is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KG_PER_LB: f64 = 0.453_592_37;
const CM_PER_INCH: f64 = 2.54;
const ML_PER_FL_OZ: f64 = 29.573_529_562_5;
const ML_PER_CUP: f64 = 236.588_236_5;

// ============================================================================
// Weight
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * CM_PER_INCH,
        }
    }

    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm / CM_PER_INCH,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Volume
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Ml,
    FlOz,
    Cups,
}

impl VolumeUnit {
    pub fn to_ml(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Ml => value,
            VolumeUnit::FlOz => value * ML_PER_FL_OZ,
            VolumeUnit::Cups => value * ML_PER_CUP,
        }
    }

    pub fn from_ml(&self, ml: f64) -> f64 {
        match self {
            VolumeUnit::Ml => ml,
            VolumeUnit::FlOz => ml / ML_PER_FL_OZ,
            VolumeUnit::Cups => ml / ML_PER_CUP,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::FlOz => "fl oz",
            VolumeUnit::Cups => "cups",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for VolumeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" => Ok(VolumeUnit::Ml),
            "fl_oz" | "floz" | "fl oz" | "oz" => Ok(VolumeUnit::FlOz),
            "cup" | "cups" => Ok(VolumeUnit::Cups),
            _ => Err(format!("Unknown volume unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_conversions() {
        assert!((WeightUnit::Lbs.to_kg(100.0) - 45.359237).abs() < 1e-9);
        assert!((HeightUnit::Inches.to_cm(72.0) - 182.88).abs() < 1e-9);
        assert!((VolumeUnit::Cups.from_ml(2365.882365) - 10.0).abs() < 1e-9);
        assert_eq!(WeightUnit::Kg.to_kg(70.0), 70.0);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("IN".parse::<HeightUnit>().unwrap(), HeightUnit::Inches);
        assert_eq!("fl oz".parse::<VolumeUnit>().unwrap(), VolumeUnit::FlOz);
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: converting to metric and back preserves the value
        #[test]
        fn prop_weight_roundtrip(lbs in 5.0f64..1100.0) {
            let back = WeightUnit::Lbs.from_kg(WeightUnit::Lbs.to_kg(lbs));
            prop_assert!((lbs - back).abs() < 1e-9);
        }
    }
}
