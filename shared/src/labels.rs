//! Display labels for stored enum values
//!
//! Stored profile fields arrive as optional strings. An absent value maps to
//! `None`; a present value outside the enum maps to [`INVALID_LABEL`]. Callers
//! rely on the two outcomes staying distinct.

use crate::profile::{ActivityLevel, Goal};
use serde::Serialize;

/// Label returned for a value that is present but not part of the enum
pub const INVALID_LABEL: &str = "Invalid value";

/// Label for a stored goal value
pub fn goal_label(value: Option<&str>) -> Option<&'static str> {
    value.map(|v| v.parse::<Goal>().map(|g| g.label()).unwrap_or(INVALID_LABEL))
}

/// Label for a stored activity level value
pub fn activity_level_label(value: Option<&str>) -> Option<&'static str> {
    value.map(|v| {
        v.parse::<ActivityLevel>()
            .map(|a| a.label())
            .unwrap_or(INVALID_LABEL)
    })
}

/// One selectable option for a picker
#[derive(Debug, Clone, Serialize)]
pub struct LabelOption {
    pub value: String,
    pub label: &'static str,
}

/// All goal and activity options, in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct LabelCatalog {
    pub goals: Vec<LabelOption>,
    pub activity_levels: Vec<LabelOption>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self {
            goals: Goal::ALL.iter().map(|g| option(g, g.label())).collect(),
            activity_levels: ActivityLevel::ALL
                .iter()
                .map(|a| option(a, a.label()))
                .collect(),
        }
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn option<T: Serialize>(value: &T, label: &'static str) -> LabelOption {
    // Unit variants serialize to a JSON string; fall back to the label otherwise
    let value = match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => label.to_string(),
    };
    LabelOption { value, label }
}
