//! Input validation functions
//!
//! Range checks for biometric and tracking input. The calculator itself only
//! rejects non-positive BMI inputs; these stricter checks run at the service
//! boundary before values reach it.

use thiserror::Error;

/// Validate height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
/// Valid range: 2-500 kg, low enough for infant profiles
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 2.0 {
        return Err("Weight must be at least 2 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: u32) -> Result<(), String> {
    if age_years > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate a single water intake entry (in ml)
pub fn validate_water_amount_ml(amount_ml: i32) -> Result<(), String> {
    if amount_ml <= 0 {
        return Err("Amount must be greater than 0".to_string());
    }
    if amount_ml > 10000 {
        return Err("Amount cannot exceed 10000ml".to_string());
    }
    Ok(())
}

/// Validate a calendar note body
pub fn validate_note_text(text: &str, max_length: usize) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Note cannot be empty".to_string());
    }
    if text.chars().count() > max_length {
        return Err(format!("Note cannot exceed {} characters", max_length));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" | "weight" => "Current Weight",
        "height_cm" | "height" => "Height",
        "age_years" => "Age",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "amount_ml" => "Water Amount",
        "text" => "Note",
        "date" => "Date",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
