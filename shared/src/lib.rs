//! Nutriplan Shared Library
//!
//! The nutrition and biometric calculator plus the small value types shared
//! by the backend and the WASM bindings. Everything here is pure and
//! synchronous.

pub mod errors;
pub mod health_metrics;
pub mod history;
pub mod labels;
pub mod nutrients;
pub mod plan;
pub mod profile;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use labels::{activity_level_label, goal_label, LabelCatalog, INVALID_LABEL};
pub use nutrients::*;
pub use plan::DailyPlan;
pub use profile::*;
pub use units::*;
