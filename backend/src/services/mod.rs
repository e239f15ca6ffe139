//! Business logic services
//!
//! Services validate API input and coordinate between the shared
//! calculator and the history repository.

pub mod calculator;
pub mod history;

pub use calculator::CalculatorService;
pub use history::HistoryService;
