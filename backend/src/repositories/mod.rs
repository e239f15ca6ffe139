//! Data access layer
//!
//! Repositories hide how user history is stored from the services.

pub mod history;

pub use history::{HistoryRepository, InMemoryHistoryRepository};
