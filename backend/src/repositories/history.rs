//! Per-user history storage
//!
//! Water intake and calendar notes are kept per user id in date-ordered
//! logs. The in-memory implementation holds everything behind a single
//! `RwLock`; durable storage is a concern of the deployment, not this crate.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use nutriplan_shared::history::{CalendarNote, CalendarNotes, WaterIntakeDay, WaterIntakeLog};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage operations for user history
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Add a drink to the user's total for `date`
    async fn add_water(&self, user_id: Uuid, date: NaiveDate, amount_ml: i32) -> Result<WaterIntakeDay>;

    async fn get_water_day(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<WaterIntakeDay>>;

    /// Days in `[start, end]`, ascending
    async fn get_water_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, WaterIntakeDay)>>;

    /// Replace the note for `date`, returning the previous one
    async fn upsert_note(&self, user_id: Uuid, date: NaiveDate, text: String) -> Result<Option<CalendarNote>>;

    async fn get_note(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<CalendarNote>>;

    async fn delete_note(&self, user_id: Uuid, date: NaiveDate) -> Result<bool>;

    /// Notes in `[start, end]`, ascending
    async fn get_notes_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, CalendarNote)>>;

    /// Whether the store can serve requests
    async fn health_check(&self) -> Result<()>;
}

#[derive(Debug, Default)]
struct UserHistory {
    water: WaterIntakeLog,
    notes: CalendarNotes,
}

/// In-process history store
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    users: RwLock<HashMap<Uuid, UserHistory>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn add_water(&self, user_id: Uuid, date: NaiveDate, amount_ml: i32) -> Result<WaterIntakeDay> {
        let mut users = self.users.write().await;
        let history = users.entry(user_id).or_default();
        Ok(history.water.add_intake(date, amount_ml))
    }

    async fn get_water_day(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<WaterIntakeDay>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).and_then(|h| h.water.get(date).copied()))
    }

    async fn get_water_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, WaterIntakeDay)>> {
        if start > end {
            return Ok(Vec::new());
        }
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|h| h.water.range(start..=end).map(|(d, day)| (d, *day)).collect())
            .unwrap_or_default())
    }

    async fn upsert_note(&self, user_id: Uuid, date: NaiveDate, text: String) -> Result<Option<CalendarNote>> {
        let mut users = self.users.write().await;
        let history = users.entry(user_id).or_default();
        Ok(history.notes.upsert(date, text))
    }

    async fn get_note(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<CalendarNote>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).and_then(|h| h.notes.get(date).cloned()))
    }

    async fn delete_note(&self, user_id: Uuid, date: NaiveDate) -> Result<bool> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(&user_id)
            .and_then(|h| h.notes.remove(date))
            .is_some())
    }

    async fn get_notes_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, CalendarNote)>> {
        if start > end {
            return Ok(Vec::new());
        }
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|h| h.notes.range(start..=end).map(|(d, n)| (d, n.clone())).collect())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> Result<()> {
        let _users = self.users.read().await;
        Ok(())
    }
}
