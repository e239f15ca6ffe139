//! History service
//!
//! Provides business logic for per-user history:
//! - Water intake logging and daily progress
//! - Calendar notes (one per day, last write wins)
//! - Bounded date-range queries

use crate::config::HistoryConfig;
use crate::error::ApiError;
use crate::repositories::HistoryRepository;
use chrono::{Duration, NaiveDate, Utc};
use nutriplan_shared::types::{
    DateRangeQuery, NoteResponse, NotesResponse, WaterDayResponse, WaterHistoryResponse,
};
use nutriplan_shared::validation::{validate_note_text, validate_water_amount_ml, ValidationError};
use tracing::{debug, info};
use uuid::Uuid;

/// Days covered by a range query that names neither end
const DEFAULT_RANGE_DAYS: i64 = 30;

/// History service for water intake and calendar notes
pub struct HistoryService;

impl HistoryService {
    /// Add a drink to the day's total
    pub async fn log_water(
        repo: &dyn HistoryRepository,
        user_id: Uuid,
        date: NaiveDate,
        amount_ml: i32,
        target_ml: Option<i32>,
    ) -> Result<WaterDayResponse, ApiError> {
        validate_water_amount_ml(amount_ml).map_err(|m| ValidationError::new("amount_ml", &m))?;

        let day = repo.add_water(user_id, date, amount_ml).await?;
        info!(%user_id, %date, amount_ml, total_ml = day.consumed_ml, "Logged water intake");

        Ok(WaterDayResponse::new(date, day, target_ml))
    }

    /// Water for one day; a day with nothing logged reads as zero
    pub async fn water_day(
        repo: &dyn HistoryRepository,
        user_id: Uuid,
        date: NaiveDate,
        target_ml: Option<i32>,
    ) -> Result<WaterDayResponse, ApiError> {
        let day = repo.get_water_day(user_id, date).await?.unwrap_or_default();
        Ok(WaterDayResponse::new(date, day, target_ml))
    }

    /// Logged days in the requested range, ascending
    pub async fn water_history(
        repo: &dyn HistoryRepository,
        config: &HistoryConfig,
        user_id: Uuid,
        query: &DateRangeQuery,
    ) -> Result<WaterHistoryResponse, ApiError> {
        let (start, end) = resolve_range(query, config, Utc::now().date_naive())?;
        let days = repo.get_water_range(user_id, start, end).await?;
        debug!(%user_id, %start, %end, count = days.len(), "Fetched water history");

        Ok(WaterHistoryResponse {
            days: days
                .into_iter()
                .map(|(date, day)| WaterDayResponse::new(date, day, None))
                .collect(),
        })
    }

    /// Create or replace the note for `date`
    pub async fn upsert_note(
        repo: &dyn HistoryRepository,
        config: &HistoryConfig,
        user_id: Uuid,
        date: NaiveDate,
        text: String,
    ) -> Result<NoteResponse, ApiError> {
        let text = text.trim().to_string();
        validate_note_text(&text, config.max_note_length)
            .map_err(|m| ValidationError::new("text", &m))?;

        let replaced = repo.upsert_note(user_id, date, text.clone()).await?;
        info!(%user_id, %date, replaced = replaced.is_some(), "Saved calendar note");

        Ok(NoteResponse { date, text })
    }

    pub async fn get_note(
        repo: &dyn HistoryRepository,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<NoteResponse, ApiError> {
        let note = repo
            .get_note(user_id, date)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No note for {date}")))?;
        Ok(NoteResponse { date, text: note.text })
    }

    pub async fn delete_note(
        repo: &dyn HistoryRepository,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<(), ApiError> {
        if !repo.delete_note(user_id, date).await? {
            return Err(ApiError::NotFound(format!("No note for {date}")));
        }
        info!(%user_id, %date, "Deleted calendar note");
        Ok(())
    }

    /// Notes in the requested range, ascending
    pub async fn list_notes(
        repo: &dyn HistoryRepository,
        config: &HistoryConfig,
        user_id: Uuid,
        query: &DateRangeQuery,
    ) -> Result<NotesResponse, ApiError> {
        let (start, end) = resolve_range(query, config, Utc::now().date_naive())?;
        let notes = repo.get_notes_range(user_id, start, end).await?;

        Ok(NotesResponse {
            notes: notes
                .into_iter()
                .map(|(date, note)| NoteResponse { date, text: note.text })
                .collect(),
        })
    }
}

/// Fill in missing range ends and enforce ordering and maximum span
fn resolve_range(
    query: &DateRangeQuery,
    config: &HistoryConfig,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let window = Duration::days(DEFAULT_RANGE_DAYS - 1);
    let (start, end) = match (query.start, query.end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, shift(start.checked_add_signed(window), "start")?),
        (None, Some(end)) => (shift(end.checked_sub_signed(window), "end")?, end),
        (None, None) => (shift(today.checked_sub_signed(window), "end")?, today),
    };

    if start > end {
        return Err(ApiError::InvalidField {
            field: "start".to_string(),
            message: "Start date must not be after end date".to_string(),
        });
    }

    let span_days = (end - start).num_days() + 1;
    if span_days > config.max_query_days {
        return Err(ApiError::InvalidField {
            field: "end".to_string(),
            message: format!("Date range cannot exceed {} days", config.max_query_days),
        });
    }

    Ok((start, end))
}

/// A default window edge that falls outside the calendar
fn shift(date: Option<NaiveDate>, field: &str) -> Result<NaiveDate, ApiError> {
    date.ok_or_else(|| ApiError::InvalidField {
        field: field.to_string(),
        message: "Date is too close to the end of the supported calendar".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryHistoryRepository;
    use proptest::prelude::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRangeQuery {
        DateRangeQuery { start, end }
    }

    #[test]
    fn test_resolve_range_defaults_to_last_30_days() {
        let config = HistoryConfig::default();
        let (start, end) = resolve_range(&range(None, None), &config, date(6, 30)).unwrap();
        assert_eq!(start, date(6, 1));
        assert_eq!(end, date(6, 30));
    }

    #[test]
    fn test_resolve_range_open_ends() {
        let config = HistoryConfig::default();
        let (_, end) = resolve_range(&range(Some(date(6, 1)), None), &config, date(1, 1)).unwrap();
        assert_eq!(end, date(6, 30));
        let (start, _) = resolve_range(&range(None, Some(date(6, 30))), &config, date(1, 1)).unwrap();
        assert_eq!(start, date(6, 1));
    }

    #[test]
    fn test_resolve_range_open_end_at_calendar_edge() {
        let config = HistoryConfig::default();

        let err = resolve_range(&range(Some(NaiveDate::MAX), None), &config, date(1, 1)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { ref field, .. } if field == "start"));

        let err = resolve_range(&range(None, Some(NaiveDate::MIN)), &config, date(1, 1)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { ref field, .. } if field == "end"));

        let (start, end) =
            resolve_range(&range(Some(NaiveDate::MAX), Some(NaiveDate::MAX)), &config, date(1, 1)).unwrap();
        assert_eq!(start, end);
    }

    #[test]
    fn test_resolve_range_rejects_inverted() {
        let config = HistoryConfig::default();
        let err = resolve_range(&range(Some(date(6, 2)), Some(date(6, 1))), &config, date(1, 1)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { ref field, .. } if field == "start"));
    }

    #[test]
    fn test_resolve_range_rejects_too_wide() {
        let config = HistoryConfig {
            max_note_length: 100,
            max_query_days: 7,
        };
        assert!(resolve_range(&range(Some(date(6, 1)), Some(date(6, 7))), &config, date(1, 1)).is_ok());
        assert!(resolve_range(&range(Some(date(6, 1)), Some(date(6, 8))), &config, date(1, 1)).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Resolved ranges are ordered and never wider than the configured maximum
        #[test]
        fn prop_resolved_range_is_bounded(
            offset in -400i64..400,
            span in 0i64..400,
            max_days in 1i64..400,
        ) {
            let config = HistoryConfig { max_note_length: 100, max_query_days: max_days };
            let start = date(6, 15) + Duration::days(offset);
            let end = start + Duration::days(span);

            match resolve_range(&range(Some(start), Some(end)), &config, date(1, 1)) {
                Ok((s, e)) => {
                    prop_assert!(s <= e);
                    prop_assert!((e - s).num_days() + 1 <= max_days);
                }
                Err(_) => prop_assert!(span + 1 > max_days),
            }
        }
    }

    #[tokio::test]
    async fn test_log_water_validates_amount() {
        let repo = InMemoryHistoryRepository::new();
        let user = Uuid::new_v4();

        assert!(HistoryService::log_water(&repo, user, date(6, 1), 0, None).await.is_err());
        assert!(HistoryService::log_water(&repo, user, date(6, 1), 10_001, None).await.is_err());

        let day = HistoryService::log_water(&repo, user, date(6, 1), 500, Some(2000))
            .await
            .unwrap();
        assert_eq!(day.consumed_ml, 500);
        assert!((day.progress.unwrap().percent - 25.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_water_day_without_entries_is_zero() {
        let repo = InMemoryHistoryRepository::new();
        let day = HistoryService::water_day(&repo, Uuid::new_v4(), date(6, 1), None)
            .await
            .unwrap();
        assert_eq!(day.consumed_ml, 0);
        assert_eq!(day.entry_count, 0);
        assert!(day.progress.is_none());
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let repo = InMemoryHistoryRepository::new();
        let config = HistoryConfig::default();
        let user = Uuid::new_v4();

        HistoryService::upsert_note(&repo, &config, user, date(6, 1), "  leg day ".into())
            .await
            .unwrap();
        let note = HistoryService::get_note(&repo, user, date(6, 1)).await.unwrap();
        assert_eq!(note.text, "leg day");

        HistoryService::delete_note(&repo, user, date(6, 1)).await.unwrap();
        let err = HistoryService::get_note(&repo, user, date(6, 1)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(HistoryService::delete_note(&repo, user, date(6, 1)).await.is_err());
    }

    #[tokio::test]
    async fn test_note_length_limit() {
        let repo = InMemoryHistoryRepository::new();
        let config = HistoryConfig {
            max_note_length: 5,
            max_query_days: 366,
        };
        let result =
            HistoryService::upsert_note(&repo, &config, Uuid::new_v4(), date(6, 1), "too long".into()).await;
        assert!(matches!(result, Err(ApiError::InvalidField { .. })));
    }
}
