// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise ledger.
//!
//! Handles the core workflow:
//! 1. Resolve the owning user via the directory
//! 2. Record exercise entries (defaulting the date to "now")
//! 3. Build the windowed/capped query for log retrieval
//! 4. Project matches into the calendar-string log shape

use crate::db::{Db, ExerciseFilter};
use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::services::UserDirectory;
use crate::time_utils::{format_day_string, format_utc_rfc3339};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Result cap applied when the caller supplies no usable limit.
const DEFAULT_LOG_LIMIT: u32 = 500;

/// Raw log-query parameters as received from the caller.
#[derive(Debug, Default, Clone)]
pub struct LogWindow {
    /// Inclusive lower calendar-day bound (`YYYY-MM-DD`)
    pub from: Option<String>,
    /// Inclusive upper calendar-day bound (`YYYY-MM-DD`)
    pub to: Option<String>,
    /// Result cap as caller-supplied text
    pub limit: Option<String>,
}

/// A newly recorded exercise together with its owning user, for
/// response shaping.
#[derive(Debug, Clone)]
pub struct RecordedExercise {
    pub user: User,
    pub entry: LogEntry,
}

/// One projected log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: f64,
    /// Calendar-day string, e.g. `Wed Jan 01 2020`
    pub date: String,
}

/// A user's log with its entry count.
#[derive(Debug, Clone)]
pub struct LogSummary {
    pub user: User,
    pub log: Vec<LogEntry>,
}

/// Manages exercise entries and the filtered log query.
#[derive(Clone)]
pub struct ExerciseLedger {
    db: Db,
    directory: UserDirectory,
}

impl ExerciseLedger {
    pub fn new(db: Db, directory: UserDirectory) -> Self {
        Self { db, directory }
    }

    /// Record an exercise for a user.
    ///
    /// The user must exist (soft referential check, the store itself
    /// does not enforce it). `date_text` absent or empty means "now";
    /// otherwise it must be a `YYYY-MM-DD` calendar date, stored at
    /// that day's midnight UTC.
    pub async fn append_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: f64,
        date_text: Option<&str>,
    ) -> Result<RecordedExercise> {
        let user = self
            .directory
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let date = match date_text.filter(|t| !t.trim().is_empty()) {
            Some(text) => parse_day(text)?.and_time(NaiveTime::MIN).and_utc(),
            None => Utc::now(),
        };

        let exercise = self
            .db
            .create_exercise(user_id, description, duration, format_utc_rfc3339(date))
            .await?;

        tracing::info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            duration,
            "Exercise recorded"
        );

        Ok(RecordedExercise {
            user,
            entry: project_entry(exercise)?,
        })
    }

    /// Query a user's exercise log within an optional date window,
    /// capped at the coerced limit, projected to log entries. Ordering
    /// is store-native; no explicit sort is applied.
    pub async fn query_log(&self, user_id: &str, window: &LogWindow) -> Result<Vec<LogEntry>> {
        let filter = build_filter(user_id, window)?;

        tracing::debug!(
            user_id,
            date_min = ?filter.date_min,
            date_before = ?filter.date_before,
            limit = filter.limit,
            "Querying exercise log"
        );

        let exercises = self.db.query_exercises(&filter).await?;
        exercises.into_iter().map(project_entry).collect()
    }

    /// Compose user lookup and log query into the summary payload.
    /// A user with zero exercises yields an empty log, not an error.
    pub async fn log_summary(&self, user_id: &str, window: &LogWindow) -> Result<LogSummary> {
        let user = self
            .directory
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let log = self.query_log(user_id, window).await?;

        Ok(LogSummary { user, log })
    }
}

/// Project a stored exercise into its log-entry shape.
fn project_entry(exercise: Exercise) -> Result<LogEntry> {
    let date = DateTime::parse_from_rfc3339(&exercise.date)
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Invalid stored date on exercise {}: {}",
                exercise.id,
                e
            ))
        })?
        .with_timezone(&Utc);

    Ok(LogEntry {
        description: exercise.description,
        duration: exercise.duration,
        date: format_day_string(date),
    })
}

/// Build the store filter from the raw window parameters.
///
/// `from` becomes an inclusive bound at that day's midnight; `to`
/// becomes an exclusive bound at the following midnight, making the
/// whole `to` day inclusive. A missing or zero `limit` falls back to
/// [`DEFAULT_LOG_LIMIT`]; non-numeric text is rejected rather than
/// silently lifting the cap.
fn build_filter(user_id: &str, window: &LogWindow) -> Result<ExerciseFilter> {
    let date_min = window
        .from
        .as_deref()
        .map(|text| parse_day(text).map(day_floor))
        .transpose()?;

    let date_before = window
        .to
        .as_deref()
        .map(|text| {
            let day = parse_day(text)?;
            let next = day.checked_add_days(Days::new(1)).ok_or_else(|| {
                AppError::BadRequest(format!("'to' date out of range: {}", text))
            })?;
            Ok::<_, AppError>(day_floor(next))
        })
        .transpose()?;

    Ok(ExerciseFilter {
        user_id: user_id.to_string(),
        date_min,
        date_before,
        limit: parse_limit(window.limit.as_deref())?,
    })
}

/// A calendar day's midnight UTC in the stored string format.
fn day_floor(day: NaiveDate) -> String {
    format_utc_rfc3339(day.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a caller-supplied `YYYY-MM-DD` calendar date.
fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date, expected YYYY-MM-DD: {}", text)))
}

/// Coerce the caller-supplied limit. Absent or zero falls back to the
/// default cap; anything that is not a non-negative integer is an
/// error.
fn parse_limit(limit: Option<&str>) -> Result<u32> {
    match limit {
        None => Ok(DEFAULT_LOG_LIMIT),
        Some(text) => {
            let parsed = text.trim().parse::<u32>().map_err(|_| {
                AppError::BadRequest(format!("Invalid 'limit' parameter: {}", text))
            })?;
            if parsed == 0 {
                Ok(DEFAULT_LOG_LIMIT)
            } else {
                Ok(parsed)
            }
        }
    }
}
