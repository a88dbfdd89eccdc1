// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The exercise-tracker API surface.

use crate::error::Result;
use crate::services::ledger::{LogEntry, LogWindow};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(create_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateUserForm {
    /// Missing field is treated as an empty username, matching the
    /// no-validation contract of the endpoint.
    #[serde(default)]
    username: String,
}

/// User response.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Create a user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<UserResponse>> {
    let user = state.directory.create_user(&form.username).await?;

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.directory.list_users().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                username: u.username,
            })
            .collect(),
    ))
}

// ─── Exercises ───────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateExerciseForm {
    #[serde(default)]
    description: String,
    /// Minutes; must parse as a number but is otherwise unconstrained
    duration: f64,
    /// Optional `YYYY-MM-DD`; empty string means "now"
    date: Option<String>,
}

/// Response for a newly recorded exercise: the exercise fields merged
/// with the owning user's id and username.
#[derive(Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: f64,
    /// Calendar-day string, e.g. `Wed Jan 01 2020`
    pub date: String,
}

/// Record an exercise against a user.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Form(form): Form<CreateExerciseForm>,
) -> Result<Json<ExerciseResponse>> {
    let recorded = state
        .ledger
        .append_exercise(
            &user_id,
            &form.description,
            form.duration,
            form.date.as_deref(),
        )
        .await?;

    Ok(Json(ExerciseResponse {
        id: recorded.user.id,
        username: recorded.user.username,
        description: recorded.entry.description,
        duration: recorded.entry.duration,
        date: recorded.entry.date,
    }))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    /// Inclusive lower calendar-day bound (`YYYY-MM-DD`)
    from: Option<String>,
    /// Inclusive upper calendar-day bound (`YYYY-MM-DD`)
    to: Option<String>,
    /// Result cap; absent or `0` falls back to the default of 500.
    /// Kept as text so the ledger owns the coercion rules.
    limit: Option<String>,
}

/// Log summary response.
#[derive(Serialize)]
pub struct LogResponse {
    pub username: String,
    pub id: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Get a user's exercise log, optionally windowed and capped.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogResponse>> {
    let window = LogWindow {
        from: params.from,
        to: params.to,
        limit: params.limit,
    };

    let summary = state.ledger.log_summary(&user_id, &window).await?;

    Ok(Json(LogResponse {
        username: summary.user.username,
        id: summary.user.id,
        count: summary.log.len(),
        log: summary.log,
    }))
}
