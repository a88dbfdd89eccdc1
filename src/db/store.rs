// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store with typed operations over two collections:
//! - Users (identity records)
//! - Exercises (per-user exercise entries)
//!
//! Backed by Firestore in production and by an in-memory store for
//! tests and local development. Both backends expose the identical
//! capability set, so the directory/ledger layers never know which
//! one they are talking to.

use crate::db::collections;
use crate::db::memory::MemoryStore;
use crate::error::AppError;
use crate::models::{Exercise, User};
use std::sync::Arc;

/// Filter for exercise queries.
///
/// `user_id` is always constrained. The date bounds are RFC3339
/// strings in the stored format; `date_min` is inclusive and
/// `date_before` exclusive, which lets a caller make a whole calendar
/// day inclusive by bounding at the following midnight.
#[derive(Debug, Clone)]
pub struct ExerciseFilter {
    pub user_id: String,
    pub date_min: Option<String>,
    pub date_before: Option<String>,
    /// Hard cap on returned records.
    pub limit: u32,
}

/// Database client over users and exercises.
#[derive(Clone)]
pub struct Db {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<MemoryStore>),
}

impl Db {
    /// Create a new Firestore-backed client.
    ///
    /// For local development with the emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // A dummy token source keeps the emulator happy without real
        // GCP credentials.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create an in-memory client (for tests and offline development).
    pub fn new_in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(MemoryStore::new())),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create and persist a new user. The record ID is generated here.
    pub async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
        };

        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .insert()
                    .into(collections::USERS)
                    .document_id(&user.id)
                    .object(&user)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.insert_user(user.clone()),
        }

        Ok(user)
    }

    /// List all users, in store-native order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::USERS)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.users()),
        }
    }

    /// Get a user by record ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(id)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.user(id)),
        }
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Create and persist a new exercise entry.
    ///
    /// `date` must already be in the stored RFC3339 whole-second
    /// format (see `time_utils::format_utc_rfc3339`). The owning
    /// user is NOT checked here; that is the ledger's job.
    pub async fn create_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: f64,
        date: String,
    ) -> Result<Exercise, AppError> {
        let exercise = Exercise {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration,
            date,
        };

        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .insert()
                    .into(collections::EXERCISES)
                    .document_id(&exercise.id)
                    .object(&exercise)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.insert_exercise(exercise.clone()),
        }

        Ok(exercise)
    }

    /// Query exercise entries for a user with optional date bounds
    /// and a hard result cap. No explicit sort is applied; ordering
    /// is store-native.
    pub async fn query_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let f = filter.clone();
                client
                    .fluent()
                    .select()
                    .from(collections::EXERCISES)
                    .filter(move |q| {
                        q.for_all([
                            q.field("user_id").eq(f.user_id.clone()),
                            f.date_min
                                .clone()
                                .and_then(|d| q.field("date").greater_than_or_equal(d)),
                            f.date_before
                                .clone()
                                .and_then(|d| q.field("date").less_than(d)),
                        ])
                    })
                    .limit(filter.limit)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))
            }
            Backend::Memory(store) => Ok(store.query_exercises(filter)),
        }
    }
}
