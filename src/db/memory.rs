// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store used by tests and offline development.
//!
//! Mirrors the Firestore backend's capability set, including its
//! looseness: no referential integrity between exercises and users,
//! no defined ordering of results.

use crate::db::ExerciseFilter;
use crate::models::{Exercise, User};
use dashmap::DashMap;

/// Concurrent in-memory collections keyed by record ID.
pub struct MemoryStore {
    users: DashMap<String, User>,
    exercises: DashMap<String, Exercise>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            exercises: DashMap::new(),
        }
    }

    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub fn insert_exercise(&self, exercise: Exercise) {
        self.exercises.insert(exercise.id.clone(), exercise);
    }

    /// Apply an [`ExerciseFilter`] the way the Firestore backend does:
    /// string comparison on the RFC3339 `date` field, then the cap.
    pub fn query_exercises(&self, filter: &ExerciseFilter) -> Vec<Exercise> {
        self.exercises
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|e| e.user_id == filter.user_id)
            .filter(|e| {
                filter
                    .date_min
                    .as_ref()
                    .is_none_or(|min| e.date.as_str() >= min.as_str())
            })
            .filter(|e| {
                filter
                    .date_before
                    .as_ref()
                    .is_none_or(|before| e.date.as_str() < before.as_str())
            })
            .take(filter.limit as usize)
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
