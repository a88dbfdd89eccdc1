// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory: identity records keyed by generated ID.

use crate::db::Db;
use crate::error::Result;
use crate::models::User;

/// Manages user identity records.
#[derive(Clone)]
pub struct UserDirectory {
    db: Db,
}

impl UserDirectory {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Create a user with the given username (may be empty) and
    /// return the stored record including its generated ID.
    pub async fn create_user(&self, username: &str) -> Result<User> {
        let user = self.db.create_user(username).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// All user records, in store-native order. Empty store yields an
    /// empty vec, never a sentinel.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.db.list_users().await
    }

    /// Look up a single user; `None` when absent.
    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.db.get_user(id).await
    }
}
