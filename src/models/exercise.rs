// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise entry model for storage and API.

use serde::{Deserialize, Serialize};

/// Stored exercise record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated record ID (also used as document ID)
    pub id: String,
    /// Owning user's ID. Soft reference: the store does not enforce
    /// that the user exists, the ledger checks before inserting.
    pub user_id: String,
    /// Free-text description
    pub description: String,
    /// Duration in minutes
    pub duration: f64,
    /// When the exercise happened (RFC3339 UTC, whole seconds)
    pub date: String,
}
