//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated record ID (also used as document ID)
    pub id: String,
    /// Display name; no uniqueness or format constraint
    pub username: String,
}
