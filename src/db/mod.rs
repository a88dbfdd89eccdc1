//! Database layer (Firestore or in-memory).

pub mod memory;
pub mod store;

pub use store::{Db, ExerciseFilter};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}
