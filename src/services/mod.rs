//! Service layer: the user directory and the exercise ledger.

pub mod directory;
pub mod ledger;

pub use directory::UserDirectory;
pub use ledger::ExerciseLedger;
