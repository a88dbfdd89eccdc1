// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitlog: a small exercise-tracking API.
//!
//! This crate provides the backend API for recording users and their
//! exercise entries, and for querying a filtered exercise history.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Db;
use services::{ExerciseLedger, UserDirectory};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub directory: UserDirectory,
    pub ledger: ExerciseLedger,
}
