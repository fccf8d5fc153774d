// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account Service: validated account management with controlled projection.
//!
//! This crate provides the backend API for creating, querying, updating and
//! deleting user accounts. Inbound payloads are validated declaratively,
//! records are persisted with a store-enforced unique email constraint, and
//! responses only ever contain whitelisted fields.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use config::Config;
use services::AccountService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub account_service: AccountService,
}
