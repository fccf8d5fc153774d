// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account routes: path/body binding and outcome-to-response mapping.

use crate::error::{AppError, Result};
use crate::models::{project_accounts, AccountResponse, CreateAccountRequest, UpdateAccountRequest};
use crate::validation::ValidatedJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_accounts).post(create_account))
        .route(
            "/users/{id}",
            get(get_account).patch(update_account).delete(delete_account),
        )
}

/// Reject malformed path ids before any service logic runs. Accepted ids are
/// normalized to the canonical hyphenated form the store keys on.
fn parse_account_id(raw: &str) -> Result<String> {
    Uuid::parse_str(raw)
        .map(|uuid| uuid.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid account id '{raw}'")))
}

/// List all accounts, projected.
async fn list_accounts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<AccountResponse>>> {
    let accounts = state.account_service.list().await?;
    Ok(Json(project_accounts(accounts)))
}

/// Get a single account by id.
async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>> {
    let id = parse_account_id(&id)?;
    let account = state.account_service.get(&id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Create a new account.
async fn create_account(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let account = state.account_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Partially update an existing account.
async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>> {
    let id = parse_account_id(&id)?;
    let account = state.account_service.update(&id, request).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Response for account deletion.
#[derive(Serialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
    pub message: String,
}

/// Delete an account.
async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAccountResponse>> {
    let id = parse_account_id(&id)?;
    state.account_service.delete(&id).await?;

    Ok(Json(DeleteAccountResponse {
        success: true,
        message: "Account deleted".to_string(),
    }))
}
