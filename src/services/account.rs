// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account orchestration: business rules between the validated payloads and
//! the store.

use crate::db::{AccountStore, StoreError};
use crate::error::{AppError, Result};
use crate::models::{Account, CreateAccountRequest, UpdateAccountRequest};

/// Business logic for account lifecycle operations.
#[derive(Clone)]
pub struct AccountService {
    store: AccountStore,
}

impl AccountService {
    pub fn new(store: AccountStore) -> Self {
        Self { store }
    }

    /// Create a new account. The payload must already be validated; the
    /// store's unique email constraint decides conflicts atomically.
    pub async fn create(&self, request: CreateAccountRequest) -> Result<Account> {
        let new_account = request
            .into_new_account()
            .ok_or_else(|| AppError::BadRequest("Missing required account fields".to_string()))?;

        let account = self
            .store
            .create(new_account)
            .await
            .map_err(translate_store_error)?;

        tracing::info!(account_id = %account.id, "Account created");
        Ok(account)
    }

    pub async fn get(&self, id: &str) -> Result<Account> {
        self.store
            .find_by_id(id)
            .await
            .map_err(translate_store_error)?
            .ok_or_else(|| AppError::NotFound(format!("Account with id {id} not found")))
    }

    /// All accounts. No pagination in the current scope.
    pub async fn list(&self) -> Result<Vec<Account>> {
        self.store.find_all().await.map_err(translate_store_error)
    }

    /// Partial update. Provided fields overwrite, absent fields are left
    /// untouched, and a supplied profile merges onto the stored profile
    /// field-by-field. An email change can conflict just like a create.
    pub async fn update(&self, id: &str, request: UpdateAccountRequest) -> Result<Account> {
        if request.is_empty() {
            return Err(AppError::BadRequest("No account data provided".to_string()));
        }

        // Confirm the target exists so callers get a NotFound, never a
        // silent no-op.
        self.get(id).await?;

        let updated = self
            .store
            .update_by_id(id, &request.normalize())
            .await
            .map_err(translate_store_error)?
            // Row vanished between the check and the update; still NotFound.
            .ok_or_else(|| AppError::NotFound(format!("Account with id {id} not found")))?;

        tracing::info!(account_id = %id, "Account updated");
        Ok(updated)
    }

    /// Hard delete, no tombstone. Deleting an unknown id is NotFound.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let deleted = self
            .store
            .delete_by_id(id)
            .await
            .map_err(translate_store_error)?;

        if !deleted {
            return Err(AppError::NotFound(format!("Account with id {id} not found")));
        }

        tracing::info!(account_id = %id, "Account deleted");
        Ok(())
    }
}

/// Store failures cross into the domain here: a unique violation becomes a
/// Conflict (detail retained for the logs only), everything else is an
/// opaque database error.
fn translate_store_error(error: StoreError) -> AppError {
    match error {
        StoreError::UniqueViolation(detail) => AppError::Conflict(detail),
        other => AppError::Database(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn service() -> AccountService {
        let store = AccountStore::in_memory().await.expect("in-memory store");
        AccountService::new(store)
    }

    fn create_request(email: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: Some("Ama".to_string()),
            email: Some(email.to_string()),
            password: Some("longpass1".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 1, 1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_yields_conflict() {
        let service = service().await;
        service.create(create_request("ama@example.com")).await.unwrap();

        let err = service
            .create(create_request("ama@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_detection_is_case_insensitive() {
        let service = service().await;
        service.create(create_request("ama@example.com")).await.unwrap();

        let err = service
            .create(create_request("AMA@EXAMPLE.COM"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = service().await;
        let update = UpdateAccountRequest {
            first_name: Some("Kofi".to_string()),
            ..Default::default()
        };

        let err = service
            .update("7c9e6679-7425-40de-944b-e07fc1f90ae7", update)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_update_rejected() {
        let service = service().await;
        let created = service.create(create_request("ama@example.com")).await.unwrap();

        let err = service
            .update(&created.id, UpdateAccountRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_update_preserves_omitted_fields() {
        let service = service().await;
        let created = service.create(create_request("ama@example.com")).await.unwrap();

        let update = UpdateAccountRequest {
            last_name: Some("Mensah".to_string()),
            ..Default::default()
        };
        let updated = service.update(&created.id, update).await.unwrap();

        assert_eq!(updated.last_name.as_deref(), Some("Mensah"));
        assert_eq!(updated.first_name, "Ama");
        assert_eq!(updated.email, "ama@example.com");
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service().await;
        let created = service.create(create_request("ama@example.com")).await.unwrap();

        service.delete(&created.id).await.unwrap();

        let err = service.get(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
