// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite-backed account store with typed operations.
//!
//! One row per account, with the profile embedded as columns and the social
//! media links serialized to a JSON text blob. Email uniqueness lives in a
//! unique index, so duplicate detection is atomic with the insert rather
//! than a read-then-write race.

use crate::models::account::{Account, AccountType, NewAccount, VerificationStatus};
use crate::models::profile::Profile;
use crate::models::UpdateAccountRequest;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

/// Store-level failures, kept distinct so the service layer can translate a
/// unique-constraint hit into a domain Conflict.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Query(#[from] sqlx::Error),

    #[error("corrupt stored record: {0}")]
    Corrupt(String),
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id                  TEXT PRIMARY KEY,
    first_name          TEXT NOT NULL,
    last_name           TEXT,
    email               TEXT NOT NULL,
    password            TEXT NOT NULL,
    phone_number        TEXT,
    date_of_birth       TEXT NOT NULL,
    account_type        TEXT,
    verification_status TEXT NOT NULL DEFAULT 'UNVERIFIED',
    last_login_at       TEXT,
    created_at          TEXT NOT NULL,
    updated_at          TEXT NOT NULL,
    bio                 TEXT,
    profile_picture_url TEXT,
    address_street      TEXT,
    address_city        TEXT,
    address_country     TEXT,
    website_url         TEXT,
    social_media_links  TEXT,
    company_name        TEXT
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_accounts_email ON accounts (email);
"#;

/// Account store over a SQLite connection pool.
#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    /// Connect to the database named by `database_url`, creating the file
    /// and schema on first use.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        tracing::info!(url = database_url, "Connected to account store");
        Ok(store)
    }

    /// In-memory store for tests. A single connection keeps every caller on
    /// the same transient database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    // ─── Account Operations ──────────────────────────────────────

    /// All accounts, oldest first.
    pub async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT * FROM accounts ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AccountRow::into_account).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Insert a new account. A duplicate email surfaces as
    /// `StoreError::UniqueViolation`, atomically with the insert itself.
    pub async fn create(&self, new_account: NewAccount) -> Result<Account, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let profile = new_account.profile.unwrap_or_default();
        let social_media_links = encode_social_links(profile.social_media_links.as_ref())?;

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (
                id, first_name, last_name, email, password, phone_number,
                date_of_birth, account_type, verification_status, last_login_at,
                created_at, updated_at,
                bio, profile_picture_url, address_street, address_city,
                address_country, website_url, social_media_links, company_name
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, ?10, ?10,
                    ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(&new_account.email)
        .bind(&new_account.password)
        .bind(&new_account.phone_number)
        .bind(new_account.date_of_birth)
        .bind(new_account.account_type.map(|t| t.as_str()))
        .bind(VerificationStatus::Unverified.as_str())
        .bind(now)
        .bind(&profile.bio)
        .bind(&profile.profile_picture_url)
        .bind(&profile.address_street)
        .bind(&profile.address_city)
        .bind(&profile.address_country)
        .bind(&profile.website_url)
        .bind(&social_media_links)
        .bind(&profile.company_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        row.into_account()
    }

    /// Merge the supplied fields onto the stored record in a single UPDATE.
    /// Absent fields keep their stored value; profile sub-fields merge the
    /// same way, one level down. Returns `None` when no such row exists.
    pub async fn update_by_id(
        &self,
        id: &str,
        changes: &UpdateAccountRequest,
    ) -> Result<Option<Account>, StoreError> {
        let profile = changes.profile.clone().unwrap_or_default();
        let social_media_links = encode_social_links(profile.social_media_links.as_ref())?;

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts SET
                first_name          = COALESCE(?1, first_name),
                last_name           = COALESCE(?2, last_name),
                email               = COALESCE(?3, email),
                phone_number        = COALESCE(?4, phone_number),
                date_of_birth       = COALESCE(?5, date_of_birth),
                account_type        = COALESCE(?6, account_type),
                bio                 = COALESCE(?7, bio),
                profile_picture_url = COALESCE(?8, profile_picture_url),
                address_street      = COALESCE(?9, address_street),
                address_city        = COALESCE(?10, address_city),
                address_country     = COALESCE(?11, address_country),
                website_url         = COALESCE(?12, website_url),
                social_media_links  = COALESCE(?13, social_media_links),
                company_name        = COALESCE(?14, company_name),
                updated_at          = ?15
            WHERE id = ?16
            RETURNING *
            "#,
        )
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(&changes.phone_number)
        .bind(changes.date_of_birth)
        .bind(changes.account_type.map(|t| t.as_str()))
        .bind(&profile.bio)
        .bind(&profile.profile_picture_url)
        .bind(&profile.address_street)
        .bind(&profile.address_city)
        .bind(&profile.address_country)
        .bind(&profile.website_url)
        .bind(&social_media_links)
        .bind(&profile.company_name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Hard delete. Returns `false` when no such row existed.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_constraint_error(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return StoreError::UniqueViolation(db_error.message().to_string());
        }
    }
    StoreError::Query(error)
}

fn encode_social_links(
    links: Option<&HashMap<String, String>>,
) -> Result<Option<String>, StoreError> {
    links
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| StoreError::Corrupt(format!("social media links not serializable: {e}")))
}

/// Flat row shape as stored; converted to the nested `Account` on read.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    first_name: String,
    last_name: Option<String>,
    email: String,
    password: String,
    phone_number: Option<String>,
    date_of_birth: NaiveDate,
    account_type: Option<String>,
    verification_status: String,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    bio: Option<String>,
    profile_picture_url: Option<String>,
    address_street: Option<String>,
    address_city: Option<String>,
    address_country: Option<String>,
    website_url: Option<String>,
    social_media_links: Option<String>,
    company_name: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, StoreError> {
        let account_type = self
            .account_type
            .as_deref()
            .map(|raw| {
                AccountType::from_db(raw)
                    .ok_or_else(|| StoreError::Corrupt(format!("unknown account type '{raw}'")))
            })
            .transpose()?;

        let verification_status = VerificationStatus::from_db(&self.verification_status)
            .ok_or_else(|| {
                StoreError::Corrupt(format!(
                    "unknown verification status '{}'",
                    self.verification_status
                ))
            })?;

        let social_media_links = self
            .social_media_links
            .as_deref()
            .map(|raw| {
                serde_json::from_str::<HashMap<String, String>>(raw).map_err(|e| {
                    StoreError::Corrupt(format!("social media links not deserializable: {e}"))
                })
            })
            .transpose()?;

        let profile = Profile {
            bio: self.bio,
            profile_picture_url: self.profile_picture_url,
            address_street: self.address_street,
            address_city: self.address_city,
            address_country: self.address_country,
            website_url: self.website_url,
            social_media_links,
            company_name: self.company_name,
        };

        Ok(Account {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            account_type,
            verification_status,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            profile: if profile.is_empty() {
                None
            } else {
                Some(profile)
            },
        })
    }
}
