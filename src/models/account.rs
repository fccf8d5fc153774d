// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account entity and the request payloads that mutate it.

use crate::models::profile::{Profile, ProfilePayload};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Regional mobile number pattern (leading +233 or 0).
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+233|0)[2-9]\d{8}$").expect("Invalid phone regex pattern"));

/// Caller-selectable account category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Personal,
    Business,
    Organization,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Personal => "PERSONAL",
            AccountType::Business => "BUSINESS",
            AccountType::Organization => "ORGANIZATION",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "PERSONAL" => Some(AccountType::Personal),
            "BUSINESS" => Some(AccountType::Business),
            "ORGANIZATION" => Some(AccountType::Organization),
            _ => None,
        }
    }
}

/// System-managed verification state. Never settable through the update path;
/// the verification workflow mutates it out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Unverified,
    Pending,
    Verified,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "UNVERIFIED",
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::Verified => "VERIFIED",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "UNVERIFIED" => Some(VerificationStatus::Unverified),
            "PENDING" => Some(VerificationStatus::Pending),
            "VERIFIED" => Some(VerificationStatus::Verified),
            _ => None,
        }
    }
}

/// The stored account record. `password` is write-only: it never leaves the
/// process through any projection (see `models::response`).
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Server-generated UUID, assigned once at create, immutable.
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Globally unique across all accounts (store-enforced).
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    pub account_type: Option<AccountType>,
    pub verification_status: VerificationStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<Profile>,
}

/// Fields the store needs to insert a new account. The id, timestamps and
/// verification status are assigned by the store itself.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub date_of_birth: NaiveDate,
    pub account_type: Option<AccountType>,
    pub profile: Option<ProfilePayload>,
}

/// Create payload. Required fields are `Option` so that a missing field is
/// reported as a violation alongside every other failure in a single pass,
/// instead of aborting at deserialization.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(
        required(message = "firstName is required"),
        length(min = 1, max = 50, message = "firstName must be 1 to 50 characters long")
    )]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "lastName must be at most 50 characters long"))]
    pub last_name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters long")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 8, message = "password must be at least 8 characters long")
    )]
    pub password: Option<String>,

    #[validate(regex(
        path = *PHONE_PATTERN,
        message = "phoneNumber must be a valid mobile number"
    ))]
    pub phone_number: Option<String>,

    #[validate(required(message = "dateOfBirth is required"))]
    pub date_of_birth: Option<NaiveDate>,

    pub account_type: Option<AccountType>,

    #[validate(nested)]
    pub profile: Option<ProfilePayload>,
}

impl CreateAccountRequest {
    /// Convert a validated payload into store input, normalizing the email.
    /// Returns `None` if a required field is absent, which validation has
    /// already ruled out on every reachable path.
    pub fn into_new_account(self) -> Option<NewAccount> {
        let (Some(first_name), Some(email), Some(password), Some(date_of_birth)) = (
            self.first_name,
            self.email,
            self.password,
            self.date_of_birth,
        ) else {
            return None;
        };

        Some(NewAccount {
            first_name,
            last_name: self.last_name,
            email: normalize_email(&email),
            password,
            phone_number: self.phone_number,
            date_of_birth,
            account_type: self.account_type,
            profile: self.profile,
        })
    }
}

/// Partial update payload: the all-optional variant of the create constraints.
///
/// Unknown keys are rejected outright, so attempts to set `password`,
/// `verificationStatus` or `lastLoginAt` through this path fail loudly with a
/// 400 instead of being silently dropped.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 50, message = "firstName must be 1 to 50 characters long"))]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "lastName must be at most 50 characters long"))]
    pub last_name: Option<String>,

    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters long")
    )]
    pub email: Option<String>,

    #[validate(regex(
        path = *PHONE_PATTERN,
        message = "phoneNumber must be a valid mobile number"
    ))]
    pub phone_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub account_type: Option<AccountType>,

    #[validate(nested)]
    pub profile: Option<ProfilePayload>,
}

impl UpdateAccountRequest {
    /// True when the payload supplies nothing at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.date_of_birth.is_none()
            && self.account_type.is_none()
            && self.profile.is_none()
    }

    /// Normalize the email in place, if one was supplied.
    pub fn normalize(mut self) -> Self {
        if let Some(email) = self.email.take() {
            self.email = Some(normalize_email(&email));
        }
        self
    }
}

/// Emails are compared case-insensitively by convention; store them folded
/// so the unique index sees one canonical form.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
