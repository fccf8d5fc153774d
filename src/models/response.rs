// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response projections: the one-way transform from stored records to their
//! caller-visible representations.
//!
//! Exposure is a whitelist. A field reaches the caller only if it has a slot
//! here, so the password (and anything else the store carries internally,
//! like the account type or audit timestamps) is structurally incapable of
//! appearing in a response, whatever code path produced the record.

use crate::models::account::{Account, VerificationStatus};
use crate::models::profile::Profile;
use serde::Serialize;
use std::collections::HashMap;

/// Projected account as returned by every read and mutation endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub date_of_birth: String,
    pub verification_status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
}

/// Projected profile sub-record, nested under its owning account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media_links: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            phone_number: account.phone_number,
            date_of_birth: account.date_of_birth.format("%Y-%m-%d").to_string(),
            verification_status: account.verification_status,
            last_login_at: account.last_login_at.map(|t| t.to_rfc3339()),
            profile: account.profile.map(ProfileResponse::from),
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            bio: profile.bio,
            profile_picture_url: profile.profile_picture_url,
            address_street: profile.address_street,
            address_city: profile.address_city,
            address_country: profile.address_country,
            website_url: profile.website_url,
            social_media_links: profile.social_media_links,
            company_name: profile.company_name,
        }
    }
}

/// Project a collection, order-preserving.
pub fn project_accounts(accounts: Vec<Account>) -> Vec<AccountResponse> {
    accounts.into_iter().map(AccountResponse::from).collect()
}
