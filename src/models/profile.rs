// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile sub-record owned 1:1 by an account.

use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

/// Biographical/contact fields attached to an account. The profile is
/// embedded in the account row; it is never addressable on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub website_url: Option<String>,
    /// Platform name -> URL. Persisted as a JSON blob, rehydrated on read.
    pub social_media_links: Option<HashMap<String, String>>,
    pub company_name: Option<String>,
}

impl Profile {
    /// True when no profile field has ever been set. An account with an
    /// all-empty profile reads back as having no profile at all.
    pub fn is_empty(&self) -> bool {
        self.bio.is_none()
            && self.profile_picture_url.is_none()
            && self.address_street.is_none()
            && self.address_city.is_none()
            && self.address_country.is_none()
            && self.website_url.is_none()
            && self.social_media_links.is_none()
            && self.company_name.is_none()
    }
}

/// Inbound profile payload, validated as a unit when present. Every supplied
/// sub-field must independently satisfy its own constraint; absent fields
/// are skipped entirely.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[validate(length(
        min = 3,
        max = 150,
        message = "bio must be between 3 and 150 characters long"
    ))]
    pub bio: Option<String>,

    #[validate(url(message = "profilePictureUrl must be a valid URL"))]
    pub profile_picture_url: Option<String>,

    #[validate(length(
        min = 3,
        max = 100,
        message = "addressStreet must be between 3 and 100 characters long"
    ))]
    pub address_street: Option<String>,

    #[validate(length(
        min = 3,
        max = 100,
        message = "addressCity must be between 3 and 100 characters long"
    ))]
    pub address_city: Option<String>,

    pub address_country: Option<String>,

    #[validate(url(message = "websiteUrl must be a valid URL"))]
    pub website_url: Option<String>,

    pub social_media_links: Option<HashMap<String, String>>,

    #[validate(length(
        min = 3,
        max = 100,
        message = "companyName must be between 3 and 100 characters long"
    ))]
    pub company_name: Option<String>,
}
