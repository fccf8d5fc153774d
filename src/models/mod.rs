// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod account;
pub mod profile;
pub mod response;

pub use account::{
    Account, AccountType, CreateAccountRequest, NewAccount, UpdateAccountRequest,
    VerificationStatus,
};
pub use profile::{Profile, ProfilePayload};
pub use response::{project_accounts, AccountResponse, ProfileResponse};
