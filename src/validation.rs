// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request body binding plus declarative validation.
//!
//! `ValidatedJson<T>` is the single entry point for untrusted payloads: it
//! binds the JSON body (malformed bodies become a 400), runs the payload's
//! declared constraints without short-circuiting, and flattens the result
//! into `field path + message` pairs for the caller.

use crate::error::{AppError, FieldViolation};
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// JSON extractor that validates the payload after binding.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(flatten_violations(&errors)))?;

        Ok(Self(value))
    }
}

/// Flatten nested `ValidationErrors` into a complete, sorted violation list.
/// Sub-record failures are qualified by the parent field (`profile.bio`).
pub fn flatten_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    collect(errors, None, &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let name = camel_case(field.as_ref());
        let path = match prefix {
            Some(parent) => format!("{parent}.{name}"),
            None => name,
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("violates constraint '{}'", error.code));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

/// Field paths are reported in the API's casing, not Rust's.
fn camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}
