//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};

/// Bounded retry count for generated-code allocation.
///
/// Hitting the bound is fatal for that request (500-class); the caller does
/// not retry.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and retrieving shortened links.
///
/// Owns shortcode allocation: custom codes are validated and committed once;
/// generated codes retry through the store's atomic insert-if-absent, so the
/// uniqueness check and the commit are a single step and concurrent requests
/// can never allocate the same code.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    base_url: String,
    default_validity_minutes: i64,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix short links are formatted with;
    /// `default_validity_minutes` applies when a request omits `validity`.
    pub fn new(repository: Arc<L>, base_url: String, default_validity_minutes: i64) -> Self {
        Self {
            repository,
            base_url,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - destination; must parse as an absolute URL
    /// - `validity_minutes` - requested lifetime; defaults to the service's
    ///   configured validity, must be positive
    /// - `custom_code` - optional caller-chosen code (validated if provided)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a bad URL, validity, or code
    /// format. Returns [`AppError::Conflict`] when a custom code is taken.
    /// Returns [`AppError::ResourceExhausted`] when generated codes keep
    /// colliding past the retry bound.
    pub async fn create_short_link(
        &self,
        long_url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        Url::parse(&long_url).map_err(|e| {
            AppError::bad_request("Invalid or missing URL", json!({ "reason": e.to_string() }))
        })?;

        let minutes = validity_minutes.unwrap_or(self.default_validity_minutes);
        if minutes <= 0 {
            return Err(AppError::bad_request(
                "Validity must be a positive integer (minutes)",
                json!({ "validity": minutes }),
            ));
        }
        let expires_at = Utc::now() + Duration::minutes(minutes);

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            return self
                .repository
                .create(NewLink {
                    code: custom,
                    long_url,
                    expires_at,
                })
                .await;
        }

        // Generated codes: the insert itself is the uniqueness check, so a
        // collision shows up as Conflict and we roll a new code.
        for _ in 0..MAX_ATTEMPTS {
            let candidate = NewLink {
                code: generate_code(),
                long_url: long_url.clone(),
                expires_at,
            };

            match self.repository.create(candidate).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Could not generate unique shortcode",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode does not exist", json!({ "code": code }))
            })
    }

    /// Formats the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
