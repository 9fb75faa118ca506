//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is an absolute URL
//! - Reject unnamed routes and unusable resource extensions
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Duplicate route names are allowed (last one wins) but logged

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url `{value}` is not an absolute URL: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("resource extension `{0}` must not contain a path separator")]
    InvalidExtension(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Url::parse(config.app_base_url()) {
        errors.push(ValidationError::InvalidBaseUrl {
            value: config.app_base_url().to_string(),
            reason: e.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
        } else if !seen.insert(route.name.as_str()) {
            tracing::warn!(route = %route.name, "Duplicate route name, later definition wins");
        }
    }

    let extension = &config.resources.extension;
    if extension.contains('/') || extension.contains('\\') {
        errors.push(ValidationError::InvalidExtension(extension.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
