//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for an application.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Application-wide settings (base URL).
    pub app: ApplicationConfig,

    /// Module names, registered in file order.
    pub modules: Vec<String>,

    /// Named route definitions.
    pub routes: Vec<RouteConfig>,

    /// Resource storage settings.
    pub resources: ResourceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Base URL prepended to every composed URL.
    pub fn app_base_url(&self) -> &str {
        &self.app.base_url
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Base URL, normally ending in `/` (e.g., "https://example.com/").
    pub base_url: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_string(),
        }
    }
}

/// A named route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route name used for lookups.
    pub name: String,

    /// Path template with `:language`, `:module`, `:controller`, `:action`
    /// and `:params` tokens.
    pub path: String,

    #[serde(default)]
    pub controller: Option<String>,

    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,
}

/// Resource storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory holding resource files.
    pub root: String,

    /// File extension appended to resource names (without the dot).
    pub extension: String,

    /// Constants available to `${NAME}` tokens in resource files.
    pub context: BTreeMap<String, String>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            root: "resources".to_string(),
            extension: "res".to_string(),
            context: BTreeMap::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
