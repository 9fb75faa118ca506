//! Named route registry.
//!
//! # Responsibilities
//! - Store route definitions keyed by name
//! - Store declared module names in registration order
//! - Look up a route by name, failing explicitly when it is unknown
//!
//! # Design Decisions
//! - Populated once at bootstrap, read-only afterwards (not enforced)
//! - Re-adding a name overwrites the previous entry (last write wins)
//! - Path templates are stored without a leading `/`
//! - Explicit NotFound rather than a silent default entry

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Errors raised by route lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route was registered under this name.
    #[error("route not found: {name}")]
    NotFound { name: String },
}

/// A single named route definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Path template, e.g. `":language/:controller/:action"`.
    pub path: String,
    pub controller: Option<String>,
    pub action: Option<String>,
    pub module: Option<String>,
    pub language: Option<String>,
    pub prefix: Option<String>,
}

impl RouteEntry {
    /// Create an entry with only a path template.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Registry of named routes and module names.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, RouteEntry>,
    modules: Vec<String>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) a route under `name`.
    ///
    /// Exactly one leading `/` is stripped from the path; every other field is
    /// taken as given. Accepts any input, including empty names and paths.
    pub fn add_route(&mut self, name: impl Into<String>, mut entry: RouteEntry) {
        let name = name.into();
        if entry.path.starts_with('/') {
            entry.path.remove(0);
        }
        tracing::debug!(route = %name, path = %entry.path, "Registering route");
        if let Some(previous) = self.routes.insert(name, entry) {
            tracing::debug!(previous_path = %previous.path, "Route overwritten");
        }
    }

    /// Register a route from its path template alone.
    pub fn add_path(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.add_route(name, RouteEntry::new(path));
    }

    /// Append a module name. Duplicates are kept.
    pub fn add_module(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(module = %name, "Registering module");
        self.modules.push(name);
    }

    /// All module names in registration order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// The full name → route mapping.
    pub fn routes(&self) -> &HashMap<String, RouteEntry> {
        &self.routes
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Result<&RouteEntry, RouteError> {
        self.routes.get(name).ok_or_else(|| RouteError::NotFound {
            name: name.to_string(),
        })
    }
}
