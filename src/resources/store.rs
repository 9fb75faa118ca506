//! Resource storage backends.
//!
//! A store turns a logical resource name into rendered text. Rendering is a
//! single pass over `${NAME}` tokens using the store's context map; anything
//! else, including `{{key}}` placeholders, is passed through untouched.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Errors that can occur while loading a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource name does not resolve to anything in the store.
    #[error("resource `{path}` not found at {location}")]
    NotFound { path: String, location: String },

    /// The resource name would escape the store root.
    #[error("invalid resource path `{path}`")]
    InvalidPath { path: String },

    /// The resource exists but could not be read.
    #[error("failed to read resource `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Source of resource bodies.
pub trait ResourceStore {
    /// Load and render the body of `path`.
    fn load(&self, path: &str) -> Result<String, ResourceError>;
}

impl<S: ResourceStore + ?Sized> ResourceStore for &S {
    fn load(&self, path: &str) -> Result<String, ResourceError> {
        (**self).load(path)
    }
}

fn context_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("context pattern is valid")
    })
}

/// Replace `${NAME}` tokens with values from `context`.
///
/// Unknown names are left as written.
pub fn render_context(body: &str, context: &BTreeMap<String, String>) -> String {
    if context.is_empty() {
        return body.to_string();
    }
    context_pattern()
        .replace_all(body, |caps: &Captures<'_>| match context.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Resources stored as `<root>/<name>.<extension>` files.
#[derive(Debug, Clone)]
pub struct FileResourceStore {
    root: PathBuf,
    extension: String,
    context: BTreeMap<String, String>,
}

impl FileResourceStore {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            context: BTreeMap::new(),
        }
    }

    /// Replace the render context.
    pub fn with_context(mut self, context: BTreeMap<String, String>) -> Self {
        self.context = context;
        self
    }

    /// Add one render-context constant.
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(name.into(), value.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a resource name to its file location inside the root.
    pub fn locate(&self, path: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(path);
        let escapes = path.is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(ResourceError::InvalidPath {
                path: path.to_string(),
            });
        }

        let file_name = if self.extension.is_empty() {
            path.to_string()
        } else {
            format!("{}.{}", path, self.extension)
        };
        Ok(self.root.join(file_name))
    }
}

impl ResourceStore for FileResourceStore {
    fn load(&self, path: &str) -> Result<String, ResourceError> {
        let location = self.locate(path)?;
        let body = fs::read_to_string(&location).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResourceError::NotFound {
                path: path.to_string(),
                location: location.display().to_string(),
            },
            _ => ResourceError::Io {
                path: path.to_string(),
                source: e,
            },
        })?;

        tracing::debug!(resource = %path, location = %location.display(), bytes = body.len(), "Loaded resource");
        Ok(render_context(&body, &self.context))
    }
}

/// Resources held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    bodies: HashMap<String, String>,
    context: BTreeMap<String, String>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an inline resource body.
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.bodies.insert(path.into(), body.into());
    }

    pub fn with_resource(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(name.into(), value.into());
        self
    }
}

impl ResourceStore for MemoryResourceStore {
    fn load(&self, path: &str) -> Result<String, ResourceError> {
        let body = self.bodies.get(path).ok_or_else(|| ResourceError::NotFound {
            path: path.to_string(),
            location: "memory".to_string(),
        })?;
        tracing::debug!(resource = %path, bytes = body.len(), "Loaded inline resource");
        Ok(render_context(body, &self.context))
    }
}
