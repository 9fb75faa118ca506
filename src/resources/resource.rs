//! Loaded template resource with repeatable key substitution.

use crate::resources::store::{ResourceError, ResourceStore};

/// Content captured by the first load.
#[derive(Debug, Clone)]
struct Loaded {
    content: String,
    original: String,
}

/// A named resource body that is read from its store at most once.
///
/// `replace_key` always works on the current content; the text captured by
/// the first load stays available through [`original_content`](Self::original_content).
#[derive(Debug)]
pub struct TemplateResource<S> {
    path: String,
    store: S,
    loaded: Option<Loaded>,
}

impl<S: ResourceStore> TemplateResource<S> {
    /// Build an unloaded resource. Nothing is read until content is needed.
    pub fn new(store: S, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            store,
            loaded: None,
        }
    }

    /// Build the resource and load it immediately.
    pub fn open(store: S, path: impl Into<String>) -> Result<Self, ResourceError> {
        let mut resource = Self::new(store, path);
        resource.load()?;
        Ok(resource)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Current content, loading it first if needed.
    pub fn content(&mut self) -> Result<&str, ResourceError> {
        Ok(&self.load()?.content)
    }

    /// Content as first loaded, unaffected by later substitutions.
    pub fn original_content(&mut self) -> Result<&str, ResourceError> {
        Ok(&self.load()?.original)
    }

    /// Replace every `{{key}}` in the current content with `text`.
    ///
    /// A key that does not occur is a no-op.
    pub fn replace_key(&mut self, key: &str, text: &str) -> Result<&mut Self, ResourceError> {
        let token = format!("{{{{{key}}}}}");
        let loaded = self.load()?;
        if loaded.content.contains(&token) {
            loaded.content = loaded.content.replace(&token, text);
        }
        Ok(self)
    }

    /// Discard every substitution made so far.
    pub fn restore(&mut self) -> Result<&mut Self, ResourceError> {
        let loaded = self.load()?;
        loaded.content.clone_from(&loaded.original);
        Ok(self)
    }

    /// Consume the resource and return its current content.
    pub fn into_content(mut self) -> Result<String, ResourceError> {
        Ok(std::mem::take(&mut self.load()?.content))
    }

    fn load(&mut self) -> Result<&mut Loaded, ResourceError> {
        let loaded = match self.loaded.take() {
            Some(loaded) => loaded,
            None => {
                let body = self.store.load(&self.path)?;
                tracing::debug!(resource = %self.path, "Resource content cached");
                Loaded {
                    content: body.clone(),
                    original: body,
                }
            }
        };
        Ok(self.loaded.insert(loaded))
    }
}
