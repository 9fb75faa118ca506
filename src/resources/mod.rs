//! Template resources.
//!
//! # Data Flow
//! ```text
//! resource name
//!     → store.rs (locate in storage, render `${NAME}` constants)
//!     → resource.rs (cache content + original, `{{key}}` substitution)
//!     → rendered string
//! ```
//!
//! # Design Decisions
//! - Storage is read once per resource instance
//! - The first-loaded text is kept so substitutions can be discarded
//! - Storage rendering is a fixed-token pass, not a script evaluator

pub mod resource;
pub mod store;

pub use resource::TemplateResource;
pub use store::{render_context, FileResourceStore, MemoryResourceStore, ResourceError, ResourceStore};
