//! Named-route registry, URL composition and template resources.
//!
//! ```text
//!   AppConfig (TOML) ──▶ App ──▶ RouteTable ──▶ UrlMaker ──▶ absolute URL
//!                         │
//!                         └────▶ FileResourceStore ──▶ TemplateResource ──▶ text
//! ```

// Core subsystems
pub mod config;
pub mod resources;
pub mod routing;

// Application wiring
pub mod app;
pub mod text;

// Cross-cutting concerns
pub mod observability;

pub use app::App;
pub use config::AppConfig;
pub use resources::{ResourceError, TemplateResource};
pub use routing::{RouteArgs, RouteEntry, RouteError, RouteTable, UrlMaker};
