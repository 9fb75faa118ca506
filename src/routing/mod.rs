//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap (once, before serving):
//!     RouteConfig[] + module names
//!     → table.rs (RouteTable: name → RouteEntry, modules in order)
//!
//! Link generation (per render):
//!     route name | controller/action/module + params
//!     → composer.rs (UrlMaker: token expansion, segment joins)
//!     → absolute URL string
//! ```
//!
//! # Design Decisions
//! - Reverse direction only: name → URL, never URL → route
//! - Table is read-only after bootstrap by convention
//! - Unknown route names are an explicit error

pub mod composer;
pub mod table;

pub use composer::{expand_template, RouteArgs, UrlMaker, ROUTE_TOKENS};
pub use table::{RouteEntry, RouteError, RouteTable};
