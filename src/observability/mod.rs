//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, resources, config
//!     → tracing events (debug/trace, structured fields)
//!     → logging.rs subscriber (installed by the CLI only)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
