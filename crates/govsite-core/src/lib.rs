//! # govsite-core
//!
//! Foundation crate for the govsite workspace.
//! Defines errors, config, events, the cancellation token, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod observability;
pub mod traits;

pub use config::SiteConfig;
pub use errors::{ConfigError, EstimatorError, ExportError, FormError, SiteErrorCode};
pub use events::{EventDispatcher, SiteEventHandler};
pub use traits::{Cancellable, CancellationToken};
