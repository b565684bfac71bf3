//! Configuration system for govsite.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod export_config;
pub mod forms_config;
pub mod observability_config;
pub mod site_config;

pub use export_config::ExportConfig;
pub use forms_config::FormsConfig;
pub use observability_config::ObservabilityConfig;
pub use site_config::SiteConfig;
