//! Workspace-wide constants.

/// Project-level config file looked up in the site root.
pub const PROJECT_CONFIG_FILE: &str = "govsite.toml";

/// Regions slider range.
pub const MIN_REGIONS: u32 = 1;
pub const MAX_REGIONS: u32 = 10;

/// Agent / application count slider range.
pub const MIN_AGENTS: u32 = 1;
pub const MAX_AGENTS: u32 = 100;

/// Slider defaults on mount.
pub const DEFAULT_REGIONS: u32 = 1;
pub const DEFAULT_AGENTS: u32 = 5;
