#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod context;
pub mod error;
pub mod mode;
pub mod models;
pub mod resources;
pub mod wrapper;

pub use config::ResourceSettings;
pub use context::ResolveContext;
pub use error::{ListingError, ResourceError, SettingsError};
pub use mode::{Mode, RequestedMode};
pub use models::{Message, RawContent, ResourceSummary, Severity};
pub use resources::{Parameter, ResourceConfig, ResourceOptions};
