//! Error types raised while resolving or loading resource configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::asset_paths::AssetKind;
use crate::resources::Parameter;

/// Failures raised while constructing a [`crate::ResourceConfig`].
#[derive(Debug, Error)]
pub enum ResourceError {
  /// The mode literal is not one of the recognised delivery modes.
  #[error(
    "wrong value for 'mode' parameter, expected 'inline', 'cdn', 'server(-dev)', \
     'relative(-dev)' or 'absolute(-dev)', got '{mode}'"
  )]
  InvalidMode {
    /// Literal that failed to parse.
    mode: String,
  },

  /// An optional parameter was supplied for a mode that does not use it.
  #[error("setting '{parameter}' makes sense only when 'mode' is set to {allowed}, got '{mode}'")]
  InvalidParameter {
    /// Parameter that was rejected.
    parameter: Parameter,
    /// Mode literal the parameter was supplied with.
    mode: String,
    /// Human readable list of the modes accepting the parameter.
    allowed: String,
  },

  /// The asset lister found no bundle of a required kind.
  #[error("no {kind} bundle found in {dir}")]
  MissingBundle {
    /// Kind of bundle that is missing.
    kind: AssetKind,
    /// Asset directory that was searched.
    dir: PathBuf,
  },

  /// An asset path cannot be expressed relative to the root directory.
  #[error("cannot express {target} relative to {base}; both paths must be absolute")]
  UnrelatedPaths {
    /// Asset path that was being referenced.
    target: PathBuf,
    /// Directory the reference should start from.
    base: PathBuf,
  },

  /// The asset lister failed to enumerate bundle files.
  #[error(transparent)]
  Listing(#[from] ListingError),
}

/// Failures while enumerating asset files.
#[derive(Debug, Error)]
pub enum ListingError {
  /// Failed to read an asset directory.
  #[error("failed to read assets directory at {path}")]
  Io {
    /// Directory that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
}

/// Failures while loading [`crate::ResourceSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
  /// Failed to read the settings file from disk.
  #[error("failed to read {path}")]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },

  /// Failed to parse a JSON settings file.
  #[error("failed to parse {path}")]
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },

  /// Failed to parse a YAML settings file.
  #[error("failed to parse {path}")]
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_yaml::Error,
  },

  /// An environment variable held something other than a boolean.
  #[error("{variable} must be a boolean, got '{value}'")]
  InvalidBoolean {
    /// Variable name.
    variable: String,
    /// Offending value.
    value: String,
  },
}
