//! Settings loader describing which resource configuration to resolve.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::resources::ResourceOptions;

/// Settings file searched for when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "bokeh-resources.json";

/// Environment variable overriding the mode.
pub const ENV_RESOURCES: &str = "BOKEH_RESOURCES";
/// Environment variable overriding the CDN version.
pub const ENV_VERSION: &str = "BOKEH_VERSION";
/// Environment variable overriding the relative root directory.
pub const ENV_ROOTDIR: &str = "BOKEH_ROOTDIR";
/// Environment variable overriding the server root URL.
pub const ENV_ROOTURL: &str = "BOKEH_ROOTURL";
/// Environment variable toggling minified bundles.
pub const ENV_MINIFIED: &str = "BOKEH_MINIFIED";

/// User-facing resource settings, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceSettings {
  /// Mode literal such as `cdn` or `server-dev`.
  pub mode: String,
  /// CDN release to reference.
  pub version: Option<String>,
  /// Directory relative paths start from.
  pub root_dir: Option<PathBuf>,
  /// Bokeh server root URL.
  pub root_url: Option<String>,
  /// Whether production bundles should be minified.
  pub minified: bool,
}

impl Default for ResourceSettings {
  fn default() -> Self {
    let options = ResourceOptions::default();
    Self {
      mode: options.mode,
      version: None,
      root_dir: None,
      root_url: None,
      minified: options.minified,
    }
  }
}

impl ResourceSettings {
  /// Load settings from the default file in `dir`.
  ///
  /// A missing or unreadable file falls back to defaults so callers can still resolve
  /// a configuration; the failure is logged at debug level.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_SETTINGS_FILE);
    match Self::from_path(&candidate) {
      Ok(settings) => settings,
      Err(err) => {
        log::debug!("using default resource settings: {err}");
        Self::default()
      }
    }
  }

  /// Read settings from a JSON or YAML file, chosen by extension.
  pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let is_yaml = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
      serde_yaml::from_str(&content).map_err(|source| SettingsError::Yaml {
        path: path.to_path_buf(),
        source,
      })
    } else {
      serde_json::from_str(&content).map_err(|source| SettingsError::Json {
        path: path.to_path_buf(),
        source,
      })
    }
  }

  /// Override settings with `BOKEH_*` values returned by `lookup`.
  ///
  /// Empty values are treated as unset.
  pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, SettingsError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(mode) = get(ENV_RESOURCES) {
      self.mode = mode;
    }
    if let Some(version) = get(ENV_VERSION) {
      self.version = Some(version);
    }
    if let Some(root_dir) = get(ENV_ROOTDIR) {
      self.root_dir = Some(PathBuf::from(root_dir));
    }
    if let Some(root_url) = get(ENV_ROOTURL) {
      self.root_url = Some(root_url);
    }
    if let Some(minified) = get(ENV_MINIFIED) {
      self.minified = parse_bool(ENV_MINIFIED, &minified)?;
    }

    Ok(self)
  }

  /// Override settings from the process environment.
  pub fn apply_process_env(self) -> Result<Self, SettingsError> {
    self.apply_env(|name| std::env::var(name).ok())
  }

  /// Convert the settings into resolver options.
  pub fn into_options(self) -> ResourceOptions {
    ResourceOptions {
      mode: self.mode,
      version: self.version,
      root_dir: self.root_dir,
      root_url: self.root_url,
      minified: self.minified,
    }
  }
}

fn parse_bool(variable: &str, value: &str) -> Result<bool, SettingsError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(SettingsError::InvalidBoolean {
      variable: variable.to_string(),
      value: value.to_string(),
    }),
  }
}
