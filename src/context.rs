//! Environment a resource configuration is resolved against.

use std::path::{Path, PathBuf};

/// Default address of a locally running Bokeh server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5006/";

/// Default CDN host serving versioned BokehJS bundles.
pub const DEFAULT_CDN_URL: &str = "https://cdn.pydata.org";

/// Values owned by the embedding application that resolution depends on.
///
/// Everything here is read-only input: the running library version used for CDN
/// compatibility checks, where the built assets live on disk, and the default
/// server and CDN bases. Keeping them in one value keeps resolution a pure function
/// of its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
  /// Version string of the running library, e.g. `0.4.1` or `0.4.1-12-gabcdef`.
  pub library_version: String,
  /// Directory holding the production `js/` and `css/` bundles.
  pub static_dir: PathBuf,
  /// Directory holding the unbundled development build.
  pub dev_static_dir: PathBuf,
  /// Directory relative paths are computed from when no root dir is supplied.
  pub working_dir: PathBuf,
  /// Server root used when `server` mode is requested without a root URL.
  pub default_server_url: String,
  /// CDN base URL without a trailing slash.
  pub cdn_url: String,
}

impl ResolveContext {
  /// Context with conventional defaults for the given library version.
  pub fn new(library_version: impl Into<String>) -> Self {
    Self {
      library_version: library_version.into(),
      static_dir: PathBuf::from("/bokeh/server/static"),
      dev_static_dir: PathBuf::from("/bokehjs/build"),
      working_dir: PathBuf::from("/"),
      default_server_url: DEFAULT_SERVER_URL.into(),
      cdn_url: DEFAULT_CDN_URL.into(),
    }
  }

  /// Replace the production and development asset directories.
  pub fn with_static_dirs(
    mut self,
    static_dir: impl Into<PathBuf>,
    dev_static_dir: impl Into<PathBuf>,
  ) -> Self {
    self.static_dir = static_dir.into();
    self.dev_static_dir = dev_static_dir.into();
    self
  }

  /// Replace the working directory relative paths are anchored to.
  pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
    self.working_dir = working_dir.into();
    self
  }

  /// Asset directory for the production or development build.
  pub fn asset_dir(&self, dev: bool) -> &Path {
    if dev {
      self.dev_static_dir.as_path()
    } else {
      self.static_dir.as_path()
    }
  }

  /// Release part of the running version, without qualifier segments.
  pub fn release_version(&self) -> &str {
    release_part(&self.library_version)
  }

  /// Whether the running version carries trailing qualifier segments.
  pub fn is_development_version(&self) -> bool {
    self.library_version.contains('-')
  }
}

/// Strip `-`-separated qualifier segments from a version string.
pub fn release_part(version: &str) -> &str {
  version.split('-').next().unwrap_or(version)
}
