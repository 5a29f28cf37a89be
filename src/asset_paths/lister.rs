use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::bundle::{AssetKind, BundleVariant, bundle_files};
use crate::error::ListingError;

/// Source of the asset filenames a configuration should reference.
///
/// Implementations return paths relative to the asset directory, using `/` as the
/// separator, in the order they should be loaded. An empty list means no bundle of
/// that kind is available.
pub trait AssetLister {
  /// Filenames for the given kind and build variant.
  fn list(&self, kind: AssetKind, variant: BundleVariant) -> Result<Vec<String>, ListingError>;
}

/// Lister returning the canonical bundle names without inspecting the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLayout;

impl AssetLister for BundledLayout {
  fn list(&self, kind: AssetKind, variant: BundleVariant) -> Result<Vec<String>, ListingError> {
    Ok(bundle_files(kind, variant))
  }
}

/// Lister that picks production bundles present in a built static directory.
///
/// Content-hashed names such as `bokeh-3f2a9c.min.js` are accepted next to the plain
/// names, and the lexically greatest match wins. Development builds are not hashed and
/// always use the canonical names.
#[derive(Debug, Clone)]
pub struct StaticDirLister {
  root: PathBuf,
}

impl StaticDirLister {
  /// Create a lister scanning `root/js` and `root/css`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  fn find_bundle(&self, kind: AssetKind, minified: bool) -> Result<Option<String>, ListingError> {
    let dir = self.root.join(kind.extension());
    let mut matches: Vec<String> = read_file_names(&dir)?
      .into_iter()
      .filter(|name| is_bundle_name(name, kind, minified))
      .collect();

    matches.sort();
    Ok(matches.pop().map(|name| format!("{}/{}", kind.extension(), name)))
  }
}

impl AssetLister for StaticDirLister {
  fn list(&self, kind: AssetKind, variant: BundleVariant) -> Result<Vec<String>, ListingError> {
    match variant {
      BundleVariant::Production { minified } => {
        Ok(self.find_bundle(kind, minified)?.into_iter().collect())
      }
      BundleVariant::Dev => Ok(bundle_files(kind, variant)),
    }
  }
}

fn bundle_name_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^bokeh(?:-[0-9a-f]+)?(?P<min>\.min)?\.(?P<ext>js|css)$")
      .expect("invalid bundle name regex")
  })
}

fn is_bundle_name(name: &str, kind: AssetKind, minified: bool) -> bool {
  let Some(caps) = bundle_name_pattern().captures(name) else {
    return false;
  };

  let ext_matches = caps.name("ext").is_some_and(|ext| ext.as_str() == kind.extension());
  ext_matches && caps.name("min").is_some() == minified
}

fn read_file_names(dir: &Path) -> Result<Vec<String>, ListingError> {
  if !dir.is_dir() {
    return Ok(Vec::new());
  }

  let io_error = |source| ListingError::Io {
    path: dir.to_path_buf(),
    source,
  };

  let mut names = Vec::new();
  for entry in fs::read_dir(dir).map_err(io_error)? {
    let entry = entry.map_err(io_error)?;
    if !entry.file_type().map_err(io_error)?.is_file() {
      continue;
    }

    let file_name = entry.file_name();
    if let Some(name) = file_name.to_str() {
      names.push(name.to_string());
    }
  }

  Ok(names)
}
