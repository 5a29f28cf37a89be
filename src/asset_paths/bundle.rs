use std::fmt;
use std::path::Path;

/// Kind of asset a bundle file provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
  /// JavaScript bundle or module.
  Js,
  /// Stylesheet.
  Css,
}

impl AssetKind {
  /// File extension and directory name used for the kind.
  pub fn extension(self) -> &'static str {
    match self {
      AssetKind::Js => "js",
      AssetKind::Css => "css",
    }
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// Which build of the assets to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleVariant {
  /// Single-file production bundle, optionally minified.
  Production {
    /// Whether the `.min` bundle should be used.
    minified: bool,
  },
  /// Unbundled development build loaded through require.js.
  Dev,
}

/// Canonical filenames, relative to the asset directory, for a kind and variant.
pub fn bundle_files(kind: AssetKind, variant: BundleVariant) -> Vec<String> {
  match (kind, variant) {
    (_, BundleVariant::Production { minified }) => {
      let min = if minified { ".min" } else { "" };
      vec![format!("{ext}/bokeh{min}.{ext}", ext = kind.extension())]
    }
    (AssetKind::Js, BundleVariant::Dev) => vec![
      "js/vendor/requirejs/require.js".to_string(),
      "js/config.js".to_string(),
    ],
    (AssetKind::Css, BundleVariant::Dev) => vec![
      "css/bokeh-vendor.css".to_string(),
      "css/main.css".to_string(),
    ],
  }
}

/// Render a path with forward slashes regardless of the native separator.
pub fn to_url_path(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}
