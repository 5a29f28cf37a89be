//! Resolution of a requested delivery mode into the assets a page should load.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::asset_paths::{
  AssetKind, AssetLister, BundleVariant, BundledLayout, bundle_files, cdn_url,
  ensure_trailing_slash, relative_path, server_static_url, to_url_path,
};
use crate::context::ResolveContext;
use crate::error::ResourceError;
use crate::mode::{Mode, RequestedMode};
use crate::models::{Message, RawContent, ResourceSummary};
use crate::wrapper;

/// Optional parameter whose meaning depends on the delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
  /// Directory relative asset paths are computed from.
  RootDir,
  /// BokehJS release requested from the CDN.
  Version,
  /// Root URL of the Bokeh server providing the assets.
  RootUrl,
}

impl Parameter {
  /// Name used in error messages and settings files.
  pub fn as_str(self) -> &'static str {
    match self {
      Parameter::RootDir => "root_dir",
      Parameter::Version => "version",
      Parameter::RootUrl => "root_url",
    }
  }

  /// Canonical modes accepting the parameter, with or without `-dev`.
  pub fn allowed_modes(self) -> &'static [Mode] {
    PARAMETER_MODES
      .iter()
      .find(|(parameter, _)| *parameter == self)
      .map(|(_, modes)| *modes)
      .unwrap_or(&[])
  }
}

impl fmt::Display for Parameter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Which canonical modes accept each optional parameter.
const PARAMETER_MODES: [(Parameter, &[Mode]); 3] = [
  (Parameter::RootDir, &[Mode::Relative]),
  (Parameter::Version, &[Mode::Cdn]),
  (Parameter::RootUrl, &[Mode::Server]),
];

/// Inputs for resolving a [`ResourceConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOptions {
  /// Mode literal, e.g. `cdn` or `relative-dev`.
  pub mode: String,
  /// CDN release to reference. Only valid for `cdn`.
  pub version: Option<String>,
  /// Directory relative paths start from. Only valid for `relative(-dev)`.
  pub root_dir: Option<PathBuf>,
  /// Bokeh server root URL. Only valid for `server(-dev)`.
  pub root_url: Option<String>,
  /// Whether production bundles should be the minified builds.
  pub minified: bool,
}

impl Default for ResourceOptions {
  fn default() -> Self {
    Self {
      mode: Mode::Inline.as_str().into(),
      version: None,
      root_dir: None,
      root_url: None,
      minified: true,
    }
  }
}

impl ResourceOptions {
  /// Options for `mode` with no optional parameters.
  pub fn new(mode: impl Into<String>) -> Self {
    Self {
      mode: mode.into(),
      ..Self::default()
    }
  }

  /// Request a specific CDN release.
  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }

  /// Compute relative paths from `root_dir`.
  pub fn root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
    self.root_dir = Some(root_dir.into());
    self
  }

  /// Load assets from the server at `root_url`.
  pub fn root_url(mut self, root_url: impl Into<String>) -> Self {
    self.root_url = Some(root_url.into());
    self
  }

  /// Choose between minified and readable production bundles.
  pub fn minified(mut self, minified: bool) -> Self {
    self.minified = minified;
    self
  }

  fn supplied_parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
    [
      (Parameter::RootDir, self.root_dir.is_some()),
      (Parameter::Version, self.version.is_some()),
      (Parameter::RootUrl, self.root_url.is_some()),
    ]
    .into_iter()
    .filter_map(|(parameter, supplied)| supplied.then_some(parameter))
  }
}

/// Resolved, read-only description of how BokehJS assets are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
  mode: Mode,
  dev: bool,
  minified: bool,
  version: Option<String>,
  root_dir: Option<PathBuf>,
  root_url: Option<String>,
  js_raw: Vec<RawContent>,
  css_raw: Vec<RawContent>,
  js_files: Vec<String>,
  css_files: Vec<String>,
  messages: Vec<Message>,
}

impl ResourceConfig {
  /// Validate `options` and resolve them using the canonical bundle names.
  pub fn new(options: &ResourceOptions, context: &ResolveContext) -> Result<Self, ResourceError> {
    Self::with_lister(options, context, &BundledLayout)
  }

  /// Validate `options` and resolve them using filenames supplied by `lister`.
  ///
  /// Fails when the lister cannot be read or has no bundle of a kind the mode needs.
  pub fn with_lister(
    options: &ResourceOptions,
    context: &ResolveContext,
    lister: &dyn AssetLister,
  ) -> Result<Self, ResourceError> {
    let requested: RequestedMode = options.mode.parse()?;
    validate_parameters(options, requested)?;

    let bundles = if requested.mode == Mode::Cdn {
      Bundles::default()
    } else {
      let variant = variant_for(requested, options.minified);
      Bundles::list(lister, variant, context.asset_dir(requested.dev))?
    };
    Self::resolve(requested, options, context, &bundles)
  }

  /// Inline configuration with default options.
  pub fn inline(context: &ResolveContext) -> Self {
    let options = ResourceOptions::new(Mode::Inline.as_str());
    let requested = RequestedMode::new(Mode::Inline);
    let bundles = Bundles::canonical(variant_for(requested, options.minified));

    let mut config = Self::empty(requested, &options);
    config.embed(context.asset_dir(false), &bundles);
    config
  }

  /// CDN configuration for the running library version.
  pub fn cdn(context: &ResolveContext) -> Self {
    let options = ResourceOptions::new(Mode::Cdn.as_str());
    let mut config = Self::empty(RequestedMode::new(Mode::Cdn), &options);
    config.link_cdn(&options, context);
    config
  }

  fn empty(requested: RequestedMode, options: &ResourceOptions) -> Self {
    Self {
      mode: requested.mode,
      dev: requested.dev,
      minified: options.minified,
      version: None,
      root_dir: None,
      root_url: None,
      js_raw: Vec::new(),
      css_raw: Vec::new(),
      js_files: Vec::new(),
      css_files: Vec::new(),
      messages: Vec::new(),
    }
  }

  fn resolve(
    requested: RequestedMode,
    options: &ResourceOptions,
    context: &ResolveContext,
    bundles: &Bundles,
  ) -> Result<Self, ResourceError> {
    let mut config = Self::empty(requested, options);
    let asset_dir = context.asset_dir(requested.dev);

    let addressing = match requested.mode {
      Mode::Inline => {
        config.embed(asset_dir, bundles);
        return Ok(config);
      }
      Mode::Cdn => {
        config.link_cdn(options, context);
        return Ok(config);
      }
      Mode::Server => {
        let root_url = options
          .root_url
          .as_deref()
          .unwrap_or(&context.default_server_url);
        let root_url = ensure_trailing_slash(root_url).into_owned();
        config.root_url = Some(root_url.clone());
        Addressing::Server { root_url }
      }
      Mode::Relative => {
        let root_dir = match &options.root_dir {
          Some(root_dir) => context.working_dir.join(root_dir),
          None => context.working_dir.clone(),
        };
        config.root_dir = Some(root_dir.clone());
        Addressing::Relative { asset_dir, root_dir }
      }
      Mode::Absolute => Addressing::Absolute { asset_dir },
    };

    config.js_files = addressing.locate_all(&bundles.js)?;
    config.css_files = addressing.locate_all(&bundles.css)?;
    if requested.dev {
      config.js_raw = vec![RawContent::Script(require_config(&addressing.locate("js")?))];
    }

    Ok(config)
  }

  fn embed(&mut self, asset_dir: &Path, bundles: &Bundles) {
    self.js_raw = embed_bundles(asset_dir, &bundles.js);
    self.css_raw = embed_bundles(asset_dir, &bundles.css);
  }

  fn link_cdn(&mut self, options: &ResourceOptions, context: &ResolveContext) {
    let version = options
      .version
      .clone()
      .unwrap_or_else(|| context.release_version().to_string());
    self.js_files = vec![cdn_url(&context.cdn_url, &version, AssetKind::Js, options.minified)];
    self.css_files = vec![cdn_url(&context.cdn_url, &version, AssetKind::Css, options.minified)];
    self.messages = cdn_version_messages(options.version.as_deref(), context);
    self.version = Some(version);
  }

  /// Canonical mode, without the `-dev` suffix.
  pub fn mode(&self) -> Mode {
    self.mode
  }

  /// Whether development assets were requested.
  pub fn dev(&self) -> bool {
    self.dev
  }

  /// Mode and dev flag as originally requested.
  pub fn requested_mode(&self) -> RequestedMode {
    RequestedMode {
      mode: self.mode,
      dev: self.dev,
    }
  }

  /// Whether production bundles are the minified builds.
  pub fn minified(&self) -> bool {
    self.minified
  }

  /// CDN release referenced, for `cdn` mode.
  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }

  /// Directory relative paths were computed from, for `relative` modes.
  pub fn root_dir(&self) -> Option<&Path> {
    self.root_dir.as_deref()
  }

  /// Server root URL, for `server` modes.
  pub fn root_url(&self) -> Option<&str> {
    self.root_url.as_deref()
  }

  /// JavaScript content to embed directly.
  pub fn js_raw(&self) -> &[RawContent] {
    &self.js_raw
  }

  /// CSS content to embed directly.
  pub fn css_raw(&self) -> &[RawContent] {
    &self.css_raw
  }

  /// JavaScript files or URLs to reference.
  pub fn js_files(&self) -> &[String] {
    &self.js_files
  }

  /// CSS files or URLs to reference.
  pub fn css_files(&self) -> &[String] {
    &self.css_files
  }

  /// Non-fatal diagnostics collected during resolution.
  pub fn messages(&self) -> &[Message] {
    &self.messages
  }

  /// Wrap `code` so it runs once the page, and in dev modes the module loader, is ready.
  pub fn js_wrapper(&self, code: &str) -> String {
    wrapper::js_wrapper(code, self.dev)
  }

  /// Serialisable snapshot of the resolved configuration.
  pub fn summary(&self) -> ResourceSummary {
    ResourceSummary {
      mode: self.mode,
      dev: self.dev,
      minified: self.minified,
      version: self.version.clone(),
      root_dir: self.root_dir.clone(),
      root_url: self.root_url.clone(),
      js_raw: self.js_raw.clone(),
      css_raw: self.css_raw.clone(),
      js_files: self.js_files.clone(),
      css_files: self.css_files.clone(),
      messages: self.messages.clone(),
    }
  }
}

/// Bundle filenames, relative to the asset directory, a configuration refers to.
#[derive(Debug, Default)]
struct Bundles {
  js: Vec<String>,
  css: Vec<String>,
}

impl Bundles {
  fn list(
    lister: &dyn AssetLister,
    variant: BundleVariant,
    asset_dir: &Path,
  ) -> Result<Self, ResourceError> {
    let require = |kind: AssetKind| -> Result<Vec<String>, ResourceError> {
      let names = lister.list(kind, variant)?;
      if names.is_empty() {
        return Err(ResourceError::MissingBundle {
          kind,
          dir: asset_dir.to_path_buf(),
        });
      }
      Ok(names)
    };

    Ok(Self {
      js: require(AssetKind::Js)?,
      css: require(AssetKind::Css)?,
    })
  }

  fn canonical(variant: BundleVariant) -> Self {
    Self {
      js: bundle_files(AssetKind::Js, variant),
      css: bundle_files(AssetKind::Css, variant),
    }
  }
}

/// How link-based modes turn an asset-relative filename into a reference.
enum Addressing<'a> {
  Server { root_url: String },
  Relative { asset_dir: &'a Path, root_dir: PathBuf },
  Absolute { asset_dir: &'a Path },
}

impl Addressing<'_> {
  fn locate(&self, name: &str) -> Result<String, ResourceError> {
    match self {
      Addressing::Server { root_url } => Ok(server_static_url(root_url, name)),
      Addressing::Relative { asset_dir, root_dir } => {
        let target = asset_dir.join(name);
        relative_path(&target, root_dir)
          .map(|path| to_url_path(&path))
          .ok_or_else(|| ResourceError::UnrelatedPaths {
            target,
            base: root_dir.clone(),
          })
      }
      Addressing::Absolute { asset_dir } => Ok(to_url_path(&asset_dir.join(name))),
    }
  }

  fn locate_all(&self, names: &[String]) -> Result<Vec<String>, ResourceError> {
    names.iter().map(|name| self.locate(name)).collect()
  }
}

fn variant_for(requested: RequestedMode, minified: bool) -> BundleVariant {
  if requested.dev {
    BundleVariant::Dev
  } else {
    BundleVariant::Production { minified }
  }
}

fn validate_parameters(options: &ResourceOptions, requested: RequestedMode) -> Result<(), ResourceError> {
  for parameter in options.supplied_parameters() {
    let allowed = parameter.allowed_modes();
    if !allowed.contains(&requested.mode) {
      return Err(ResourceError::InvalidParameter {
        parameter,
        mode: options.mode.clone(),
        allowed: describe_modes(allowed),
      });
    }
  }
  Ok(())
}

fn describe_modes(modes: &[Mode]) -> String {
  modes
    .iter()
    .map(|mode| {
      if mode.supports_dev() {
        format!("'{mode}(-dev)'")
      } else {
        format!("'{mode}'")
      }
    })
    .collect::<Vec<_>>()
    .join(" or ")
}

fn embed_bundles(asset_dir: &Path, names: &[String]) -> Vec<RawContent> {
  names
    .iter()
    .map(|name| RawContent::Bundle(asset_dir.join(name)))
    .collect()
}

fn require_config(base_url: &str) -> String {
  format!("require.config({{ baseUrl: \"{base_url}\" }});")
}

/// Warn when a specific CDN release is requested from an unreleased library build.
fn cdn_version_messages(requested: Option<&str>, context: &ResolveContext) -> Vec<Message> {
  let Some(requested) = requested else {
    return Vec::new();
  };
  if requested == context.library_version || !context.is_development_version() {
    return Vec::new();
  }

  vec![Message::warn(format!(
    "Requesting CDN BokehJS version '{}' from Bokeh development version '{}'. \
     This configuration is unsupported and may not work!",
    requested, context.library_version
  ))]
}
