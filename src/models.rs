//! Data structures produced while resolving a resource configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Severity attached to a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  /// The configuration is usable but may not behave as expected.
  Warn,
}

/// Non-fatal diagnostic emitted while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
  /// Human readable message text.
  pub text: String,
  /// Severity of the diagnostic.
  #[serde(rename = "type")]
  pub severity: Severity,
}

impl Message {
  /// Build a warning message.
  pub fn warn(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      severity: Severity::Warn,
    }
  }
}

/// Content that should be embedded directly into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RawContent {
  /// Local bundle file whose contents the embedder inlines.
  Bundle(PathBuf),
  /// Literal script text generated during resolution.
  Script(String),
}

/// Serialisable snapshot of a resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
  /// Canonical mode without the `-dev` suffix.
  pub mode: Mode,
  /// Whether development assets were requested.
  pub dev: bool,
  /// Whether minified bundles were selected.
  pub minified: bool,
  /// CDN release referenced, for `cdn` mode.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  /// Directory relative paths were computed from, for `relative` modes.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root_dir: Option<PathBuf>,
  /// Server root URL, for `server` modes.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root_url: Option<String>,
  /// Raw JavaScript content to embed.
  pub js_raw: Vec<RawContent>,
  /// Raw CSS content to embed.
  pub css_raw: Vec<RawContent>,
  /// JavaScript files or URLs to reference.
  pub js_files: Vec<String>,
  /// CSS files or URLs to reference.
  pub css_files: Vec<String>,
  /// Diagnostics collected during resolution.
  pub messages: Vec<Message>,
}
