//! Delivery modes for BokehJS assets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ResourceError;

const DEV_SUFFIX: &str = "-dev";

/// Canonical delivery strategy for the client-side assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  /// Bundle contents are embedded directly into the page.
  Inline,
  /// Bundles are fetched from the public CDN.
  Cdn,
  /// Bundles are served by a running Bokeh server.
  Server,
  /// Bundles are referenced by paths relative to a root directory.
  Relative,
  /// Bundles are referenced by absolute filesystem paths.
  Absolute,
}

impl Mode {
  /// Every canonical mode, in declaration order.
  pub const ALL: [Mode; 5] = [
    Mode::Inline,
    Mode::Cdn,
    Mode::Server,
    Mode::Relative,
    Mode::Absolute,
  ];

  /// Name used in mode literals and serialised output.
  pub fn as_str(self) -> &'static str {
    match self {
      Mode::Inline => "inline",
      Mode::Cdn => "cdn",
      Mode::Server => "server",
      Mode::Relative => "relative",
      Mode::Absolute => "absolute",
    }
  }

  /// Whether the mode has a `-dev` variant.
  pub fn supports_dev(self) -> bool {
    matches!(self, Mode::Server | Mode::Relative | Mode::Absolute)
  }

  fn from_name(name: &str) -> Option<Self> {
    Mode::ALL.into_iter().find(|mode| mode.as_str() == name)
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A parsed mode literal: the canonical mode plus the development modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestedMode {
  /// Canonical mode with any `-dev` suffix removed.
  pub mode: Mode,
  /// Whether the literal asked for development assets.
  pub dev: bool,
}

impl RequestedMode {
  /// Production variant of `mode`.
  pub fn new(mode: Mode) -> Self {
    Self { mode, dev: false }
  }

  /// Development variant of `mode`, when the mode has one.
  pub fn dev(mode: Mode) -> Option<Self> {
    mode.supports_dev().then_some(Self { mode, dev: true })
  }
}

impl FromStr for RequestedMode {
  type Err = ResourceError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let invalid = || ResourceError::InvalidMode {
      mode: value.to_string(),
    };

    match value.strip_suffix(DEV_SUFFIX) {
      Some(base) => Mode::from_name(base)
        .and_then(RequestedMode::dev)
        .ok_or_else(invalid),
      None => Mode::from_name(value).map(RequestedMode::new).ok_or_else(invalid),
    }
  }
}

impl fmt::Display for RequestedMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.dev {
      write!(f, "{}{}", self.mode, DEV_SUFFIX)
    } else {
      write!(f, "{}", self.mode)
    }
  }
}
