//! Behaviour of resolved resource configurations across every delivery mode.

use bokehjs_resources::{
  Message, Mode, Parameter, ResolveContext, ResourceConfig, ResourceError, ResourceOptions,
};

const WRAPPER: &str = "$(function() {\n    foo\n});";

const WRAPPER_DEV: &str = "require([\"jquery\", \"main\"], function($, Bokeh) {\n    $(function() {\n        foo\n    });\n});";

fn context() -> ResolveContext {
  ResolveContext::new("1.0")
}

fn resolve(mode: &str) -> ResourceConfig {
  ResourceConfig::new(&ResourceOptions::new(mode), &context()).expect("mode should resolve")
}

fn assert_link_mode(mode: &str, canonical: Mode) {
  let r = resolve(mode);
  assert_eq!(r.mode(), canonical);
  assert!(!r.dev());
  assert!(r.js_raw().is_empty());
  assert!(r.css_raw().is_empty());
  assert!(r.messages().is_empty());
}

fn assert_dev_mode(mode: &str, canonical: Mode) {
  let r = resolve(mode);
  assert_eq!(r.mode(), canonical);
  assert!(r.dev());
  assert_eq!(r.js_raw().len(), 1);
  assert!(r.css_raw().is_empty());
  assert!(r.messages().is_empty());
}

#[test]
fn default_options_resolve_inline() {
  let r = ResourceConfig::new(&ResourceOptions::default(), &context()).unwrap();
  assert_eq!(r.mode(), Mode::Inline);
  assert_eq!(ResourceConfig::inline(&context()), r);
}

#[test]
fn preset_configurations() {
  assert_eq!(ResourceConfig::cdn(&context()).mode(), Mode::Cdn);
  assert_eq!(ResourceConfig::inline(&context()).mode(), Mode::Inline);
}

#[test]
fn inline() {
  let r = resolve("inline");
  assert_eq!(r.mode(), Mode::Inline);
  assert!(!r.dev());
  assert_eq!(r.js_raw().len(), 1);
  assert_eq!(r.css_raw().len(), 1);
  assert!(r.messages().is_empty());
}

#[test]
fn cdn() {
  let r = ResourceConfig::new(&ResourceOptions::new("cdn").version("1.0"), &ResolveContext::new("1.0"))
    .unwrap();
  assert_eq!(r.mode(), Mode::Cdn);
  assert!(!r.dev());
  assert!(r.js_raw().is_empty());
  assert!(r.css_raw().is_empty());
  assert!(r.messages().is_empty());

  let r = ResourceConfig::new(
    &ResourceOptions::new("cdn").version("1.0"),
    &ResolveContext::new("1.0-1-abc"),
  )
  .unwrap();
  assert_eq!(r.messages(), &[Message::warn(
    "Requesting CDN BokehJS version '1.0' from Bokeh development version '1.0-1-abc'. \
     This configuration is unsupported and may not work!"
  )]);
}

#[test]
fn cdn_without_requested_version_has_no_messages() {
  let r = ResourceConfig::new(&ResourceOptions::new("cdn"), &ResolveContext::new("1.0-1-abc")).unwrap();
  assert!(r.messages().is_empty());
}

#[test]
fn link_modes() {
  assert_link_mode("server", Mode::Server);
  assert_link_mode("relative", Mode::Relative);
  assert_link_mode("absolute", Mode::Absolute);
}

#[test]
fn dev_modes() {
  assert_dev_mode("server-dev", Mode::Server);
  assert_dev_mode("relative-dev", Mode::Relative);
  assert_dev_mode("absolute-dev", Mode::Absolute);
}

#[test]
fn link_modes_reference_files() {
  for mode in ["cdn", "server", "server-dev", "relative", "relative-dev", "absolute", "absolute-dev"] {
    let r = resolve(mode);
    assert!(!r.js_files().is_empty(), "{mode} should reference JS files");
    assert!(!r.css_files().is_empty(), "{mode} should reference CSS files");
  }
  assert!(resolve("inline").js_files().is_empty());
}

#[test]
fn rejects_unknown_mode() {
  let err = ResourceConfig::new(&ResourceOptions::new("foo"), &context()).unwrap_err();
  assert!(matches!(err, ResourceError::InvalidMode { ref mode } if mode == "foo"));
}

fn assert_parameter_rejected(options: ResourceOptions, expected: Parameter) {
  let mode = options.mode.clone();
  match ResourceConfig::new(&options, &context()) {
    Err(ResourceError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, expected),
    other => panic!("{expected} should be rejected for {mode}, got {other:?}"),
  }
}

#[test]
fn argument_checks() {
  for mode in ["inline", "cdn", "server", "server-dev", "absolute", "absolute-dev"] {
    assert_parameter_rejected(ResourceOptions::new(mode).root_dir("foo"), Parameter::RootDir);
  }

  for mode in ["inline", "server", "server-dev", "relative", "relative-dev", "absolute", "absolute-dev"] {
    assert_parameter_rejected(ResourceOptions::new(mode).version("foo"), Parameter::Version);
  }

  for mode in ["inline", "cdn", "relative", "relative-dev", "absolute", "absolute-dev"] {
    assert_parameter_rejected(ResourceOptions::new(mode).root_url("foo"), Parameter::RootUrl);
  }
}

#[test]
fn accepts_parameters_for_their_modes() {
  for mode in ["relative", "relative-dev"] {
    assert!(ResourceConfig::new(&ResourceOptions::new(mode).root_dir("foo"), &context()).is_ok());
  }
  assert!(ResourceConfig::new(&ResourceOptions::new("cdn").version("foo"), &context()).is_ok());
  for mode in ["server", "server-dev"] {
    assert!(ResourceConfig::new(&ResourceOptions::new(mode).root_url("foo"), &context()).is_ok());
  }
}

#[test]
fn js_wrapper() {
  for mode in ["inline", "server", "cdn", "relative", "absolute"] {
    assert_eq!(resolve(mode).js_wrapper("foo"), WRAPPER);
  }

  for mode in ["server-dev", "relative-dev", "absolute-dev"] {
    assert_eq!(resolve(mode).js_wrapper("foo"), WRAPPER_DEV);
  }
}
