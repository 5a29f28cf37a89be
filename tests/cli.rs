//! Integration tests for the `bokeh-resources` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
  "BOKEH_RESOURCES",
  "BOKEH_VERSION",
  "BOKEH_ROOTDIR",
  "BOKEH_ROOTURL",
  "BOKEH_MINIFIED",
];

fn command(dir: &TempDir) -> Command {
  let mut cmd = Command::cargo_bin("bokeh-resources").unwrap();
  cmd.current_dir(dir.path());
  for name in ENV_VARS {
    cmd.env_remove(name);
  }
  cmd
}

#[test]
fn prints_resolved_configuration_as_json() {
  let dir = TempDir::new().unwrap();

  command(&dir)
    .args(["--mode", "server-dev", "--root-url", "http://localhost:5006"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"mode\": \"server\""))
    .stdout(predicate::str::contains("\"dev\": true"))
    .stdout(predicate::str::contains(
      "http://localhost:5006/bokehjs/static/js/config.js",
    ));
}

#[test]
fn wraps_code_for_resolved_mode() {
  let dir = TempDir::new().unwrap();

  command(&dir)
    .args(["--mode", "absolute", "--wrap", "foo"])
    .assert()
    .success()
    .stdout("$(function() {\n    foo\n});\n");
}

#[test]
fn reads_settings_file_and_environment() {
  let dir = TempDir::new().unwrap();
  fs::write(
    dir.path().join("bokeh-resources.json"),
    r#"{"mode": "cdn", "version": "0.4.0"}"#,
  )
  .unwrap();

  command(&dir)
    .env("BOKEH_MINIFIED", "false")
    .args(["--library-version", "0.4.1"])
    .assert()
    .success()
    .stdout(predicate::str::contains("bokeh-0.4.0.js"));
}

#[test]
fn fails_for_unknown_mode() {
  let dir = TempDir::new().unwrap();

  command(&dir)
    .args(["--mode", "foo"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid resource configuration"));
}

#[test]
fn fails_for_parameter_outside_its_mode() {
  let dir = TempDir::new().unwrap();

  command(&dir)
    .args(["--mode", "inline", "--root-url", "http://localhost:5006/"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("root_url"));
}

#[test]
fn scan_fails_when_static_dir_has_no_bundles() {
  let dir = TempDir::new().unwrap();
  fs::create_dir(dir.path().join("static")).unwrap();

  command(&dir)
    .args(["--mode", "inline", "--static-dir", "static", "--scan"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no js bundle found in"));
}

#[test]
fn json_reports_server_root_url() {
  let dir = TempDir::new().unwrap();

  command(&dir)
    .args(["--mode", "server", "--root-url", "http://localhost:5006"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"root_url\": \"http://localhost:5006/\""))
    .stdout(predicate::str::contains("\"root_dir\"").not());
}
