use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bokehjs_resources::asset_paths::StaticDirLister;
use bokehjs_resources::{ResolveContext, ResourceConfig, ResourceSettings};
use clap::Parser;

/// Resolve how BokehJS assets should be delivered and print the result.
///
/// Settings are read from a settings file, then `BOKEH_*` environment variables,
/// then the flags below, each layer overriding the previous one.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Delivery mode: inline, cdn, server(-dev), relative(-dev) or absolute(-dev)
  #[arg(short, long)]
  mode: Option<String>,

  /// BokehJS release to request from the CDN
  #[arg(long)]
  cdn_version: Option<String>,

  /// Directory relative asset paths are computed from
  #[arg(long)]
  root_dir: Option<PathBuf>,

  /// Root URL of the Bokeh server providing the assets
  #[arg(long)]
  root_url: Option<String>,

  /// Reference readable bundles instead of minified ones
  #[arg(long)]
  no_minify: bool,

  /// Settings file (defaults to bokeh-resources.json in the working directory)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Version of the running library used for CDN compatibility checks
  #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
  library_version: String,

  /// Directory holding the production js/ and css/ bundles
  #[arg(long)]
  static_dir: Option<PathBuf>,

  /// Directory holding the development build
  #[arg(long)]
  dev_static_dir: Option<PathBuf>,

  /// Pick bundle filenames present in the static directory
  #[arg(long)]
  scan: bool,

  /// Print CODE wrapped for the resolved mode instead of the configuration
  #[arg(long, value_name = "CODE")]
  wrap: Option<String>,
}

fn main() {
  env_logger::init();

  let cli = Cli::parse();
  if let Err(err) = run(cli) {
    eprintln!("error: {err:#}");
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let working_dir = std::env::current_dir().context("failed to determine working directory")?;

  let settings = match &cli.config {
    Some(path) => ResourceSettings::from_path(path)
      .with_context(|| format!("failed to load settings from {}", path.display()))?,
    None => ResourceSettings::discover(&working_dir),
  };
  let mut options = settings
    .apply_process_env()
    .context("invalid resource settings in environment")?
    .into_options();

  if let Some(mode) = cli.mode {
    options.mode = mode;
  }
  if let Some(version) = cli.cdn_version {
    options.version = Some(version);
  }
  if let Some(root_dir) = cli.root_dir {
    options.root_dir = Some(root_dir);
  }
  if let Some(root_url) = cli.root_url {
    options.root_url = Some(root_url);
  }
  if cli.no_minify {
    options.minified = false;
  }

  let mut context = ResolveContext::new(cli.library_version).with_working_dir(&working_dir);
  if let Some(static_dir) = cli.static_dir {
    context.static_dir = working_dir.join(static_dir);
  }
  if let Some(dev_static_dir) = cli.dev_static_dir {
    context.dev_static_dir = working_dir.join(dev_static_dir);
  }

  log::debug!("resolving resources for mode '{}'", options.mode);
  let resolved = if cli.scan {
    let lister = StaticDirLister::new(&context.static_dir);
    ResourceConfig::with_lister(&options, &context, &lister)
  } else {
    ResourceConfig::new(&options, &context)
  };
  let resources = resolved.context("invalid resource configuration")?;

  for message in resources.messages() {
    log::warn!("{}", message.text);
  }

  match cli.wrap {
    Some(code) => println!("{}", resources.js_wrapper(&code)),
    None => println!(
      "{}",
      serde_json::to_string_pretty(&resources.summary())
        .context("failed to serialise resource configuration")?
    ),
  }

  Ok(())
}
