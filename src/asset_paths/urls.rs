use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use super::bundle::AssetKind;

/// URL of a versioned bundle on the CDN.
pub fn cdn_url(cdn_base: &str, version: &str, kind: AssetKind, minified: bool) -> String {
  let min = if minified { ".min" } else { "" };
  format!(
    "{}/bokeh-{}{}.{}",
    cdn_base.trim_end_matches('/'),
    version,
    min,
    kind.extension()
  )
}

/// URL of a static asset served by a Bokeh server rooted at `root_url`.
///
/// An empty `relative` yields the static root itself, with a trailing slash.
pub fn server_static_url(root_url: &str, relative: &str) -> String {
  format!(
    "{}bokehjs/static/{}",
    ensure_trailing_slash(root_url),
    relative.trim_start_matches('/')
  )
}

/// Append a `/` to `url` unless it already ends with one.
pub fn ensure_trailing_slash(url: &str) -> Cow<'_, str> {
  if url.ends_with('/') {
    Cow::Borrowed(url)
  } else {
    Cow::Owned(format!("{url}/"))
  }
}

/// Compute `target` relative to `base` without touching the filesystem.
///
/// Both paths are normalised lexically first, so `.` segments are dropped and `..`
/// segments consume their parent. Equal paths produce `.`. Returns `None` when the
/// paths are anchored differently (one absolute, one relative, or different
/// prefixes) or when `base` climbs above its own start, since no lexical answer
/// exists then.
pub fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
  let target = normalise(target);
  let base = normalise(base);

  if anchor(&target) != anchor(&base) {
    return None;
  }
  if base.contains(&Component::ParentDir) {
    return None;
  }

  let common = target
    .iter()
    .zip(base.iter())
    .take_while(|(left, right)| left == right)
    .count();

  let mut result = PathBuf::new();
  for _ in common..base.len() {
    result.push("..");
  }
  for component in &target[common..] {
    result.push(component.as_os_str());
  }

  if result.as_os_str().is_empty() {
    Some(PathBuf::from("."))
  } else {
    Some(result)
  }
}

fn anchor<'a>(components: &'a [Component<'a>]) -> &'a [Component<'a>] {
  let len = components
    .iter()
    .take_while(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
    .count();
  &components[..len]
}

fn normalise(path: &Path) -> Vec<Component<'_>> {
  let mut components = Vec::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match components.last() {
        Some(Component::Normal(_)) => {
          components.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => components.push(component),
      },
      _ => components.push(component),
    }
  }
  components
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builds_versioned_cdn_urls() {
    assert_eq!(
      cdn_url("https://cdn.pydata.org/", "0.4.1", AssetKind::Js, true),
      "https://cdn.pydata.org/bokeh-0.4.1.min.js"
    );
    assert_eq!(
      cdn_url("https://cdn.pydata.org", "0.4.1", AssetKind::Css, false),
      "https://cdn.pydata.org/bokeh-0.4.1.css"
    );
  }

  #[test]
  fn server_urls_tolerate_missing_trailing_slash() {
    assert_eq!(
      server_static_url("http://localhost:5006", "js/bokeh.js"),
      "http://localhost:5006/bokehjs/static/js/bokeh.js"
    );
    assert_eq!(
      server_static_url("http://localhost:5006/", "/js"),
      "http://localhost:5006/bokehjs/static/js"
    );
  }

  #[test]
  fn relative_path_walks_up_to_common_ancestor() {
    let result = relative_path(
      Path::new("/srv/bokeh/static/js/bokeh.js"),
      Path::new("/srv/site/pages"),
    );
    assert_eq!(result, Some(PathBuf::from("../../bokeh/static/js/bokeh.js")));
  }

  #[test]
  fn relative_path_descends_into_children() {
    let result = relative_path(Path::new("/srv/static/./js/bokeh.js"), Path::new("/srv"));
    assert_eq!(result, Some(PathBuf::from("static/js/bokeh.js")));
  }

  #[test]
  fn relative_path_of_identical_paths_is_current_dir() {
    let result = relative_path(Path::new("/srv/static"), Path::new("/srv/x/../static"));
    assert_eq!(result, Some(PathBuf::from(".")));
  }

  #[test]
  fn relative_path_between_relative_paths() {
    let result = relative_path(Path::new("static/js"), Path::new("site/pages"));
    assert_eq!(result, Some(PathBuf::from("../../static/js")));
  }

  #[test]
  fn relative_path_rejects_mixed_anchors() {
    assert_eq!(relative_path(Path::new("/opt/js/bokeh.js"), Path::new("app/docs")), None);
    assert_eq!(relative_path(Path::new("js/bokeh.js"), Path::new("/srv/app")), None);
  }

  #[test]
  fn relative_path_rejects_base_above_its_start() {
    assert_eq!(relative_path(Path::new("static/js"), Path::new("../site")), None);
  }
}
