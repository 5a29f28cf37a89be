//! Helpers for naming, listing and addressing BokehJS asset files.
//!
//! The responsibilities are split so that bundle naming, directory listing and the
//! per-mode addressing rules (CDN URLs, server URLs, relative and absolute paths) can
//! be tested independently of the resolver that combines them.

mod bundle;
mod lister;
mod urls;

pub use bundle::{AssetKind, BundleVariant, bundle_files, to_url_path};
pub use lister::{AssetLister, BundledLayout, StaticDirLister};
pub use urls::{cdn_url, ensure_trailing_slash, relative_path, server_static_url};
