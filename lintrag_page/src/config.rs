//! Render configuration.
//!
//! A [`RenderConfig`] can be built in code or loaded from a JSON file:
//!
//! ```json
//! { "title": "Lintrag", "asset_base": "https://cdn.example.com", "stylesheet": null }
//! ```
//!
//! Missing keys fall back to [`RenderConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Default document title.
pub const DEFAULT_TITLE: &str = "Lintrag | Smart Linen Management";

/// Options for [`crate::render_page`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Contents of the `<title>` element
    pub title: String,
    /// Prefix prepended to every image path (e.g. a CDN origin)
    pub asset_base: String,
    /// External stylesheet href; when `None` the built-in CSS is inlined
    pub stylesheet: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            asset_base: String::new(),
            stylesheet: None,
        }
    }
}

impl RenderConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| PageError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Asset prefix for the component tree.
    pub fn asset_base(&self) -> AssetBase {
        AssetBase::new(&self.asset_base)
    }
}

/// Prefix used to resolve image paths, shared with components via Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetBase(String);

impl AssetBase {
    /// Creates a prefix; a trailing `/` is dropped.
    pub fn new(prefix: &str) -> Self {
        Self(prefix.trim_end_matches('/').to_string())
    }

    /// Full URL for an absolute asset path such as `/images/about.jpg`.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}
