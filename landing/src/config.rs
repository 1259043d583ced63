//! Site configuration: metadata and header navigation.
//!
//! Loaded from an optional `site.toml`. Every key has a built-in default,
//! so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::ensure_unique;
use crate::error::{ContentError, Result, SiteError};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMetadata,
    /// Header navigation, in display order.
    pub nav: Vec<NavLink>,
}

/// Site-wide metadata consumed by the document head and the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Document `<title>`
    pub title: String,
    /// Brand shown next to the logo
    pub header_title: HeaderTitle,
    pub description: String,
    pub language: String,
    pub logo: String,
    /// Pin the header to the top of the viewport
    pub sticky_nav: bool,
    pub theme: ThemeMode,
    /// Form action for the header search panel
    pub search_action: String,
}

/// Header brand: plain text, or markup inserted as-is.
///
/// In TOML either `header_title = "ScreenAPI"` or
/// `header_title = { html = "<b>Screen</b>API" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderTitle {
    Text(String),
    Markup { html: String },
}

/// Initial colour scheme before the visitor picks one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// A header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Whether this entry points at the site root.
    pub fn is_root(&self) -> bool {
        self.href == "/"
    }
}

impl ThemeMode {
    /// Class placed on `<html>`; empty lets `prefers-color-scheme` decide.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::System => "",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl HeaderTitle {
    /// Accessible name for the brand link. Markup titles fall back to the
    /// document title.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Text(text) => text,
            Self::Markup { .. } => fallback,
        }
    }
}

impl Default for HeaderTitle {
    fn default() -> Self {
        Self::Text("ScreenAPI".to_string())
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "ScreenAPI - Screenshot API".to_string(),
            header_title: HeaderTitle::default(),
            description: "Instantly capture screenshots of any web page with a single API call."
                .to_string(),
            language: "en-us".to_string(),
            logo: "/static/images/logo.png".to_string(),
            sticky_nav: false,
            theme: ThemeMode::System,
            search_action: "/search".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata::default(),
            nav: default_nav_links(),
        }
    }
}

/// Navigation used when no config names one.
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Docs", "/docs"),
        NavLink::new("Pricing", "/#pricing"),
        NavLink::new("Blog", "/blog"),
        NavLink::new("About", "/about"),
    ]
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a specific path. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), nav_links = config.nav.len(), "loaded site config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Nav titles are rendering keys and must be unique; every link needs a target.
    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        ensure_unique("nav link", self.nav.iter().map(|link| link.title.as_str()))?;
        if let Some(link) = self.nav.iter().find(|link| link.href.trim().is_empty()) {
            return Err(ContentError::EmptyHref {
                title: link.title.clone(),
            });
        }
        Ok(())
    }
}
