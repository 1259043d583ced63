//! Error types for configuration loading, content validation and site output.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Anything that can go wrong around rendering (rendering itself cannot fail).
#[derive(Error, Debug)]
pub enum SiteError {
    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The site config is not valid TOML for [`crate::config::SiteConfig`]
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The asset tree and the output directory share files
    #[error(
        "asset directory {} overlaps output directory {}",
        assets.display(),
        out.display()
    )]
    AssetsOverlap { assets: PathBuf, out: PathBuf },

    /// Static content or config failed validation
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Defects in the literal page data or the configured navigation.
///
/// These are data-configuration mistakes, caught by `check`, `build` and
/// the test suite rather than at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Two entries of a keyed collection share a name
    #[error("duplicate {collection} entry `{name}`")]
    DuplicateName {
        collection: &'static str,
        name: String,
    },

    /// The annual price is higher than paying monthly for a year
    #[error("plan `{plan}` costs {annual}/yr, more than twelve monthly payments ({full_year})")]
    AnnualAboveMonthly {
        plan: String,
        annual: u32,
        full_year: u64,
    },

    /// Free monthly billing next to a paid annual price
    #[error("plan `{plan}` is free monthly but costs {annual}/yr")]
    FreeMonthlyPaidAnnual { plan: String, annual: u32 },

    /// A plan card would render an empty feature list
    #[error("plan `{plan}` lists no features")]
    NoFeatures { plan: String },

    /// A nav link without a target
    #[error("nav link `{title}` has an empty href")]
    EmptyHref { title: String },
}
