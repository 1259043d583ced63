//! # screenapi-landing
//!
//! Marketing site for ScreenAPI, the screenshot API: a landing page with
//! hero, how-it-works, use-cases, pricing, testimonials and call-to-action
//! sections under a shared site header.
//!
//! ## Build modes
//!
//! - **`ssr`** (default) - native build. [`render_site`] renders the whole
//!   page to a static HTML document; the `screenapi-landing` binary wraps it
//!   in a small CLI (`build`, `check`, `pricing`).
//! - **`csr`** - browser build for trunk. [`mount`] mounts the same
//!   components with live signals.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use screenapi_landing::{SiteConfig, render_site};
//!
//! let html = render_site(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("How it works"));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal page copy and its validation
//! - [`pricing`] - billing period state and price display derivation
//! - [`config`] - site metadata and header navigation
//! - [`components`] - header, collaborator controls, icons, document shell
//! - [`sections`] / [`pages`] - the landing page itself
//! - [`styles`] - CSS constants

#[cfg(all(feature = "ssr", feature = "csr"))]
compile_error!("features `ssr` and `csr` are mutually exclusive");

#[cfg(not(any(feature = "ssr", feature = "csr")))]
compile_error!("enable either the `ssr` or the `csr` feature");

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod pricing;
pub mod sections;
pub mod styles;

pub use config::{HeaderTitle, NavLink, SiteConfig, SiteMetadata, ThemeMode};
pub use error::{ContentError, Result, SiteError};
pub use pricing::{Billing, BillingPeriod, PriceDisplay};

/// Validate everything the page renders from: the plan table, the
/// testimonials and the configured navigation.
pub fn validate_site(config: &SiteConfig) -> std::result::Result<(), ContentError> {
    content::validate_plans(content::PLANS)?;
    content::validate_testimonials(content::TESTIMONIALS)?;
    config.validate()
}

/// Render the complete landing page as a static HTML document.
///
/// Returns a string starting with `<!DOCTYPE html>`. The billing toggle
/// starts on monthly; the inline page script takes over in the browser.
#[cfg(feature = "ssr")]
pub fn render_site(config: &SiteConfig) -> String {
    use components::SiteDocument;
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <SiteDocument config=config.clone() /> }.to_html()
    });
    tracing::info!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Mount the site into `<body>` (browser build).
#[cfg(feature = "csr")]
pub fn mount() {
    use app::App;
    use leptos::prelude::*;
    use styles::SITE_CSS;

    let config = SiteConfig::default();
    components::apply_initial_theme(config.site.theme);

    leptos::mount::mount_to_body(move || {
        view! {
            <style>{SITE_CSS}</style>
            <App config=config.clone() />
        }
    });
}
