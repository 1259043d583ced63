//! Shared Leptos components.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only)
//! └── App
//!     ├── SiteHeader
//!     │   ├── Link (brand, nav links, Sign In / Sign Up)
//!     │   └── HeaderControls: SearchButton, ThemeSwitch, MobileNav
//!     └── LandingPage
//!         ├── Hero
//!         ├── HowItWorks
//!         ├── UseCases
//!         ├── PricingSection
//!         │   └── PlanCard (per plan)
//!         ├── Testimonials
//!         └── CallToAction
//! ```

mod controls;
#[cfg(feature = "ssr")]
mod document;
mod header;
pub mod icons;
mod link;

pub use controls::{
    HeaderControls, MOBILE_NAV_PANEL_ID, MobileNav, SEARCH_PANEL_ID, SearchButton,
    THEME_STORAGE_KEY, ThemeSwitch, apply_initial_theme, initial_theme, next_theme,
};
#[cfg(feature = "ssr")]
pub use document::SiteDocument;
pub use header::{SiteHeader, header_class, visible_nav_links};
pub use icons::Icon;
pub use link::{Link, LinkKind};
