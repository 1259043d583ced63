//! Anchor wrapper that knows internal routes from external sites.

use leptos::prelude::*;

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-site route, e.g. `/signin`
    Internal,
    /// In-page anchor, e.g. `#get-started`
    Anchor,
    /// Anything else; opened in a new tab
    External,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        if href.starts_with("//") {
            Self::External
        } else if href.starts_with('/') {
            Self::Internal
        } else if href.starts_with('#') {
            Self::Anchor
        } else {
            Self::External
        }
    }
}

#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let external = LinkKind::classify(&href) == LinkKind::External;

    view! {
        <a
            href=href
            class=class
            aria-label=aria_label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}
