//! Header collaborator widgets: theme switch, search button, mobile nav.
//!
//! The header only knows these as [`ViewFn`]s bundled in
//! [`HeaderControls`]. Each widget carries `data-role` / `data-toggle-panel`
//! hooks for the static page script and signal-driven handlers for the
//! browser build.

use leptos::children::ViewFn;
use leptos::prelude::*;

use super::icons::{ICON_CLOSE, ICON_MENU, ICON_MOON, ICON_SEARCH, ICON_SUN};
use super::{Icon, Link};
use crate::config::{NavLink, ThemeMode};

/// `localStorage` key holding the visitor's theme choice.
pub const THEME_STORAGE_KEY: &str = "screenapi-theme";

pub const SEARCH_PANEL_ID: &str = "search-panel";
pub const MOBILE_NAV_PANEL_ID: &str = "mobile-nav-panel";

/// The renderable controls a [`super::SiteHeader`] places on its right side.
#[derive(Clone)]
pub struct HeaderControls {
    pub search: ViewFn,
    pub theme_switch: ViewFn,
    pub mobile_nav: ViewFn,
}

impl HeaderControls {
    /// The production widgets.
    pub fn standard(search_action: &str, nav_links: &[NavLink]) -> Self {
        let action = search_action.to_string();
        let links = nav_links.to_vec();
        Self {
            search: ViewFn::from(move || view! { <SearchButton action=action.clone() /> }),
            theme_switch: ViewFn::from(|| view! { <ThemeSwitch /> }),
            mobile_nav: ViewFn::from(move || view! { <MobileNav links=links.clone() /> }),
        }
    }
}

/// Theme a click switches to, given what the visitor is looking at now.
///
/// Without an explicit root class the OS preference decides what is showing.
pub fn next_theme(root_dark: bool, root_light: bool, prefers_dark: bool) -> ThemeMode {
    let showing_dark = root_dark || (!root_light && prefers_dark);
    if showing_dark { ThemeMode::Light } else { ThemeMode::Dark }
}

/// Theme to apply on load: a remembered choice wins over the configured one.
pub fn initial_theme(stored: Option<&str>, configured: ThemeMode) -> ThemeMode {
    match stored {
        Some("dark") => ThemeMode::Dark,
        Some("light") => ThemeMode::Light,
        _ => configured,
    }
}

fn set_root_theme(classes: &web_sys::DomTokenList, theme: ThemeMode) {
    let _ = classes.toggle_with_force("dark", theme == ThemeMode::Dark);
    let _ = classes.toggle_with_force("light", theme == ThemeMode::Light);
}

/// Put the remembered (or configured) theme class on `<html>` (browser build).
pub fn apply_initial_theme(configured: ThemeMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return;
    };

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    set_root_theme(&root.class_list(), initial_theme(stored.as_deref(), configured));
}

/// Switch `<html>` to the opposite of the visible theme and remember it.
fn toggle_document_theme() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return;
    };

    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    let classes = root.class_list();
    let next = next_theme(classes.contains("dark"), classes.contains("light"), prefers_dark);
    set_root_theme(&classes, next);

    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, next.root_class());
    }
}

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    view! {
        <button
            type="button"
            class="icon-button theme-switch"
            data-role="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| toggle_document_theme()
        >
            <span class="theme-icon-light"><Icon path=ICON_SUN /></span>
            <span class="theme-icon-dark"><Icon path=ICON_MOON /></span>
        </button>
    }
}

#[component]
pub fn SearchButton(#[prop(into)] action: String) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="search">
            <button
                type="button"
                class="icon-button search-button"
                aria-label="Search"
                aria-controls=SEARCH_PANEL_ID
                aria-expanded=move || open.get().to_string()
                data-toggle-panel=SEARCH_PANEL_ID
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <Icon path=ICON_SEARCH />
            </button>
            <form
                id=SEARCH_PANEL_ID
                class=move || if open.get() { "search-panel open" } else { "search-panel" }
                role="search"
                action=action
                method="get"
            >
                <input type="search" name="q" placeholder="Search docs and guides" aria-label="Search query" />
            </form>
        </div>
    }
}

#[component]
pub fn MobileNav(links: Vec<NavLink>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="mobile-nav">
            <button
                type="button"
                class="icon-button mobile-nav-toggle"
                aria-label="Toggle menu"
                aria-controls=MOBILE_NAV_PANEL_ID
                aria-expanded=move || open.get().to_string()
                data-toggle-panel=MOBILE_NAV_PANEL_ID
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="mobile-nav-open-icon"><Icon path=ICON_MENU /></span>
                <span class="mobile-nav-close-icon"><Icon path=ICON_CLOSE /></span>
            </button>
            <nav
                id=MOBILE_NAV_PANEL_ID
                class=move || if open.get() { "mobile-nav-panel open" } else { "mobile-nav-panel" }
                aria-label="Mobile"
            >
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <Link href=link.href class="mobile-nav-link">
                                {link.title}
                            </Link>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn theme_switch_exposes_script_hook() {
        let html = view! { <ThemeSwitch /> }.to_html();
        assert!(html.contains(r#"data-role="theme-toggle""#));
        assert!(html.contains(r#"aria-label="Toggle dark mode""#));
    }

    #[test]
    fn search_panel_posts_to_configured_action() {
        let html = Owner::new().with(|| view! { <SearchButton action="/find" /> }.to_html());
        assert!(html.contains(r#"action="/find""#));
        assert!(html.contains(r#"name="q""#));
        assert!(html.contains(r#"data-toggle-panel="search-panel""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("search-panel open"));
    }

    #[test]
    fn mobile_nav_lists_every_link() {
        let links = vec![NavLink::new("Home", "/"), NavLink::new("Blog", "/blog")];
        let html = Owner::new().with(|| view! { <MobileNav links=links /> }.to_html());
        assert_eq!(html.matches("mobile-nav-link").count(), 2);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/blog""#));
    }
}
