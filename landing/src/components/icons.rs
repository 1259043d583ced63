//! Inline SVG icons (24x24 outline, stroke-based).

use leptos::prelude::*;

/// Renders an inline outline icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CHECK class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path></path>
        </svg>
    }
}

// ============================================================================
// Section icons
// ============================================================================

pub const ICON_USERS: &str = "M16 21v-2a4 4 0 00-8 0v2M12 11a4 4 0 100-8 4 4 0 000 8zm6 8a6 6 0 10-12 0v2a2 2 0 002 2h8a2 2 0 002-2v-2z";

pub const ICON_CLOCK: &str = "M12 8v4l3 3m6 1a9 9 0 11-18 0 9 9 0 0118 0z";

pub const ICON_CHECK: &str = "M5 13l4 4L19 7";

pub const ICON_USER: &str = "M9 17v-2a4 4 0 018 0v2M12 11a4 4 0 100-8 4 4 0 000 8z";

pub const ICON_BELL: &str = "M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6 6 0 10-12 0v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9";

pub const ICON_BADGE: &str = "M17 9V7a5 5 0 00-10 0v2a5 5 0 0010 0zM5 15a7 7 0 0014 0v-2a7 7 0 00-14 0v2z";

pub const ICON_INFO: &str = "M13 16h-1v-4h-1m4 0h-1a2 2 0 00-2 2v4a2 2 0 002 2h1a2 2 0 002-2v-4a2 2 0 00-2-2z";

// ============================================================================
// Header controls
// ============================================================================

pub const ICON_SEARCH: &str = "M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z";

pub const ICON_SUN: &str = "M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z";

pub const ICON_MOON: &str = "M21.752 15.002A9.718 9.718 0 0118 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 003 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 009.002-5.998z";

pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";
