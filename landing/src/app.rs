// Site shell shared by the static document and the browser mount

use leptos::prelude::*;

use crate::components::SiteHeader;
use crate::config::SiteConfig;
use crate::pages::LandingPage;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    view! {
        <SiteHeader metadata=config.site nav_links=config.nav />
        <main class="site-main">
            <LandingPage />
        </main>
    }
}
