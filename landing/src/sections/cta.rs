use leptos::prelude::*;

use crate::components::Link;
use crate::content::GET_STARTED_ANCHOR;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="get-started" class="cta">
            <h2 class="cta-title">"Ready to get started?"</h2>
            <p class="cta-description">
                "Create your free account and start capturing screenshots with our powerful API in minutes."
            </p>
            <Link href=GET_STARTED_ANCHOR class="btn btn-inverse btn-large">
                "Get Started Now"
            </Link>
        </section>
    }
}
