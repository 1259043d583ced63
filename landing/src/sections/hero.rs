use leptos::prelude::*;

use crate::components::Link;
use crate::content::{GET_STARTED_ANCHOR, HERO_IMAGE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    "Instantly Capture "
                    <span class="hero-title-accent">"Screenshots"</span>
                    " with Our API"
                </h1>
                <p class="hero-description">
                    "The fastest, most reliable way to automate screenshots for your apps, dashboards, and workflows. "
                    "Start saving time and boost your productivity today."
                </p>
                <Link href=GET_STARTED_ANCHOR class="btn btn-primary btn-large">
                    "Get Started Free"
                </Link>
            </div>
            <div class="hero-media">
                <img
                    class="hero-image"
                    src=HERO_IMAGE
                    alt="Product Screenshot"
                    width="520"
                    height="340"
                />
            </div>
        </section>
    }
}
