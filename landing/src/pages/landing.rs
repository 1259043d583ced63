// Landing page - the six marketing sections in fixed order
use leptos::prelude::*;

use crate::pricing::Billing;
use crate::sections::{CallToAction, Hero, HowItWorks, PricingSection, Testimonials, UseCases};

/// Takes no inputs. Owns the billing selection for its pricing section;
/// every instance starts on monthly billing.
#[component]
pub fn LandingPage() -> impl IntoView {
    let billing = Billing::new();

    view! {
        <Hero />
        <HowItWorks />
        <UseCases />
        <PricingSection billing=billing />
        <Testimonials />
        <CallToAction />
    }
}
