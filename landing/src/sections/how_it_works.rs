use leptos::prelude::*;

use crate::components::Icon;
use crate::content::{InfoCard, STEPS};

#[component]
pub fn HowItWorks(#[prop(default = STEPS)] steps: &'static [InfoCard]) -> impl IntoView {
    view! {
        <section id="how-it-works" class="section how-it-works">
            <h2 class="section-title">"How it works"</h2>
            <div class="steps">
                {steps
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="step">
                                <div class="step-icon">
                                    <Icon path=step.icon />
                                </div>
                                <h3 class="step-title">{step.title}</h3>
                                <p class="step-description">{step.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
