use leptos::prelude::*;

use crate::components::Icon;
use crate::content::{InfoCard, USE_CASES};

#[component]
pub fn UseCases(#[prop(default = USE_CASES)] cases: &'static [InfoCard]) -> impl IntoView {
    view! {
        <section id="use-cases" class="section section-alt use-cases">
            <h2 class="section-title">"Use Cases"</h2>
            <div class="card-grid">
                {cases
                    .iter()
                    .map(|case| {
                        view! {
                            <div class="card use-case">
                                <div class="card-icon">
                                    <Icon path=case.icon class="icon icon-sm" />
                                </div>
                                <h3 class="card-title">{case.title}</h3>
                                <p class="card-description">{case.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
