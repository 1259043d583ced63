use leptos::prelude::*;

use crate::content::{TESTIMONIALS, Testimonial};

#[component]
pub fn Testimonials(
    #[prop(default = TESTIMONIALS)] testimonials: &'static [Testimonial],
) -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section-title">"Social Proof"</h2>
            <p class="section-description">
                "See what our users are saying about ScreenAPI and how it’s transforming their workflow."
            </p>
            <div class="card-grid">
                {testimonials
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="card testimonial" data-key=t.name>
                                <img
                                    class="testimonial-avatar"
                                    src=t.image
                                    alt=t.name
                                    width="64"
                                    height="64"
                                />
                                <blockquote class="testimonial-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                                <figcaption>
                                    <div class="testimonial-name">{t.name}</div>
                                    <div class="testimonial-title">{t.title}</div>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
