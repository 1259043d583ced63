use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::ICON_CHECK;
use crate::content::{PLANS, Plan};
use crate::pricing::{Billing, BillingPeriod};

#[component]
pub fn PricingSection(
    billing: Billing,
    #[prop(default = PLANS)] plans: &'static [Plan],
) -> impl IntoView {
    view! {
        <section id="pricing" class="section pricing">
            <h2 class="section-title">"Pricing"</h2>
            <div class="billing-toggle" role="group" aria-label="Billing period">
                {BillingPeriod::ALL
                    .into_iter()
                    .map(|period| view! { <BillingOption billing=billing period=period /> })
                    .collect_view()}
            </div>
            <div class="plans">
                {plans
                    .iter()
                    .map(|plan| view! { <PlanCard plan=plan billing=billing /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One side of the billing toggle. Always selects its own period.
#[component]
fn BillingOption(billing: Billing, period: BillingPeriod) -> impl IntoView {
    let select = move |_| match period {
        BillingPeriod::Monthly => billing.set_monthly(),
        BillingPeriod::Annual => billing.set_annual(),
    };

    view! {
        <button
            type="button"
            class=move || if billing.is(period) { "billing-option active" } else { "billing-option" }
            aria-pressed=move || billing.is(period).to_string()
            data-billing=period.as_str()
            data-suffix=period.suffix()
            on:click=select
        >
            {period.label()}
        </button>
    }
}

/// A plan card. Price, unit and savings badge follow the billing handle;
/// the `data-*` attributes carry both price sets for the static page script.
#[component]
pub fn PlanCard(plan: &'static Plan, billing: Billing) -> impl IntoView {
    let display = move || plan.display(billing.period());
    let savings = plan
        .savings_percent()
        .map(|pct| pct.to_string())
        .unwrap_or_default();

    view! {
        <div
            class="plan-card"
            data-plan=plan.name
            data-monthly=plan.monthly_price.to_string()
            data-annual=plan.annual_price.to_string()
            data-savings=savings
        >
            <h3 class="plan-name">{plan.name}</h3>
            <div class="plan-price">
                <span class="plan-amount">{move || display().amount_text()}</span>
                <span class="plan-period">{move || display().suffix}</span>
            </div>
            {move || {
                display()
                    .savings_text()
                    .map(|text| view! { <span class="plan-savings">{text}</span> })
            }}
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <Icon path=ICON_CHECK class="icon icon-xs" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button type="button" class="btn btn-primary plan-choose">
                "Choose Plan"
            </button>
        </div>
    }
}
