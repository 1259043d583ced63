//! Literal page copy: plans, testimonials, how-it-works steps and use cases.
//!
//! Everything here is fixed at build time. [`validate_plans`] and
//! [`validate_testimonials`] guard the invariants the renderer relies on
//! (unique keys, a real annual discount) and run from `check`, `build` and
//! the test suite.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::components::icons::{
    ICON_BADGE, ICON_BELL, ICON_CHECK, ICON_CLOCK, ICON_INFO, ICON_USER, ICON_USERS,
};
use crate::error::ContentError;

/// A pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub annual_price: u32,
    /// Display order matters.
    pub features: &'static [&'static str],
}

/// A customer quote with an avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
}

/// An icon card used by the how-it-works and use-cases sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data for [`crate::components::Icon`].
    pub icon: &'static str,
}

pub const HERO_IMAGE: &str = "/static/images/github-traffic.png";
pub const GET_STARTED_ANCHOR: &str = "#get-started";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        monthly_price: 4,
        annual_price: 36,
        features: &["100 screenshots/month", "Basic API access", "Email support"],
    },
    Plan {
        name: "Pro",
        monthly_price: 16,
        annual_price: 168,
        features: &[
            "1,000 screenshots/month",
            "Priority API access",
            "Email & Chat support",
        ],
    },
    Plan {
        name: "Business",
        monthly_price: 77,
        annual_price: 924,
        features: &[
            "10,000 screenshots/month",
            "Premium API access",
            "Dedicated support",
        ],
    },
    Plan {
        name: "Enterprise",
        monthly_price: 257,
        annual_price: 3084,
        features: &[
            "Unlimited screenshots",
            "Enterprise API access",
            "Account manager",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alice Johnson",
        title: "Product Manager, Acme Inc.",
        image: "/static/images/avatar.png",
        quote: "ScreenAPI has completely streamlined our reporting workflow. The reliability and speed are unmatched! Highly recommended.",
    },
    Testimonial {
        name: "Carlos Mendes",
        title: "Lead Developer, DevWorks",
        image: "/static/images/sparrowhawk-avatar.jpg",
        quote: "We integrated ScreenAPI in minutes. The API is super easy to use and the support team is fantastic.",
    },
    Testimonial {
        name: "Emily Chen",
        title: "Founder, SaaSly",
        image: "/static/images/ocean.jpeg",
        quote: "Our marketing team loves the automated screenshots. It saves us hours every week and the image quality is superb.",
    },
];

pub const STEPS: &[InfoCard] = &[
    InfoCard {
        title: "Sign Up & Get API Key",
        description: "Create your free account and instantly receive your personal API key to start capturing screenshots.",
        icon: ICON_USERS,
    },
    InfoCard {
        title: "Make a Screenshot Request",
        description: "Send a simple API request with the URL you want to capture. Our service processes it instantly.",
        icon: ICON_CLOCK,
    },
    InfoCard {
        title: "Get Your Image Instantly",
        description: "Receive your screenshot image in seconds—ready to use in your app, dashboard, or workflow.",
        icon: ICON_CHECK,
    },
];

pub const USE_CASES: &[InfoCard] = &[
    InfoCard {
        title: "Automated Reports",
        description: "Generate and embed up-to-date screenshots in your scheduled reports for clients or teams.",
        icon: ICON_USER,
    },
    InfoCard {
        title: "Website Monitoring",
        description: "Keep visual records of your websites or landing pages to detect changes, errors, or downtime.",
        icon: ICON_BELL,
    },
    InfoCard {
        title: "Social Proof & Testimonials",
        description: "Show real screenshots of your product, reviews, or user activity to boost trust and conversions.",
        icon: ICON_BADGE,
    },
    InfoCard {
        title: "Workflow Automation",
        description: "Integrate screenshots into your automation tools to streamline documentation, QA, or onboarding.",
        icon: ICON_INFO,
    },
];

/// Report the first name that appears twice.
pub(crate) fn ensure_unique<'a>(
    collection: &'static str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ContentError::DuplicateName {
                collection,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Check the plan table: unique names, at least one feature each, and an
/// annual price that never exceeds twelve monthly payments.
///
/// An annual price exactly equal to twelve months is accepted (the badge
/// then reads "Save 0%") but logged.
pub fn validate_plans(plans: &[Plan]) -> Result<(), ContentError> {
    ensure_unique("plan", plans.iter().map(|p| p.name))?;

    for plan in plans {
        if plan.features.is_empty() {
            return Err(ContentError::NoFeatures {
                plan: plan.name.to_string(),
            });
        }
        if plan.monthly_price == 0 {
            if plan.annual_price > 0 {
                return Err(ContentError::FreeMonthlyPaidAnnual {
                    plan: plan.name.to_string(),
                    annual: plan.annual_price,
                });
            }
            continue;
        }

        let full_year = u64::from(plan.monthly_price) * 12;
        if u64::from(plan.annual_price) > full_year {
            return Err(ContentError::AnnualAboveMonthly {
                plan: plan.name.to_string(),
                annual: plan.annual_price,
                full_year,
            });
        }
        if plan.savings_percent() == Some(0) {
            warn!(plan = plan.name, "annual price carries no discount, badge will read 0%");
        }
    }
    Ok(())
}

/// Check that testimonial names are unique.
pub fn validate_testimonials(testimonials: &[Testimonial]) -> Result<(), ContentError> {
    ensure_unique("testimonial", testimonials.iter().map(|t| t.name))
}
