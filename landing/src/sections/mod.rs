// Landing page sections, in page order
// Each section is a pure function of the literal copy in `crate::content`
// (plus the billing handle for pricing).

mod cta;
mod hero;
mod how_it_works;
mod pricing;
mod testimonials;
mod use_cases;

pub use cta::CallToAction;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use pricing::{PlanCard, PricingSection};
pub use testimonials::Testimonials;
pub use use_cases::UseCases;
