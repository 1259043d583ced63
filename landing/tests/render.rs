//! Full-page rendering tests for the static build.

#![cfg(feature = "ssr")]

use pretty_assertions::assert_eq;
use screenapi_landing::content::{PLANS, TESTIMONIALS};
use screenapi_landing::{HeaderTitle, NavLink, SiteConfig, SiteMetadata, ThemeMode, render_site};

fn render_default() -> String {
    render_site(&SiteConfig::default())
}

/// Byte offset of `needle`, panicking with a readable message.
fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in rendered page"))
}

mod document {
    use super::*;

    #[test]
    fn has_head_metadata_and_assets() {
        let html = render_default();
        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"lang="en-us""#));
        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.contains("<style>"));
        assert!(html.contains("--accent:"));
        assert!(html.contains("data-billing"));
        assert!(html.contains("screenapi-theme"));
    }

    #[test]
    fn configured_metadata_reaches_the_page() {
        let config = SiteConfig {
            site: SiteMetadata {
                title: "ShotBox".into(),
                description: "Screenshots as a service".into(),
                language: "de".into(),
                theme: ThemeMode::Dark,
                ..SiteMetadata::default()
            },
            ..SiteConfig::default()
        };
        let html = render_site(&config);
        assert!(html.contains("<title>ShotBox</title>"));
        assert!(html.contains(r#"content="Screenshots as a service""#));
        assert!(html.contains(r#"lang="de""#));
        assert!(html.contains(r#"class="dark""#));
    }
}

mod landing_page {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render_default();
        let order = [
            r#"id="hero""#,
            r#"id="how-it-works""#,
            r#"id="use-cases""#,
            r#"id="pricing""#,
            r#"id="testimonials""#,
            r#"id="get-started""#,
        ];
        let positions: Vec<usize> = order.iter().map(|id| position(&html, id)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(position(&html, "site-header") < positions[0]);
    }

    #[test]
    fn static_sections_render_their_copy() {
        let html = render_default();
        assert_eq!(html.matches(r#"class="step""#).count(), 3);
        assert_eq!(html.matches(r#"class="card use-case""#).count(), 4);
        assert!(html.contains("Sign Up &amp; Get API Key"));
        assert!(html.contains("Workflow Automation"));
        assert!(html.contains("Ready to get started?"));
        assert_eq!(html.matches(r##"href="#get-started""##).count(), 2);
    }

    #[test]
    fn first_render_is_monthly() {
        let html = render_default();
        for plan in PLANS {
            assert!(html.contains(&format!(r#"<span class="plan-amount">${}</span>"#, plan.monthly_price)));
        }
        assert_eq!(html.matches(r#"<span class="plan-period">/mo</span>"#).count(), PLANS.len());
        assert!(!html.contains(r#"class="plan-savings""#));
        assert!(html.contains(r#"class="billing-option active" aria-pressed="true" data-billing="monthly""#));
    }

    #[test]
    fn every_render_starts_fresh() {
        assert_eq!(render_default(), render_default());
    }

    #[test]
    fn testimonials_render_once_each() {
        let html = render_default();
        assert_eq!(html.matches(r#"class="card testimonial""#).count(), TESTIMONIALS.len());
        for t in TESTIMONIALS {
            assert!(html.contains(&format!(r#"src="{}""#, t.image)));
            assert_eq!(html.matches(&format!(r#"data-key="{}""#, t.name)).count(), 1);
        }
    }

    #[test]
    fn copy_keeps_original_punctuation() {
        let html = render_default();
        assert!(html.contains("in seconds—ready to use in your app"));
        assert!(html.contains("how it’s transforming their workflow"));
    }

    #[test]
    fn plan_cards_carry_every_billing_script_hook() {
        let html = render_default();
        assert_eq!(html.matches(r#"data-billing="monthly" data-suffix="/mo""#).count(), 1);
        assert_eq!(html.matches(r#"data-billing="annual" data-suffix="/yr""#).count(), 1);

        let cards: Vec<&str> = html.split(r#"<div class="plan-card""#).skip(1).collect();
        assert_eq!(cards.len(), PLANS.len());
        for (card, plan) in cards.iter().zip(PLANS) {
            let savings = plan.savings_percent().map(|p| p.to_string()).unwrap_or_default();
            assert!(card.contains(&format!(r#"data-monthly="{}""#, plan.monthly_price)), "{}", plan.name);
            assert!(card.contains(&format!(r#"data-annual="{}""#, plan.annual_price)), "{}", plan.name);
            assert!(card.contains(&format!(r#"data-savings="{savings}""#)), "{}", plan.name);
            for hook in [r#"class="plan-price""#, r#"class="plan-amount""#, r#"class="plan-period""#] {
                assert!(card.contains(hook), "{} lacks {hook}", plan.name);
            }
        }

        // The page script looks these up by the same names.
        for selector in [".plan-card", ".plan-amount", ".plan-period", ".plan-price", "'plan-savings'", "dataset.suffix", "[data-billing]"] {
            assert!(html.contains(selector), "script lost {selector}");
        }
    }

    #[test]
    fn hero_references_product_image() {
        let html = render_default();
        assert!(html.contains(r#"src="/static/images/github-traffic.png""#));
        assert!(html.contains(r#"alt="Product Screenshot""#));
    }
}

mod header {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_excludes_root_and_keeps_order() {
        let config = SiteConfig {
            nav: vec![
                NavLink::new("Changelog", "/changelog"),
                NavLink::new("Home", "/"),
                NavLink::new("Docs", "/docs"),
            ],
            ..SiteConfig::default()
        };
        let html = render_site(&config);
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 2);
        assert!(position(&html, r#"href="/changelog" class="nav-link""#) < position(&html, r#"href="/docs" class="nav-link""#));
    }

    #[test]
    fn auth_links_and_controls_present() {
        let html = render_default();
        assert!(html.contains(r#"href="/signin""#));
        assert!(html.contains(r#"href="/signup""#));
        assert!(html.contains(r#"data-role="theme-toggle""#));
        assert!(html.contains(r#"action="/search""#));
    }

    #[test]
    fn sticky_and_markup_title_from_config() {
        let config = SiteConfig {
            site: SiteMetadata {
                sticky_nav: true,
                header_title: HeaderTitle::Markup {
                    html: "<strong>Screen</strong>API".into(),
                },
                ..SiteMetadata::default()
            },
            ..SiteConfig::default()
        };
        let html = render_site(&config);
        assert!(html.contains(r#"<header class="site-header sticky">"#));
        assert!(html.contains("<strong>Screen</strong>API"));
    }
}
