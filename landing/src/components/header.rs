//! Site header: brand, navigation, collaborator controls and auth links.

use leptos::prelude::*;

use super::{HeaderControls, Link};
use crate::config::{HeaderTitle, NavLink, SiteMetadata};

/// Header entries that get a desktop nav link: everything except the root.
pub fn visible_nav_links(links: &[NavLink]) -> Vec<NavLink> {
    links.iter().filter(|link| !link.is_root()).cloned().collect()
}

pub fn header_class(sticky: bool) -> &'static str {
    if sticky {
        "site-header sticky"
    } else {
        "site-header"
    }
}

/// Persistent top-of-page header.
///
/// Without `controls` the standard search, theme and mobile-nav widgets
/// are used.
#[component]
pub fn SiteHeader(
    metadata: SiteMetadata,
    nav_links: Vec<NavLink>,
    #[prop(optional)] controls: Option<HeaderControls>,
) -> impl IntoView {
    let controls = controls
        .unwrap_or_else(|| HeaderControls::standard(&metadata.search_action, &nav_links));
    let brand_label = metadata.header_title.label(&metadata.title).to_string();

    let brand = match metadata.header_title {
        HeaderTitle::Text(text) => view! { <div class="header-title">{text}</div> }.into_any(),
        HeaderTitle::Markup { html } => view! { <div class="header-title" inner_html=html></div> }.into_any(),
    };

    view! {
        <header class=header_class(metadata.sticky_nav)>
            <div class="header-inner">
                <Link href="/" class="header-brand" aria_label=brand_label>
                    <img class="header-logo" src=metadata.logo alt="" width="32" height="32" />
                    {brand}
                </Link>
                <div class="header-actions">
                    <nav class="header-nav" aria-label="Main">
                        {visible_nav_links(&nav_links)
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <Link href=link.href class="nav-link">
                                        {link.title}
                                    </Link>
                                }
                            })
                            .collect_view()}
                    </nav>
                    {controls.search.run()}
                    {controls.theme_switch.run()}
                    <div class="auth-links">
                        <Link href="/signin" class="btn btn-outline">"Sign In"</Link>
                        <Link href="/signup" class="btn btn-primary">"Sign Up"</Link>
                    </div>
                    {controls.mobile_nav.run()}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_nav_links;

    #[test]
    fn root_entry_is_dropped_and_order_kept() {
        let links = vec![
            NavLink::new("Blog", "/blog"),
            NavLink::new("Home", "/"),
            NavLink::new("Docs", "/docs"),
            NavLink::new("About", "/about"),
        ];
        let visible = visible_nav_links(&links);
        let titles: Vec<_> = visible.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Blog", "Docs", "About"]);
    }

    #[test]
    fn only_exact_root_is_dropped() {
        let links = vec![
            NavLink::new("Pricing", "/#pricing"),
            NavLink::new("Home", "/"),
        ];
        assert_eq!(visible_nav_links(&links), vec![NavLink::new("Pricing", "/#pricing")]);
        assert_eq!(visible_nav_links(&default_nav_links()).len(), 4);
        assert!(visible_nav_links(&[]).is_empty());
    }

    #[test]
    fn sticky_flag_selects_display_mode() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header sticky");
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;
        use leptos::children::ViewFn;
        use leptos::reactive::owner::Owner;
        use leptos::tachys::view::RenderHtml;

        fn stub_controls() -> HeaderControls {
            HeaderControls {
                search: ViewFn::from(|| view! { <span class="stub">"search"</span> }),
                theme_switch: ViewFn::from(|| view! { <span class="stub">"theme"</span> }),
                mobile_nav: ViewFn::from(|| view! { <span class="stub">"mobile"</span> }),
            }
        }

        fn render(metadata: SiteMetadata, nav_links: Vec<NavLink>) -> String {
            Owner::new().with(|| {
                view! { <SiteHeader metadata=metadata nav_links=nav_links controls=stub_controls() /> }
                    .to_html()
            })
        }

        #[test]
        fn renders_filtered_nav_in_order() {
            let html = render(SiteMetadata::default(), default_nav_links());
            assert_eq!(html.matches(r#"class="nav-link""#).count(), 4);

            let docs = html.find(r#"href="/docs""#).expect("docs");
            let pricing = html.find(r#"href="/#pricing""#).expect("pricing");
            let blog = html.find(r#"href="/blog""#).expect("blog");
            let about = html.find(r#"href="/about""#).expect("about");
            assert!(docs < pricing && pricing < blog && blog < about);
            assert!(!html.contains(">Home<"));
        }

        #[test]
        fn places_controls_in_order() {
            let html = render(SiteMetadata::default(), default_nav_links());
            let nav = html.find("header-nav").expect("nav");
            let search = html.find(">search<").expect("search");
            let theme = html.find(">theme<").expect("theme");
            let sign_in = html.find(">Sign In<").expect("sign in");
            let sign_up = html.find(">Sign Up<").expect("sign up");
            let mobile = html.find(">mobile<").expect("mobile");
            assert!(nav < search && search < theme && theme < sign_in);
            assert!(sign_in < sign_up && sign_up < mobile);
            assert!(html.contains(r#"href="/signin""#));
            assert!(html.contains(r#"href="/signup""#));
        }

        #[test]
        fn sticky_and_title_variants() {
            let metadata = SiteMetadata {
                sticky_nav: true,
                header_title: HeaderTitle::Markup {
                    html: "<em>Screen</em>API".into(),
                },
                ..SiteMetadata::default()
            };
            let html = render(metadata.clone(), vec![]);
            assert!(html.contains(r#"class="site-header sticky""#));
            assert!(html.contains("<em>Screen</em>API"));
            assert!(html.contains(&format!(r#"aria-label="{}""#, metadata.title)));

            let html = render(SiteMetadata::default(), vec![]);
            assert!(html.contains(r#"class="site-header""#));
            assert!(html.contains(r#"<div class="header-title">ScreenAPI</div>"#));
        }

        #[test]
        fn standard_controls_are_used_by_default() {
            let html = Owner::new().with(|| {
                view! { <SiteHeader metadata=SiteMetadata::default() nav_links=default_nav_links() /> }
                    .to_html()
            });
            assert!(html.contains(r#"data-role="theme-toggle""#));
            assert!(html.contains(r#"id="search-panel""#));
            assert!(html.contains(r#"id="mobile-nav-panel""#));
        }
    }
}
