//! Root document component - the complete static HTML page
//!
//! The static build has no WebAssembly, so interactivity comes from two
//! inline scripts driven by the `data-*` hooks the components render.

use leptos::prelude::*;

use crate::app::App;
use crate::config::SiteConfig;
use crate::styles::SITE_CSS;

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(config: SiteConfig) -> impl IntoView {
    let lang = config.site.language.clone();
    let title = config.site.title.clone();
    let description = config.site.description.clone();
    let root_class = config.site.theme.root_class();

    view! {
        <html lang=lang class=root_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{SITE_CSS}</style>
                // Apply the stored theme before first paint
                <script>{THEME_INIT_SCRIPT}</script>
            </head>
            <body>
                <App config=config />
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

const THEME_INIT_SCRIPT: &str = r#"
(() => {
  const stored = localStorage.getItem('screenapi-theme');
  if (stored === 'dark' || stored === 'light') {
    document.documentElement.classList.remove('dark', 'light');
    document.documentElement.classList.add(stored);
  }
})();
"#;

/// Billing toggle, theme switch and panel toggles for the static page
const PAGE_SCRIPT: &str = r#"
(() => {
  const root = document.documentElement;

  // 1. Theme switch
  const prefersDark = () => window.matchMedia('(prefers-color-scheme: dark)').matches;
  document.querySelectorAll('[data-role="theme-toggle"]').forEach(btn => {
    btn.addEventListener('click', () => {
      const isDark = root.classList.contains('dark') ||
        (!root.classList.contains('light') && prefersDark());
      const next = isDark ? 'light' : 'dark';
      root.classList.remove('dark', 'light');
      root.classList.add(next);
      localStorage.setItem('screenapi-theme', next);
    });
  });

  // 2. Search panel and mobile nav
  document.querySelectorAll('[data-toggle-panel]').forEach(btn => {
    const panel = document.getElementById(btn.dataset.togglePanel);
    if (!panel) return;
    btn.addEventListener('click', () => {
      const open = panel.classList.toggle('open');
      btn.setAttribute('aria-expanded', String(open));
    });
  });

  // 3. Billing toggle - each option selects its own period
  const selectBilling = (option) => {
    const period = option.dataset.billing;
    document.querySelectorAll('[data-billing]').forEach(b => {
      const active = b === option;
      b.classList.toggle('active', active);
      b.setAttribute('aria-pressed', String(active));
    });
    document.querySelectorAll('.plan-card').forEach(card => {
      card.querySelector('.plan-amount').textContent = '$' + card.dataset[period];
      card.querySelector('.plan-period').textContent = option.dataset.suffix;

      let badge = card.querySelector('.plan-savings');
      const showBadge = period === 'annual' && card.dataset.savings !== '';
      if (!showBadge) {
        if (badge) badge.remove();
        return;
      }
      if (!badge) {
        badge = document.createElement('span');
        badge.className = 'plan-savings';
        card.querySelector('.plan-price').after(badge);
      }
      badge.textContent = 'Save ' + card.dataset.savings + '%';
    });
  };
  document.querySelectorAll('[data-billing]').forEach(option => {
    option.addEventListener('click', () => selectBilling(option));
  });
})();
"#;
