//! CSS for the landing page.
//!
//! Light theme by default; `html.dark` (or `prefers-color-scheme: dark`
//! without an explicit `html.light`) switches the palette.

/// Complete stylesheet, inlined into the document head.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --bg-card: #ffffff;
    --text: #111827;
    --text-muted: #4b5563;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-hover: #1d4ed8;
    --accent-soft: #dbeafe;
    --success: #16a34a;
    --radius: 12px;
    --shadow: 0 1px 3px rgba(0, 0, 0, 0.08), 0 1px 2px rgba(0, 0, 0, 0.04);
    --font: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

html.dark {
    --bg: #030712;
    --bg-alt: #111827;
    --bg-card: #030712;
    --text: #f9fafb;
    --text-muted: #d1d5db;
    --border: #1f2937;
    --accent: #60a5fa;
    --accent-hover: #3b82f6;
    --accent-soft: #1e3a8a;
    --success: #4ade80;
}

@media (prefers-color-scheme: dark) {
    html:not(.light) {
        --bg: #030712;
        --bg-alt: #111827;
        --bg-card: #030712;
        --text: #f9fafb;
        --text-muted: #d1d5db;
        --border: #1f2937;
        --accent: #60a5fa;
        --accent-hover: #3b82f6;
        --accent-soft: #1e3a8a;
        --success: #4ade80;
    }
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font);
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }
img { max-width: 100%; height: auto; }

.icon { width: 2rem; height: 2rem; }
.icon-sm { width: 1.75rem; height: 1.75rem; }
.icon-xs { width: 1rem; height: 1rem; }

/* Buttons */
.btn {
    display: inline-block;
    padding: 0.5rem 1rem;
    border-radius: 8px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background 0.15s, color 0.15s;
}
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: var(--accent-hover); }
.btn-outline { border-color: var(--accent); color: var(--accent); }
.btn-outline:hover { background: var(--accent-soft); }
.btn-inverse { background: #fff; color: #1d4ed8; }
.btn-inverse:hover { background: #dbeafe; }
.btn-large { padding: 1rem 2.5rem; font-size: 1.125rem; }

.icon-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.25rem;
    background: none;
    border: none;
    color: var(--text);
    cursor: pointer;
}
.icon-button .icon { width: 1.5rem; height: 1.5rem; }

/* Header */
.site-header {
    width: 100%;
    padding: 2.5rem 0;
    background: var(--bg);
}
.site-header.sticky {
    position: sticky;
    top: 0;
    z-index: 50;
}
.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 4rem;
}
.header-brand { display: flex; align-items: center; gap: 0.75rem; }
.header-title { font-size: 1.5rem; font-weight: 600; }
.header-actions { display: flex; align-items: center; gap: 1.5rem; }
.header-nav {
    display: flex;
    gap: 1rem;
    max-width: 24rem;
    overflow-x: auto;
}
.nav-link { font-weight: 500; }
.nav-link:hover { color: var(--accent); }
.auth-links { display: flex; gap: 0.5rem; margin-left: 1rem; }

html.dark .theme-icon-light,
html:not(.dark) .theme-icon-dark { display: none; }

.search { position: relative; }
.search-panel {
    display: none;
    position: absolute;
    right: 0;
    top: 2.5rem;
    z-index: 60;
}
.search-panel.open { display: block; }
.search-panel input {
    width: 16rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg-card);
    color: var(--text);
}

.mobile-nav { display: none; }
.mobile-nav-close-icon { display: none; }
.mobile-nav-panel {
    display: none;
    position: fixed;
    inset: 0 0 0 auto;
    width: 80%;
    padding: 6rem 2rem;
    flex-direction: column;
    gap: 1.5rem;
    background: var(--bg);
    z-index: 70;
}
.mobile-nav-panel.open { display: flex; }
.mobile-nav-link { font-size: 1.5rem; font-weight: 700; }

@media (max-width: 640px) {
    .header-inner { padding: 0 1.5rem; }
    .header-nav, .header-title, .auth-links { display: none; }
    .mobile-nav { display: block; }
}

/* Sections */
.section {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 5rem 1.5rem;
    border-top: 1px solid var(--border);
}
.section-alt { background: var(--bg-alt); }
.section-title {
    font-size: 2.5rem;
    font-weight: 700;
    margin: 0 0 3rem;
    text-align: center;
}
.section-description {
    max-width: 42rem;
    margin: -2rem 0 3rem;
    text-align: center;
    color: var(--text-muted);
    font-size: 1.125rem;
}

.hero {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    min-height: 80vh;
    padding: 4rem;
    background: var(--bg-alt);
}
.hero-content, .hero-media { flex: 1; }
.hero-media { display: flex; justify-content: center; }
.hero-title {
    font-size: 3.5rem;
    font-weight: 800;
    line-height: 1.1;
    margin: 0 0 1.5rem;
}
.hero-title-accent { color: var(--accent); }
.hero-description {
    max-width: 36rem;
    margin: 0 0 2rem;
    font-size: 1.25rem;
    color: var(--text-muted);
}
.hero-image {
    border-radius: var(--radius);
    border: 1px solid var(--border);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);
    background: #fff;
}

.steps {
    display: flex;
    gap: 3rem;
    width: 100%;
    max-width: 64rem;
}
.step { flex: 1; text-align: center; }
.step-icon, .card-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 4rem;
    height: 4rem;
    margin-bottom: 1.5rem;
    border-radius: 9999px;
    background: var(--accent-soft);
    color: var(--accent);
}
.card-icon { width: 3.5rem; height: 3.5rem; }
.step-title { font-size: 1.5rem; font-weight: 600; margin: 0 0 0.5rem; }
.step-description, .card-description { color: var(--text-muted); margin: 0; }

.card-grid {
    display: flex;
    gap: 2.5rem;
    width: 100%;
    max-width: 72rem;
}
.card {
    flex: 1;
    margin: 0;
    padding: 2rem;
    text-align: center;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}
.card-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }

/* Pricing */
.billing-toggle { display: flex; margin-bottom: 3rem; }
.billing-option {
    padding: 0.5rem 1.5rem;
    font-weight: 600;
    border: 1px solid var(--border);
    background: var(--bg-alt);
    color: var(--text-muted);
    cursor: pointer;
}
.billing-option:first-child { border-radius: 8px 0 0 8px; }
.billing-option:last-child { border-radius: 0 8px 8px 0; border-left: none; }
.billing-option.active { background: var(--accent); color: #fff; }

.plans {
    display: flex;
    gap: 2.5rem;
    width: 100%;
    max-width: 72rem;
}
.plan-card {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 2rem;
    text-align: center;
    background: var(--bg-alt);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}
.plan-name { font-size: 1.5rem; font-weight: 700; color: var(--accent); margin: 0 0 1rem; }
.plan-price { display: flex; align-items: baseline; margin-bottom: 0.5rem; }
.plan-amount { font-size: 3rem; font-weight: 800; }
.plan-period { margin-left: 0.5rem; font-size: 1.125rem; color: var(--text-muted); }
.plan-savings { margin-bottom: 0.75rem; font-size: 0.75rem; color: var(--success); }
.plan-features { list-style: none; margin: 1.5rem 0; padding: 0; }
.plan-feature {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}
.plan-feature .icon { color: var(--accent); }
.plan-choose { margin-top: auto; width: 100%; padding: 0.75rem 1.5rem; }

/* Testimonials */
.testimonial-avatar {
    width: 64px;
    height: 64px;
    margin-bottom: 1rem;
    border-radius: 9999px;
    object-fit: cover;
}
.testimonial-quote { margin: 0 0 1rem; font-style: italic; }
.testimonial-name { font-weight: 600; }
.testimonial-title { font-size: 0.875rem; color: var(--text-muted); }

/* Call to action */
.cta {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 4rem 1.5rem;
    background: #2563eb;
    color: #fff;
    text-align: center;
}
.cta-title { font-size: 2.25rem; font-weight: 700; margin: 0 0 1rem; }
.cta-description { max-width: 42rem; margin: 0 0 2rem; font-size: 1.125rem; color: #dbeafe; }

@media (max-width: 768px) {
    .hero { flex-direction: column-reverse; padding: 4rem 1.5rem; }
    .hero-title { font-size: 3rem; }
    .steps, .card-grid, .plans { flex-direction: column; }
}
"#;
