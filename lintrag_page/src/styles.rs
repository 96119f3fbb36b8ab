//! CSS for the landing page.
//!
//! Plain CSS, no framework. Inlined into the document by default; pass
//! [`crate::RenderConfig::stylesheet`] to link an external file instead.
//!
//! ```rust
//! use lintrag_page::styles::PAGE_CSS;
//!
//! let themed = format!("{}\n.hero {{ color: #fde68a; }}", PAGE_CSS);
//! assert!(themed.contains(".hero"));
//! ```

/// Complete stylesheet for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --blue-100: #dbeafe;
    --accent: #2563eb;
    --accent-hover: #1d4ed8;
    --radius-lg: 0.75rem;
    --radius-xl: 1rem;
    --shadow: 0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06);
    --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1), 0 4px 6px rgba(0, 0, 0, 0.05);
    --shadow-xl: 0 20px 25px rgba(0, 0, 0, 0.1), 0 10px 10px rgba(0, 0, 0, 0.04);
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: #111827;
    line-height: 1.5;
}

img { display: block; max-width: 100%; }

h1, h2, h3, p { margin: 0; }

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.section-title.centered { text-align: center; margin-bottom: 2rem; }

/* Buttons */
.btn {
    display: inline-block;
    padding: 0.625rem 1.25rem;
    border-radius: 0.375rem;
    font-size: 0.95rem;
    font-weight: 500;
    cursor: pointer;
    border: 1px solid transparent;
    transition: background 0.15s ease, color 0.15s ease;
}

.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: var(--accent-hover); }

.btn-outline {
    background: transparent;
    color: inherit;
    border-color: currentColor;
}
.btn-outline:hover { background: rgba(255, 255, 255, 0.15); }

/* Hero */
.hero {
    background-size: cover;
    background-position: center;
    background-color: var(--gray-800);
    color: #fff;
    padding: 6rem 1.5rem;
    text-align: center;
}

.hero-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
.hero-tagline { font-size: 1.125rem; margin-bottom: 1.5rem; }
.hero-actions { display: flex; justify-content: center; gap: 1rem; }

/* About */
.about {
    display: grid;
    gap: 2rem;
    padding: 4rem 1.5rem;
    align-items: center;
}

.about-image { border-radius: var(--radius-xl); box-shadow: var(--shadow-lg); }
.about-text { font-size: 1.125rem; color: var(--gray-700); }

/* Segments */
.segments { background: var(--gray-50); padding: 4rem 1.5rem; }
.segments .section-title { font-size: 2.25rem; text-align: center; margin-bottom: 3rem; }
.segments-grid { display: grid; gap: 2rem; }

.segment-card {
    background: #fff;
    border-radius: var(--radius-xl);
    box-shadow: var(--shadow-xl);
    overflow: hidden;
}

.segment-image { width: 100%; height: 12rem; object-fit: cover; }
.segment-card-body { padding: 1.5rem; }
.segment-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }

.segment-benefits {
    list-style: disc inside;
    margin: 0;
    padding: 0;
    color: var(--gray-700);
}

/* Features */
.features { padding: 4rem 1.5rem; text-align: center; }
.features .section-title { font-size: 2.25rem; margin-bottom: 2rem; }

.features-grid {
    display: grid;
    gap: 2rem;
    text-align: left;
    max-width: 72rem;
    margin: 0 auto;
}

.feature-tile {
    padding: 1rem;
    background: var(--gray-100);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow);
}

.feature-label { font-size: 1.125rem; font-weight: 500; }

/* Demo booking */
.demo-booking { background: var(--blue-100); padding: 4rem 1.5rem; }

.demo-form {
    display: grid;
    gap: 1rem;
    max-width: 48rem;
    margin: 0 auto;
}

.form-input, .form-textarea {
    width: 100%;
    padding: 0.5rem 0.75rem;
    font: inherit;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    background: #fff;
}

.form-textarea { min-height: 6rem; resize: vertical; }

.form-input:focus, .form-textarea:focus {
    outline: 2px solid var(--accent);
    outline-offset: 1px;
}

/* Contact */
.contact {
    background: var(--gray-800);
    color: #fff;
    padding: 3rem 1.5rem;
    text-align: center;
}

.contact .section-title { font-size: 1.5rem; }
.contact-copyright { margin-top: 1rem; }

@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
    .hero-tagline { font-size: 1.5rem; }
    .about { grid-template-columns: repeat(2, 1fr); }
    .segments-grid { grid-template-columns: repeat(3, 1fr); }
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
