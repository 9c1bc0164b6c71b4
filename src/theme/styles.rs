//! Global stylesheet injected at the app root.

pub const GLOBAL_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', 'Segoe UI', -apple-system, sans-serif;
    -webkit-font-smoothing: antialiased;
}

.site {
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    transition: background 0.25s ease, color 0.25s ease;
}

.site.light {
    --bg: #ffffff;
    --bg-muted: #f4f6f8;
    --panel: #ffffff;
    --border: #e2e8f0;
    --text: #0f172a;
    --text-muted: #5b6676;
    --primary: #1d4ed8;
    --primary-hover: #1e40af;
    --primary-contrast: #ffffff;
    --destructive: #dc2626;
    --hero-overlay: rgba(10, 18, 35, 0.72);
}

.site.dark {
    --bg: #0b1120;
    --bg-muted: #101828;
    --panel: #0e1627;
    --border: #1f2a3d;
    --text: #e8edf4;
    --text-muted: #93a0b4;
    --primary: #3b82f6;
    --primary-hover: #2563eb;
    --primary-contrast: #ffffff;
    --destructive: #ef4444;
    --hero-overlay: rgba(5, 9, 18, 0.82);
}

.container {
    max-width: 1080px;
    margin: 0 auto;
    padding: 0 2rem;
}

/* === Header === */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}

.brand {
    display: flex;
    flex-direction: column;
}

.brand-name {
    font-weight: 700;
    font-size: 1.05rem;
    letter-spacing: -0.01em;
}

.brand-tagline {
    font-size: 0.72rem;
    color: var(--text-muted);
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 0.6rem;
}

/* === Buttons and badges === */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    border: 1px solid transparent;
    border-radius: 0.5rem;
    padding: 0.55rem 1.1rem;
    font-size: 0.9rem;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: background 0.15s ease, transform 0.15s ease;
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-contrast);
}

.btn-primary:hover {
    background: var(--primary-hover);
}

.btn-outline {
    background: transparent;
    color: var(--text);
    border-color: var(--border);
}

.btn-outline:hover {
    background: var(--bg-muted);
}

.btn-lg {
    padding: 0.8rem 1.6rem;
    font-size: 1rem;
}

.btn-sm {
    padding: 0.35rem 0.8rem;
    font-size: 0.8rem;
}

.btn-block {
    width: 100%;
}

.btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.btn-icon {
    background: transparent;
    border: none;
    color: var(--text);
    font-size: 1.05rem;
    line-height: 1;
    padding: 0.45rem;
    border-radius: 0.5rem;
    cursor: pointer;
}

.btn-icon:hover {
    background: var(--bg-muted);
}

.badge {
    display: inline-block;
    border-radius: 999px;
    padding: 0.3rem 0.85rem;
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-secondary {
    background: var(--bg-muted);
    color: var(--text);
}

.badge-outline {
    border: 1px solid var(--border);
    color: var(--text-muted);
}

/* === Hero === */

.hero {
    position: relative;
    padding: 6rem 0;
    background:
        linear-gradient(var(--hero-overlay), var(--hero-overlay)),
        linear-gradient(135deg, #16324f 0%, #0b1120 100%);
    color: #ffffff;
    text-align: center;
}

.hero-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.4rem;
}

.hero-title {
    font-size: 3rem;
    font-weight: 800;
    letter-spacing: -0.02em;
    line-height: 1.1;
}

.hero-title span {
    display: block;
}

.hero-pills {
    display: flex;
    gap: 0.5rem;
    flex-wrap: wrap;
    justify-content: center;
}

.pill {
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(255, 255, 255, 0.07);
    border-radius: 999px;
    padding: 0.3rem 0.9rem;
    font-size: 0.85rem;
}

.hero-lede {
    max-width: 44rem;
    color: rgba(255, 255, 255, 0.82);
    line-height: 1.65;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
    justify-content: center;
}

.hero .btn-outline {
    color: #ffffff;
    border-color: rgba(255, 255, 255, 0.25);
    background: rgba(255, 255, 255, 0.08);
}

/* === Sections === */

.about,
.services,
.contact {
    padding: 5rem 0;
}

.services {
    background: var(--bg-muted);
}

.section-head,
.about-inner {
    text-align: center;
    max-width: 46rem;
    margin: 0 auto 3rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.section-title {
    font-size: 2rem;
    font-weight: 700;
    letter-spacing: -0.01em;
}

.section-lede {
    color: var(--text-muted);
    line-height: 1.65;
}

.card {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 1.5rem;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.card:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.card-icon {
    font-size: 1.5rem;
    margin-bottom: 0.75rem;
    color: var(--primary);
}

.card-title {
    font-size: 1.05rem;
    font-weight: 600;
    margin-bottom: 0.4rem;
}

.card-text {
    font-size: 0.88rem;
    color: var(--text-muted);
    line-height: 1.55;
}

.about-cards {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem;
    width: 100%;
    max-width: 30rem;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1rem;
    max-width: 64rem;
    margin: 0 auto;
}

/* === Contact === */

.contact-cards {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1.25rem;
    max-width: 56rem;
    margin: 0 auto 3rem;
}

.contact-card {
    text-align: center;
    padding: 2rem 1.5rem;
}

.contact-icon {
    width: 3.5rem;
    height: 3.5rem;
    margin: 0 auto 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: var(--primary);
    color: var(--primary-contrast);
    font-size: 1.4rem;
}

.contact-line {
    color: var(--text-muted);
    margin-bottom: 0.3rem;
}

.contact-sub {
    font-size: 0.82rem;
    color: var(--text-muted);
}

/* === Quote form === */

.quote-form-panel {
    max-width: 42rem;
    margin: 0 auto;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 2rem;
}

.quote-form-title {
    text-align: center;
    font-size: 1.4rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.quote-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.form-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1.25rem;
}

.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}

.form-field label {
    font-size: 0.85rem;
    font-weight: 600;
}

.input {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    padding: 0.6rem 0.8rem;
    font-size: 0.9rem;
    color: var(--text);
    font-family: inherit;
}

.input:focus {
    outline: 2px solid var(--primary);
    outline-offset: 1px;
}

.message-textarea {
    resize: vertical;
    min-height: 7.5rem;
}

.form-error {
    color: var(--destructive);
    font-size: 0.85rem;
}

/* === Cookie banner === */

.cookie-banner {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 60;
    background: var(--bg);
    border-top: 1px solid var(--border);
    box-shadow: 0 -6px 24px rgba(0, 0, 0, 0.1);
}

.cookie-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding-top: 1rem;
    padding-bottom: 1rem;
    flex-wrap: wrap;
}

.cookie-text {
    font-size: 0.85rem;
    flex: 1;
    min-width: 16rem;
}

.cookie-actions {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

/* === Toasts === */

.toast-host {
    position: fixed;
    bottom: 1.25rem;
    right: 1.25rem;
    z-index: 70;
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
    max-width: 22rem;
}

.toast {
    display: flex;
    align-items: flex-start;
    gap: 0.6rem;
    background: var(--panel);
    border: 1px solid var(--border);
    border-left: 4px solid var(--primary);
    border-radius: 0.5rem;
    padding: 0.9rem 1rem;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.14);
}

.toast-destructive {
    border-left-color: var(--destructive);
}

.toast-body {
    flex: 1;
}

.toast-title {
    font-weight: 600;
    font-size: 0.9rem;
    margin-bottom: 0.15rem;
}

.toast-description {
    font-size: 0.82rem;
    color: var(--text-muted);
}

.toast-close {
    font-size: 0.9rem;
}

/* === Section fault === */

.section-fault {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.8rem;
    text-align: center;
    margin: 2rem auto;
    max-width: 30rem;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 2.5rem 2rem;
}

.fault-icon {
    font-size: 2rem;
    color: var(--destructive);
}

.fault-title {
    font-size: 1.2rem;
    font-weight: 700;
}

.fault-text {
    color: var(--text-muted);
}

/* === Footer === */

.site-footer {
    border-top: 1px solid var(--border);
    padding: 3rem 0;
}

.footer-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    flex-wrap: wrap;
}

.footer-copy {
    font-size: 0.85rem;
    color: var(--text-muted);
}
"#;
