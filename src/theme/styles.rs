//! Global CSS styles for the portfolio.
//!
//! Reveal transitions are written inline by the reveal components; this sheet
//! covers layout, hover effects and the load-time entrance of the nav bar and
//! footer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f3f4f6;
  --chrome: #1f2937;
  --chrome-text: #ffffff;
  --chrome-hover: #d1d5db;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Accents */
  --accent: #2563eb;
  --accent-strong: #1e40af;
  --linkedin: #2563eb;
  --github: #1f2937;
  --twitter: #60a5fa;
  --email: #dc2626;

  /* Typography */
  --font-sans: 'Geist', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --navbar-height: 4rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Layout === */
.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-main {
  flex-grow: 1;
  width: 100%;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.reveal-section {
  margin-bottom: 4rem;
  /* Keep headings clear of the sticky nav bar after scrolling */
  scroll-margin-top: calc(var(--navbar-height) + 1rem);
}

.reveal-section.centered,
.section-title.centered {
  text-align: center;
}

.reveal-item,
.reveal-section {
  will-change: opacity, transform;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-body {
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.section-lead {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

/* === Navigation Bar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  background: var(--chrome);
  color: var(--chrome-text);
  animation: navbar-enter 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
}

@keyframes navbar-enter {
  from {
    transform: translateY(-100px);
  }
  to {
    transform: translateY(0);
  }
}

.navbar-inner {
  max-width: 1100px;
  height: var(--navbar-height);
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.navbar-brand {
  font-size: var(--text-xl);
  font-weight: 700;
}

.navbar-links {
  display: flex;
  gap: 1rem;
}

.btn-nav,
.btn-menu-item,
.icon-btn {
  background: transparent;
  border: none;
  color: inherit;
  font: inherit;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.btn-nav:hover,
.btn-menu-item:hover,
.icon-btn:hover {
  color: var(--chrome-hover);
}

.navbar-toggle {
  display: none;
  line-height: 0;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  padding: 0.5rem 1rem 1rem;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.btn-menu-item {
  text-align: left;
  padding: 0.5rem 0;
  width: 100%;
}

/* === Hero === */
.hero {
  text-align: center;
}

.hero-photo {
  margin-bottom: 1.5rem;
}

.hero-avatar {
  border-radius: 9999px;
  border: 4px solid #d1d5db;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.hero-avatar:hover {
  transform: scale(1.05);
}

.hero-name {
  font-size: var(--text-4xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.hero-headline {
  font-size: var(--text-xl);
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.hero-summary {
  font-size: var(--text-lg);
  max-width: 42rem;
  margin: 0 auto 1rem;
}

/* === Skills & Tools === */
.skill-list,
.achievement-list {
  list-style: disc inside;
  font-size: var(--text-lg);
}

.skill {
  transition: color var(--transition-normal);
}

.skill:hover {
  color: var(--accent);
}

.tool-grid {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  font-size: var(--text-lg);
}

.tool {
  display: flex;
  align-items: center;
}

.tool:hover {
  transform: scale(1.05) !important;
}

.tool-dot {
  height: 0.375rem;
  width: 0.375rem;
  border-radius: 9999px;
  background: var(--text-primary);
  margin-right: 0.5rem;
}

/* === Achievements === */
.achievement {
  margin-bottom: 0.5rem;
}

.achievement-icon {
  margin-right: 0.375rem;
}

.achievement-company {
  margin-left: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
  white-space: nowrap;
}

/* === Companies === */
.divider-row {
  display: flex;
  justify-content: center;
  margin-bottom: 2rem;
}

.divider {
  height: 0.25rem;
  width: 6rem;
  background: var(--accent);
  border-radius: 0.25rem;
}

.company-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  align-items: center;
}

.company {
  display: flex;
  justify-content: center;
}

.company-link {
  display: inline-flex;
  transition: transform var(--transition-normal);
}

.company-link:hover {
  transform: scale(1.1);
}

.company-link:active {
  transform: scale(0.95);
}

.company-logo {
  object-fit: contain;
  filter: grayscale(100%);
  transition: filter var(--transition-normal);
}

.company-logo:hover {
  filter: grayscale(0);
}

/* === Testimonials === */
.testimonial-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.testimonial-card {
  background: var(--surface);
  padding: 1.5rem;
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.testimonial-card:hover {
  transform: scale(1.02) !important;
}

.testimonial-text {
  font-size: var(--text-lg);
  font-style: italic;
  color: #1f2937;
  margin-bottom: 1rem;
}

.testimonial-author {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  text-align: right;
}

/* === Contact === */
.social-row {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.social-link {
  display: inline-flex;
  transition: transform var(--transition-fast);
}

.social-link:hover {
  transform: scale(1.2) rotate(5deg);
}

.social-link:active {
  transform: scale(0.9);
}

.social-linkedin { color: var(--linkedin); }
.social-github { color: var(--github); }
.social-twitter { color: var(--twitter); }
.social-email { color: var(--email); }

/* === Footer === */
.footer {
  background: var(--chrome);
  color: var(--chrome-text);
  text-align: center;
  padding: 1rem;
  opacity: 0;
  animation: footer-enter 0.5s ease 0.5s forwards;
}

@keyframes footer-enter {
  to {
    opacity: 1;
  }
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-delay: 0ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    transition-delay: 0ms !important;
  }
}

/* === Responsive Layout === */
@media (max-width: 768px) {
  .navbar-links {
    display: none;
  }

  .navbar-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }

  .company-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .testimonial-grid {
    grid-template-columns: 1fr;
  }

  .tool-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_clear_the_sticky_nav() {
        assert!(GLOBAL_STYLES.contains("scroll-margin-top: calc(var(--navbar-height) + 1rem);"));
        assert!(GLOBAL_STYLES.contains("--navbar-height:"));
    }
}
