pub const HOME_STYLES: &str = r#"
/* Top navigation */
.top-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  z-index: 50;
  transform: translateY(-100%);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.top-nav.visible {
  transform: translateY(0);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
  text-decoration: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  background: none;
  border: none;
  color: var(--text-secondary);
  font: inherit;
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  cursor: pointer;
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-clock {
  text-align: right;
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.nav-clock-time {
  color: var(--text-primary);
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  color: var(--text-primary);
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
}

/* Home page */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
}

.hero-toggle {
  display: flex;
  justify-content: flex-end;
  margin-bottom: var(--space-8);
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin: var(--space-4) 0 var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

.section {
  padding: var(--space-16) 0;
}

.section-title {
  font-size: 2rem;
  margin-bottom: var(--space-6);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
}

.project-card {
  padding: var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
}

.contact-form {
  max-width: 560px;
}

.contact-thanks {
  font-size: 1.1rem;
}

.resume-page {
  padding-top: calc(var(--header-height) + var(--space-8));
}

.resume-frame {
  width: 100%;
  height: 80vh;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.site-footer {
  padding: var(--space-8) 0;
  color: var(--text-secondary);
  text-align: center;
}
"#;
