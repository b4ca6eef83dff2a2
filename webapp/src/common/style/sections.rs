pub const SECTION_STYLES: &str = r#"
/* Page Section Styles */

section {
  padding: var(--space-20) 0;
}

/* Navigation */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-sm);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  background: var(--gradient-accent);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  cursor: pointer;
}

.logo:hover {
  text-decoration: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
  background-color: var(--chip);
  text-decoration: none;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  font-size: 1.125rem;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.icon-button:hover {
  transform: var(--hover-lift);
}

.menu-button {
  display: none;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: calc(var(--header-height) + var(--space-12));
  text-align: center;
}

.hero-content {
  max-width: 800px;
  margin: 0 auto;
}

.hero-greeting {
  color: var(--primary);
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.1;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
}

.hero-title .accent {
  background: var(--gradient-accent);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-headline {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.hero-tagline {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
}

/* About */
.about {
  background-color: var(--surface);
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: var(--space-12);
  align-items: center;
}

.about-photo {
  width: 100%;
  max-width: 360px;
  aspect-ratio: 1;
  object-fit: cover;
  margin: 0 auto;
  display: block;
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  border: 4px solid transparent;
  background: var(--gradient-accent) border-box;
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.highlights {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.highlight {
  padding: var(--space-4);
  text-align: center;
}

.highlight-value {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--primary);
}

.highlight-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
}

.project-card {
  display: flex;
  flex-direction: column;
}

.project-accent {
  height: 6px;
  background: var(--gradient-accent);
}

.project-body {
  display: flex;
  flex-direction: column;
  flex: 1;
  padding: var(--space-6);
  gap: var(--space-4);
}

.project-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.project-description {
  color: var(--text-secondary);
  flex: 1;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.project-links {
  display: flex;
  gap: var(--space-3);
}

/* Skills */
.skills {
  background-color: var(--surface);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-8);
}

.skill-group {
  padding: var(--space-6);
}

.skill-group-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
}

.skill {
  margin-bottom: var(--space-4);
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
  font-weight: 500;
}

.skill-level {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.tag-cloud {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  margin-top: var(--space-12);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: var(--space-8);
}

.contact-info {
  padding: var(--space-6);
}

.contact-info h3 {
  margin-bottom: var(--space-4);
}

.contact-detail {
  margin-bottom: var(--space-4);
}

.contact-detail-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.contact-form {
  padding: var(--space-6);
}

.social-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

/* Footer */
.page-footer {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-secondary);
}

.page-footer .social-links {
  justify-content: center;
  margin: 0 0 var(--space-4);
}

.catalog-error {
  padding: var(--space-16) var(--space-4);
  text-align: center;
  color: var(--text-secondary);
}

/* Responsive layout */
@media (max-width: 768px) {
  .menu-button {
    display: inline-flex;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: stretch;
    padding: var(--space-4);
    background-color: var(--surface);
    border-bottom: 1px solid var(--border);
    box-shadow: var(--shadow-md);
  }

  .nav-links.open {
    display: flex;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .about-grid,
  .skills-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }
}
"#;
