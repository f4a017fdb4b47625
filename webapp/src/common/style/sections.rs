pub const SECTION_STYLES: &str = r#"
/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: var(--space-4) 0;
  background: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
  box-shadow var(--transition-normal) var(--easing-standard);
}

.navbar.scrolled {
  background: var(--surface);
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-logo {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-logo:hover {
  text-decoration: none;
}

.nav-logo span {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.nav-links {
  display: flex;
  gap: var(--space-6);
  align-items: center;
}

.nav-link {
  color: var(--text-primary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  background: var(--border);
  text-decoration: none;
}

.nav-menu-button {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
  padding: var(--space-2);
}

.mobile-menu {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(10px);
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: var(--space-8);
  z-index: 999;
}

.mobile-nav-link {
  color: var(--text-inverse);
  font-size: 1.5rem;
  font-weight: 600;
  padding: var(--space-4);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-menu-button {
    display: block;
  }
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  overflow: hidden;
}

.hero-content {
  position: relative;
  z-index: 1;
  animation: hero-enter 1s var(--easing-standard);
}

@keyframes hero-enter {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.hero-greeting {
  color: rgba(255, 255, 255, 0.85);
  font-size: 1.25rem;
  margin-bottom: var(--space-3);
}

.hero-name {
  font-size: 3.5rem;
  font-weight: 800;
  margin-bottom: var(--space-3);
}

.hero-name span {
  background: linear-gradient(135deg, #fff, #e2e8f0);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.hero-role {
  font-size: 1.5rem;
  font-weight: 700;
  color: #c4b5fd;
  margin-bottom: var(--space-4);
  letter-spacing: -1px;
}

.hero-tagline {
  color: rgba(255, 255, 255, 0.8);
  font-size: 1.125rem;
  margin-bottom: var(--space-8);
}

.hero-cta {
  margin-bottom: var(--space-8);
}

.hero-social {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
}

.hero-social .social-link {
  color: rgba(255, 255, 255, 0.85);
  border-color: rgba(255, 255, 255, 0.3);
}

.hero-social .social-link:hover {
  color: #fff;
  border-color: #fff;
}

.floating-elements {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-element {
  position: absolute;
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.08);
  animation: float 8s ease-in-out infinite;
}

.float-a { width: 100px; height: 100px; top: 20%; left: 10%; }
.float-b { width: 60px; height: 60px; top: 60%; right: 15%; animation-duration: 6s; }
.float-c { width: 80px; height: 80px; bottom: 30%; left: 20%; animation-duration: 10s; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.8);
  font-size: 1.5rem;
  cursor: pointer;
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}

/* Routed content under the fixed navbar */
.page-body {
  position: relative;
  background: var(--background);
}

/* About */
.about-section {
  padding: var(--space-16) 0;
}

.about-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: start;
}

.about-text h3 {
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
  line-height: 1.7;
}

.feature-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.feature-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  transition: transform var(--transition-normal) var(--easing-standard),
  box-shadow var(--transition-normal) var(--easing-standard);
}

.feature-card:hover {
  transform: translateY(-5px);
  box-shadow: var(--shadow-lg);
}

.feature-title {
  font-size: 1.125rem;
  margin-bottom: var(--space-2);
}

.feature-desc {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Skills */
.skills-section {
  padding: var(--space-16) 0;
  background: var(--surface);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
  margin-bottom: var(--space-16);
}

.skill-category {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
}

.category-title {
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
  color: var(--primary);
}

.skills-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.skill-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.skill-item:hover {
  transform: scale(1.05);
  border-color: var(--primary);
}

.progress-title {
  font-size: 1.25rem;
  text-align: center;
  margin-bottom: var(--space-8);
}

.progress-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-4);
}

.progress-card {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
}

.progress-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
}

.progress-name {
  font-weight: 500;
}

.progress-percentage {
  color: var(--text-secondary);
}

.progress-bar {
  width: 100%;
  height: 8px;
  background: var(--border);
  border-radius: var(--radius-sm);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  border-radius: var(--radius-sm);
  transition: width 1s var(--easing-standard) 200ms;
}

/* Projects */
.projects-section {
  padding: var(--space-16) 0;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-8);
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  transition: transform var(--transition-normal) var(--easing-standard),
  box-shadow var(--transition-normal) var(--easing-standard),
  border-color var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-10px);
  box-shadow: var(--shadow-lg);
  border-color: var(--primary);
}

.project-image {
  width: 100%;
  height: 200px;
  background: linear-gradient(135deg, var(--primary), var(--accent));
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-inverse);
  font-size: 2.5rem;
  font-weight: 700;
}

.project-content {
  padding: var(--space-6);
}

.project-title {
  font-size: 1.25rem;
  margin-bottom: var(--space-3);
}

.project-desc {
  font-size: 0.875rem;
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: var(--space-4);
}

.project-tech {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.tech-tag {
  background: var(--primary);
  color: var(--text-inverse);
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-sm);
  font-size: 0.75rem;
  font-weight: 500;
}

.project-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

.project-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.project-link:hover {
  transform: translateY(-2px);
  text-decoration: none;
}

.project-link.primary {
  background: var(--primary);
  color: var(--text-inverse);
}

.project-link.secondary {
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.project-link.secondary:hover {
  border-color: var(--primary);
  color: var(--primary);
}

/* Project detail */
.project-detail {
  padding: calc(var(--header-height) + var(--space-8)) 0 var(--space-16);
}

.back-link {
  display: inline-block;
  margin-bottom: var(--space-8);
  color: var(--text-secondary);
  font-weight: 500;
}

.back-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.detail-header {
  margin-bottom: var(--space-12);
}

.detail-image {
  border-radius: var(--radius-xl);
  margin-bottom: var(--space-6);
}

.detail-title {
  font-size: 2.5rem;
  margin-bottom: var(--space-3);
}

.detail-blurb {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
  max-width: 720px;
}

.detail-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.detail-actions {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

.detail-body {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-12);
}

.detail-main h2 {
  margin-bottom: var(--space-4);
}

.detail-description {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: var(--space-8);
  white-space: pre-line;
}

.detail-list {
  margin-bottom: var(--space-8);
}

.detail-list h3 {
  margin-bottom: var(--space-3);
}

.detail-list li {
  margin-left: var(--space-6);
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

.detail-sidebar {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  height: fit-content;
}

.detail-sidebar h3 {
  margin-bottom: var(--space-4);
}

.detail-sidebar dt {
  font-weight: 600;
  margin-top: var(--space-3);
}

.detail-sidebar dd {
  color: var(--text-secondary);
}

/* Contact */
.contact-section {
  padding: var(--space-16) 0;
  background: var(--surface);
}

.contact-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
}

.contact-info h3 {
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.contact-info > p {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.contact-item {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.contact-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  border-radius: var(--radius-full);
  background: var(--background);
  border: 1px solid var(--border);
  font-size: 1.25rem;
}

.contact-details h4 {
  font-size: 0.875rem;
}

.contact-details a,
.contact-details span {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.contact-form {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-8);
}

.submit-button {
  width: 100%;
}

/* Footer */
.site-footer {
  background: var(--surface);
  border-top: 1px solid var(--border);
  padding: var(--space-16) 0 var(--space-6);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr 1fr;
  gap: var(--space-8);
  margin-bottom: var(--space-12);
}

.footer-brand h3 {
  margin-bottom: var(--space-3);
}

.footer-brand p {
  color: var(--text-secondary);
  max-width: 320px;
}

.footer-column h4 {
  margin-bottom: var(--space-4);
}

.footer-column li {
  list-style: none;
  margin-bottom: var(--space-2);
}

.footer-column a,
.footer-column span {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.footer-column a:hover {
  color: var(--primary);
}

.footer-bottom {
  border-top: 1px solid var(--border);
  padding-top: var(--space-6);
  text-align: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Theme toggle */
.theme-toggle {
  position: fixed;
  bottom: var(--space-8);
  right: var(--space-8);
  width: 56px;
  height: 56px;
  border-radius: var(--radius-full);
  background: var(--surface);
  color: var(--text-primary);
  border: 2px solid var(--border);
  box-shadow: var(--shadow-lg);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  cursor: pointer;
  z-index: 2000;
  transition: background-color var(--transition-fast) var(--easing-standard),
  transform var(--transition-fast) var(--easing-standard);
}

.theme-toggle:hover {
  transform: scale(1.05);
}

/* Responsive collapses */
@media (max-width: 900px) {
  .about-content,
  .contact-content,
  .detail-body {
    grid-template-columns: 1fr;
  }

  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }
}
"#;
