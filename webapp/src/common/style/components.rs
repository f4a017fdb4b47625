pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border: none;
  border-radius: var(--radius-lg);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
  transition: transform var(--transition-fast) var(--easing-standard),
  box-shadow var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
  transform: translateY(-2px);
  box-shadow: var(--shadow-md);
}

.btn:disabled {
  opacity: 0.7;
  cursor: wait;
  transform: none;
}

.btn-primary {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  color: var(--text-inverse);
}

.btn-secondary {
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.125rem;
}

/* Section scaffolding */
.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.section-title span {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.section-subtitle {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 600px;
  margin: 0 auto;
}

/* Reveal animation: sections render hidden and slide into place once
   their reveal latch flips */
.section-block {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow) var(--easing-standard),
  transform var(--transition-slow) var(--easing-standard);
}

.section-block.delayed {
  transition-delay: 200ms;
}

.section-block.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.form-group label {
  font-weight: 500;
  color: var(--text-primary);
}

.form-group input,
.form-group textarea {
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background: var(--background);
  color: var(--text-primary);
  font-size: 1rem;
  font-family: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-group textarea {
  min-height: 140px;
  resize: vertical;
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--primary);
}

.status-message {
  display: block;
  margin-top: var(--space-3);
  color: var(--primary);
  font-weight: 500;
}

/* Social links */
.social-links {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

.social-link {
  display: inline-flex;
  align-items: center;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard),
  border-color var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  color: var(--primary);
  border-color: var(--primary);
  text-decoration: none;
}

/* Not-found states (unknown route, unknown project id) */
.not-found {
  min-height: 50vh;
  display: flex;
  align-items: center;
  text-align: center;
  padding: var(--space-16) 0;
}

.not-found h1 {
  font-size: 2rem;
  margin-bottom: var(--space-4);
}

.not-found p {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}
"#;
