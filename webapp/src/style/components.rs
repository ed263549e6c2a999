pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.btn-primary {
  background-color: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-secondary {
  background-color: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

/* Sections */
.section {
  padding: var(--space-16) var(--space-4);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  margin-bottom: var(--space-8);
  text-align: center;
}

.section-error {
  text-align: center;
  color: var(--error);
}

/* Navigation */
.navbar {
  position: sticky;
  top: 0;
  z-index: 10;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-links {
  display: flex;
  gap: var(--space-6);
  list-style: none;
}

.nav-links a {
  color: var(--text-primary);
}

.nav-actions {
  display: flex;
  gap: var(--space-3);
}

.theme-toggle, .menu-toggle {
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
}

.menu-toggle {
  display: none;
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: var(--space-4);
    background-color: var(--surface);
  }

  .nav-links.active {
    display: flex;
  }
}
"#;
