pub const SECTION_STYLES: &str = r#"
/* Hero */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-16) var(--space-4);
  text-align: center;
}

.profile-img {
  width: 180px;
  height: 180px;
  border-radius: var(--radius-full);
  object-fit: cover;
  border: 4px solid var(--primary);
}

.hero-title {
  color: var(--text-secondary);
  font-size: 1.25rem;
}

/* Skills */
.skill-progress-item {
  margin-bottom: var(--space-4);
}

.skill-name-level {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-1);
}

.progress-bar-container {
  height: 10px;
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  overflow: hidden;
}

.progress-bar-fill {
  height: 100%;
  width: 0;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--primary), var(--accent));
  transition: width var(--transition-slow) var(--easing-standard);
}

/* Experience timeline */
.experience-timeline {
  position: relative;
}

.experience-timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  background-color: var(--border);
}

.experience-entry {
  position: relative;
  margin-bottom: var(--space-8);
}

.experience-entry-dot {
  position: absolute;
  left: calc(50% - 7px);
  top: var(--space-4);
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.experience-content {
  width: 45%;
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.experience-content.align-right {
  margin-left: 55%;
}

.experience-content.align-left {
  margin-right: 55%;
}

.date-range {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
}

.project-card {
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-4px);
}

.project-card-image {
  width: 100%;
  height: 180px;
  object-fit: cover;
}

.project-card-content {
  padding: var(--space-4);
}

/* Education */
.education-entry {
  width: 45%;
  margin-bottom: var(--space-6);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.education-entry.align-right {
  margin-left: auto;
}

/* Contact */
.contact-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
}

.contact-social-links {
  display: flex;
  gap: var(--space-4);
  font-size: 1.5rem;
}

.site-footer {
  padding: var(--space-6);
  text-align: center;
  color: var(--text-secondary);
}

@media (max-width: 768px) {
  .experience-timeline::before,
  .experience-entry-dot {
    display: none;
  }

  .experience-content,
  .education-entry {
    width: 100%;
    margin: 0;
  }

  .experience-content.align-right,
  .experience-content.align-left {
    margin: 0;
  }
}
"#;
