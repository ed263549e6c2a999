pub const MODAL_STYLES: &str = r#"
body.modal-open {
  overflow: hidden;
}

.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: block;
  overflow-y: auto;
  background-color: var(--overlay);
}

.media-modal {
  z-index: 110;
}

.modal-content {
  position: relative;
  max-width: 900px;
  margin: var(--space-12) auto;
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.close-button {
  position: absolute;
  top: var(--space-3);
  right: var(--space-4);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
  color: var(--text-secondary);
}

.modal-project-cover {
  width: 100%;
  max-height: 360px;
  object-fit: cover;
  border-radius: var(--radius-md);
  margin: var(--space-4) 0;
}

.modal-subsection {
  margin-top: var(--space-6);
}

.modal-subsection ul {
  padding-left: var(--space-6);
}

.project-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

.project-media-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: var(--space-3);
}

.media-item {
  width: 100%;
  border-radius: var(--radius-md);
  cursor: zoom-in;
}

.media-modal-content {
  position: relative;
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 100%;
  padding: var(--space-12) var(--space-4);
}

.media-modal-content img,
.media-modal-content video {
  max-width: 95%;
  max-height: 85vh;
  border-radius: var(--radius-md);
}

.media-modal-close {
  color: #FFFFFF;
}
"#;
