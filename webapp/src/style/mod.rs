use constcat::concat;

mod components;
mod modal;
mod sections;
mod variables;

use components::BASE_COMPONENTS;
use modal::MODAL_STYLES;
use sections::SECTION_STYLES;
use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES,
    MODAL_STYLES,
);
